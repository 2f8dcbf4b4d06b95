//! Checkbox glyphs for row and header selection controls.

use tabula_dom::{Element, Size, Style};

use crate::theme::Theme;

/// Visual state of a selection checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckState {
    #[default]
    Unchecked,
    Checked,
    /// Some, but not all, of the covered rows are selected.
    Indeterminate,
}

impl CheckState {
    /// State of a control covering `total` rows of which `selected` are on.
    pub fn from_counts(selected: usize, total: usize) -> Self {
        if total > 0 && selected >= total {
            CheckState::Checked
        } else if selected > 0 {
            CheckState::Indeterminate
        } else {
            CheckState::Unchecked
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            CheckState::Unchecked => "□",
            CheckState::Checked => "■",
            CheckState::Indeterminate => "▣",
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, CheckState::Checked)
    }
}

impl From<bool> for CheckState {
    fn from(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }
}

/// Render a one-cell clickable checkbox.
pub fn render_checkbox(id: impl Into<String>, state: CheckState, theme: &Theme) -> Element {
    let style = match state {
        CheckState::Unchecked => Style::new().foreground(theme.muted),
        CheckState::Checked | CheckState::Indeterminate => {
            Style::new().foreground(theme.accent).bold()
        }
    };

    Element::text(state.glyph())
        .id(id)
        .width(Size::Fixed(1))
        .style(style)
        .clickable(true)
}
