use super::{Border, Color, TextStyle};

/// Paint properties of one element. Unset colours and text attributes are
/// inherited from the nearest ancestor that sets them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border: Border,
    pub border_color: Option<Color>,
    pub text_style: TextStyle,
}

macro_rules! text_flags {
    ($($flag:ident),*) => {
        $(
            pub const fn $flag(self) -> Self {
                self.text_style(self.text_style.$flag())
            }
        )*
    };
}

impl Style {
    pub const fn new() -> Self {
        Self {
            background: None,
            foreground: None,
            border: Border::None,
            border_color: None,
            text_style: TextStyle::new(),
        }
    }

    pub const fn background(self, color: Color) -> Self {
        Self {
            background: Some(color),
            ..self
        }
    }

    pub const fn foreground(self, color: Color) -> Self {
        Self {
            foreground: Some(color),
            ..self
        }
    }

    pub const fn border(self, border: Border) -> Self {
        Self { border, ..self }
    }

    /// Border glyph colour; falls back to the foreground.
    pub const fn border_color(self, color: Color) -> Self {
        Self {
            border_color: Some(color),
            ..self
        }
    }

    pub const fn text_style(self, text_style: TextStyle) -> Self {
        Self { text_style, ..self }
    }

    text_flags!(bold, underline, dim);
}
