//! Element tree construction for the InputField component.

use tabula_dom::{Border, Edges, Element, Size, Style, TextStyle};

use crate::theme::Theme;

use super::state::{InputField, InputKind, InputVariant};

impl InputField {
    /// Build the element tree: optional label, the field box and an optional
    /// helper or error line.
    pub fn render(&self, theme: &Theme) -> Element {
        let mut root = Element::col().id(self.id_str()).width(Size::Fill);

        if let Some(label) = self.label_text() {
            root = root.child(
                Element::text(label).style(Style::new().foreground(theme.secondary).bold()),
            );
        }

        root = root.child(self.render_field(theme));

        if let Some(message) = self.message() {
            let color = if self.is_invalid() {
                theme.error
            } else {
                theme.muted
            };
            root = root.child(Element::text(message).style(Style::new().foreground(color)));
        }

        root
    }

    fn render_field(&self, theme: &Theme) -> Element {
        let (pad_x, pad_y) = self.current_size().padding();

        let accent = if self.is_invalid() {
            theme.error
        } else if self.is_focused() {
            theme.accent
        } else {
            theme.border
        };

        let mut style = match self.current_variant() {
            InputVariant::Outlined => Style::new().border(Border::Rounded).border_color(accent),
            InputVariant::Filled => Style::new()
                .background(theme.surface)
                .border(Border::Single)
                .border_color(accent),
            InputVariant::Ghost => Style::new(),
        };
        style = style.foreground(if self.is_disabled() {
            theme.muted
        } else {
            theme.primary
        });
        if self.is_disabled() {
            style = style.dim();
        }

        let mut field = Element::row()
            .id(format!("{}:field", self.id_str()))
            .width(Size::Fill)
            .padding(Edges::symmetric(pad_y, pad_x))
            .gap(1)
            .style(style)
            .clickable(true)
            .disabled(self.is_disabled())
            .child(self.render_value(theme));

        if self.shows_clear() {
            field = field.child(
                Element::text("✕")
                    .id(format!("{}:clear", self.id_str()))
                    .style(Style::new().foreground(theme.muted))
                    .clickable(true)
                    .disabled(self.is_disabled()),
            );
        }

        if self.current_kind() == InputKind::Password {
            let label = if self.is_password_visible() {
                "Hide"
            } else {
                "Show"
            };
            field = field.child(
                Element::text(label)
                    .id(format!("{}:toggle-password", self.id_str()))
                    .style(Style::new().foreground(theme.accent))
                    .clickable(true)
                    .disabled(self.is_disabled()),
            );
        }

        field
    }

    fn render_value(&self, theme: &Theme) -> Element {
        let underline = self.current_variant() == InputVariant::Ghost;
        let value_style = if underline {
            TextStyle::new().underline()
        } else {
            TextStyle::new()
        };

        if self.is_empty() {
            let placeholder = Element::text(self.placeholder_text().to_string())
                .style(Style::new().foreground(theme.muted).text_style(value_style.dim()));
            let mut value = Element::row().width(Size::Fill);
            if self.is_focused() {
                value = value.child(cursor_cell(" ", value_style));
            }
            return value.child(placeholder);
        }

        let display = self.display_value();
        let value = Element::row()
            .width(Size::Fill)
            .style(Style::new().text_style(value_style));

        if !self.is_focused() {
            return value.child(Element::text(display));
        }

        // Split around the cursor; masked values have one glyph per char.
        let cursor_chars = self.text()[..self.cursor()].chars().count();
        let before: String = display.chars().take(cursor_chars).collect();
        let at = display.chars().nth(cursor_chars);
        let after: String = display.chars().skip(cursor_chars + 1).collect();

        let mut value = value.child(Element::text(before));
        match at {
            Some(c) => {
                value = value
                    .child(cursor_cell(&c.to_string(), value_style))
                    .child(Element::text(after));
            }
            None => value = value.child(cursor_cell(" ", value_style)),
        }
        value
    }
}

fn cursor_cell(text: &str, style: TextStyle) -> Element {
    Element::text(text).style(Style::new().text_style(style.reversed()))
}
