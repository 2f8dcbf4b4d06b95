use std::fmt;

/// Called with the new value after every edit.
pub type ChangeCallback = Box<dyn FnMut(&str)>;

/// Visual treatment of the field box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputVariant {
    /// Surface background with a square border
    Filled,
    /// Rounded border, no background
    #[default]
    Outlined,
    /// No box; the value is underlined
    Ghost,
}

/// Field size, controlling padding around the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl InputSize {
    /// Horizontal and vertical padding inside the field box.
    pub fn padding(&self) -> (u16, u16) {
        match self {
            InputSize::Sm => (1, 0),
            InputSize::Md => (2, 0),
            InputSize::Lg => (3, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    /// Masked unless the password is revealed
    Password,
}

/// A text input field.
///
/// The cursor is a byte offset into the value and always sits on a char
/// boundary.
pub struct InputField {
    id: String,
    value: String,
    cursor: usize,
    label: Option<String>,
    placeholder: String,
    helper_text: Option<String>,
    error_message: Option<String>,
    disabled: bool,
    invalid: bool,
    variant: InputVariant,
    size: InputSize,
    kind: InputKind,
    clearable: bool,
    show_password: bool,
    focused: bool,
    on_change: Option<ChangeCallback>,
}

impl fmt::Debug for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputField")
            .field("id", &self.id)
            .field("value", &self.value)
            .field("cursor", &self.cursor)
            .field("variant", &self.variant)
            .field("kind", &self.kind)
            .field("disabled", &self.disabled)
            .field("invalid", &self.invalid)
            .finish_non_exhaustive()
    }
}

impl Default for InputField {
    fn default() -> Self {
        Self {
            id: format!("input-{}", uuid::Uuid::new_v4().simple()),
            value: String::new(),
            cursor: 0,
            label: None,
            placeholder: String::new(),
            helper_text: None,
            error_message: None,
            disabled: false,
            invalid: false,
            variant: InputVariant::default(),
            size: InputSize::default(),
            kind: InputKind::default(),
            clearable: true,
            show_password: false,
            focused: false,
            on_change: None,
        }
    }
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Builder
    // -------------------------------------------------------------------------

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Initial value; the cursor is placed at its end.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.cursor = self.value.len();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn variant(mut self, variant: InputVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    pub fn on_change(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn id_str(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Cursor position (byte offset)
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn placeholder_text(&self) -> &str {
        &self.placeholder
    }

    pub fn helper(&self) -> Option<&str> {
        self.helper_text.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn current_variant(&self) -> InputVariant {
        self.variant
    }

    pub fn current_size(&self) -> InputSize {
        self.size
    }

    pub fn current_kind(&self) -> InputKind {
        self.kind
    }

    pub fn is_password_visible(&self) -> bool {
        self.show_password
    }

    /// Whether the clear action is offered.
    pub fn shows_clear(&self) -> bool {
        self.clearable && !self.value.is_empty()
    }

    /// Value as it should be drawn: masked for hidden passwords.
    pub fn display_value(&self) -> String {
        match self.kind {
            InputKind::Password if !self.show_password => "•".repeat(self.value.chars().count()),
            _ => self.value.clone(),
        }
    }

    /// Message shown under the field, if any.
    pub fn message(&self) -> Option<&str> {
        if self.invalid {
            self.error_message.as_deref()
        } else {
            self.helper_text.as_deref()
        }
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Replace the value without notifying, e.g. after the host consumed it.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn set_invalid(&mut self, invalid: bool) {
        self.invalid = invalid;
    }

    pub fn set_error_message(&mut self, message: Option<String>) {
        self.error_message = message;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn set_on_change(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// Empty the value and notify with "".
    pub fn clear(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        self.value.clear();
        self.cursor = 0;
        log::debug!("{}: cleared", self.id);
        self.notify();
        true
    }

    /// Flip between masked and plain display of a password.
    pub fn toggle_password(&mut self) -> bool {
        if self.kind != InputKind::Password {
            return false;
        }
        self.show_password = !self.show_password;
        true
    }

    // -------------------------------------------------------------------------
    // Text manipulation
    // -------------------------------------------------------------------------

    /// Insert a character at the cursor position.
    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        self.notify();
    }

    /// Delete the character before the cursor (backspace).
    pub fn delete_char_before(&mut self) -> bool {
        let Some(prev) = self.prev_boundary() else {
            return false;
        };
        self.value.remove(prev);
        self.cursor = prev;
        self.notify();
        true
    }

    /// Delete the character at the cursor (delete key).
    pub fn delete_char_at(&mut self) -> bool {
        if self.cursor >= self.value.len() {
            return false;
        }
        self.value.remove(self.cursor);
        self.notify();
        true
    }

    pub fn cursor_left(&mut self) -> bool {
        match self.prev_boundary() {
            Some(prev) => {
                self.cursor = prev;
                true
            }
            None => false,
        }
    }

    pub fn cursor_right(&mut self) -> bool {
        let Some(c) = self.value[self.cursor..].chars().next() else {
            return false;
        };
        self.cursor += c.len_utf8();
        true
    }

    pub fn cursor_home(&mut self) -> bool {
        let moved = self.cursor != 0;
        self.cursor = 0;
        moved
    }

    pub fn cursor_end(&mut self) -> bool {
        let end = self.value.len();
        let moved = self.cursor != end;
        self.cursor = end;
        moved
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor].char_indices().last().map(|(i, _)| i)
    }

    fn notify(&mut self) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(&self.value);
        }
    }
}
