//! Event handling for the InputField component.

use tabula_dom::{Key, Modifiers};

use crate::components::events::{ComponentEvents, EventResult};

use super::state::InputField;

impl ComponentEvents for InputField {
    fn on_click(&mut self, target: &str) -> EventResult {
        let Some(action) = target
            .strip_prefix(self.id_str())
            .and_then(|rest| rest.strip_prefix(':'))
        else {
            return EventResult::Ignored;
        };
        if self.is_disabled() {
            return EventResult::Ignored;
        }

        match action {
            "clear" if self.shows_clear() => self.clear().into(),
            "toggle-password" => self.toggle_password().into(),
            "field" => {
                self.set_focused(true);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn on_key(&mut self, key: Key, modifiers: Modifiers) -> EventResult {
        if self.is_disabled() || modifiers.ctrl || modifiers.alt {
            return EventResult::Ignored;
        }

        match key {
            Key::Backspace => {
                self.delete_char_before();
                EventResult::Consumed
            }
            Key::Delete => {
                self.delete_char_at();
                EventResult::Consumed
            }
            Key::Left => {
                self.cursor_left();
                EventResult::Consumed
            }
            Key::Right => {
                self.cursor_right();
                EventResult::Consumed
            }
            Key::Home => {
                self.cursor_home();
                EventResult::Consumed
            }
            Key::End => {
                self.cursor_end();
                EventResult::Consumed
            }
            Key::Char(c) => {
                self.insert_char(c);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}
