//! Component event handling types and traits.
//!
//! The host turns raw input into either a key press for the focused component
//! or a hit-tested element id, and hands it to the component through
//! [`ComponentEvents`]. Components mutate their own state and report whether
//! they used the event.

use tabula_dom::{Key, Modifiers};

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

impl From<bool> for EventResult {
    fn from(handled: bool) -> Self {
        if handled {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}

/// Trait for components that react to input.
///
/// All methods default to `Ignored`, so components only implement the events
/// they care about.
pub trait ComponentEvents {
    /// Handle a click on the element with id `target`.
    ///
    /// Components own an id prefix and ignore targets outside it.
    fn on_click(&mut self, _target: &str) -> EventResult {
        EventResult::Ignored
    }

    /// Handle a key press while this component has focus.
    fn on_key(&mut self, _key: Key, _modifiers: Modifiers) -> EventResult {
        EventResult::Ignored
    }
}
