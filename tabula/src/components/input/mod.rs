//! InputField component - a single-line text field with label, helper and
//! error text, a clear action and optional password masking.

mod events;
mod render;
mod state;

pub use state::{ChangeCallback, InputField, InputKind, InputSize, InputVariant};
