//! Stateless helper widgets.

mod spinner;

pub use spinner::Spinner;
