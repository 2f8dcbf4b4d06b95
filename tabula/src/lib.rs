//! Terminal widgets: a generic sortable, selectable data table and a styled
//! text input, rendered into `tabula-dom` element trees.

pub mod components;
pub mod record;
pub mod theme;
pub mod value;
pub mod widgets;

pub mod prelude {
    pub use crate::components::checkbox::CheckState;
    pub use crate::components::events::{ComponentEvents, EventResult};
    pub use crate::components::input::{InputField, InputKind, InputSize, InputVariant};
    pub use crate::components::selection::Selection;
    pub use crate::components::table::{
        Alignment, Column, DataTable, FooterSummary, SortDirection, SortKey,
    };
    pub use crate::record::Record;
    pub use crate::theme::Theme;
    pub use crate::value::Value;
    pub use crate::widgets::Spinner;
}
