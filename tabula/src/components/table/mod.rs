//! DataTable component - a sortable, selectable view over caller records.
//!
//! The table provides:
//! - Column headers that toggle ascending/descending sort on click
//! - Optional multi-row selection tracked by record identity
//! - A select-all header control with an indeterminate state
//! - Loading, empty, selection summary and footer states
//!
//! The caller's records are never reordered; the displayed order is derived
//! from the input order and the current sort every time either changes.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! use tabula::prelude::*;
//!
//! fn user(id: u32, name: &str) -> Arc<HashMap<String, Value>> {
//!     Arc::new(HashMap::from([
//!         ("id".to_string(), Value::from(id)),
//!         ("name".to_string(), Value::from(name)),
//!     ]))
//! }
//!
//! let mut table = DataTable::new(vec![
//!     Column::new("id", "ID", "id").sortable(),
//!     Column::new("name", "Name", "name").sortable(),
//! ])
//! .with_records(vec![user(1, "Bob"), user(2, "Alice")])
//! .selectable(true);
//!
//! table.toggle_sort(1);
//! let names: Vec<String> = table
//!     .displayed()
//!     .map(|r| r.field("name").to_string())
//!     .collect();
//! assert_eq!(names, ["Alice", "Bob"]);
//! ```

mod events;
mod item;
mod render;
mod sort;
mod state;

pub use item::{Alignment, Column};
pub use sort::{SortDirection, SortKey};
pub use state::{DataTable, FooterSummary, SelectionCallback};
