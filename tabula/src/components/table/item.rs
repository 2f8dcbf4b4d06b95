//! Column descriptors.

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Column configuration.
///
/// A column maps one record field to a displayed, optionally sortable column.
/// Columns are shown in the order they are given to the table.
///
/// # Examples
///
/// ```
/// use tabula::components::table::{Alignment, Column};
///
/// let columns = vec![
///     Column::new("1", "ID", "id").sortable().align(Alignment::Right),
///     Column::new("2", "Name", "name").sortable(),
///     Column::new("3", "Email", "email").width(30),
/// ];
/// assert!(columns[0].sortable);
/// assert!(!columns[2].sortable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Unique identifier among the table's columns
    pub key: String,
    /// Header label
    pub title: String,
    /// Record field this column reads
    pub field: String,
    /// Whether clicking the header sorts by this column
    pub sortable: bool,
    /// Fixed width in terminal cells; sized to content when `None`
    pub width: Option<u16>,
    /// Horizontal alignment of header and cells
    pub align: Alignment,
}

impl Column {
    pub fn new(key: impl Into<String>, title: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            field: field.into(),
            sortable: false,
            width: None,
            align: Alignment::Left,
        }
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Fix the column width in terminal cells.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }
}
