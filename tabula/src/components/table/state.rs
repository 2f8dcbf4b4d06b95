//! DataTable state: configuration, sort, selection and cursors.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use crate::components::checkbox::CheckState;
use crate::components::selection::Selection;
use crate::record::Record;
use crate::value::Value;
use crate::widgets::Spinner;

use super::item::Column;
use super::sort::{SortKey, display_order};

/// Rows moved by PageUp/PageDown when no viewport height is set.
const DEFAULT_PAGE: usize = 10;

/// Callback invoked with the full selection whenever it changes.
pub type SelectionCallback<R> = Box<dyn FnMut(&[Arc<R>])>;

/// Row-count line shown under a non-empty table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterSummary {
    /// "Showing 1 row" / "Showing N rows"
    pub rows: String,
    /// "K selected", only for selectable tables
    pub selected: Option<String>,
}

/// A sortable, selectable table over caller-owned records.
///
/// Records are held as `Arc<R>` and selection compares them by pointer
/// identity. The displayed order is a cached permutation of the input that is
/// rebuilt whenever the records or the sort change; the input `Vec` itself is
/// never reordered.
///
/// With a viewport height set, only that many rows are rendered, starting at
/// the scroll offset; moving the row cursor scrolls it into view.
pub struct DataTable<R> {
    id: String,
    columns: Vec<Column>,
    records: Vec<Arc<R>>,
    /// Indices into `records`, in display order
    order: Vec<usize>,
    sort: Option<SortKey>,
    selection: Selection<R>,
    loading: bool,
    selectable: bool,
    focused: bool,
    /// Position in display order of the keyboard row cursor
    cursor: Option<usize>,
    /// Column index of the keyboard header cursor
    header_cursor: usize,
    /// First displayed row inside the viewport
    scroll_offset: usize,
    /// Body rows that fit on screen; `None` renders every row
    viewport_height: Option<usize>,
    spinner: Spinner,
    on_selection_change: Option<SelectionCallback<R>>,
}

impl<R> fmt::Debug for DataTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("id", &self.id)
            .field("columns", &self.columns)
            .field("records", &self.records.len())
            .field("sort", &self.sort)
            .field("selected", &self.selection.len())
            .field("loading", &self.loading)
            .field("selectable", &self.selectable)
            .field("scroll_offset", &self.scroll_offset)
            .field("viewport_height", &self.viewport_height)
            .finish()
    }
}

impl<R: Record> DataTable<R> {
    /// Create an empty table with the given columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            id: format!("table-{}", uuid::Uuid::new_v4().simple()),
            columns,
            records: Vec::new(),
            order: Vec::new(),
            sort: None,
            selection: Selection::new(),
            loading: false,
            selectable: false,
            focused: false,
            cursor: None,
            header_cursor: 0,
            scroll_offset: 0,
            viewport_height: None,
            spinner: Spinner::new(),
            on_selection_change: None,
        }
    }

    /// Create a table owning plain rows, wrapping each in an `Arc`.
    pub fn with_rows(columns: Vec<Column>, rows: impl IntoIterator<Item = R>) -> Self {
        Self::new(columns).with_records(rows.into_iter().map(Arc::new).collect())
    }

    // -------------------------------------------------------------------------
    // Builder
    // -------------------------------------------------------------------------

    /// Set the element id prefix used for hit testing.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_records(mut self, records: Vec<Arc<R>>) -> Self {
        self.set_records(records);
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn on_selection_change(mut self, callback: impl FnMut(&[Arc<R>]) + 'static) -> Self {
        self.on_selection_change = Some(Box::new(callback));
        self
    }

    /// Render at most `rows` body rows at a time.
    pub fn viewport_height(mut self, rows: usize) -> Self {
        self.set_viewport_height(Some(rows));
        self
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    /// Replace the input records and re-derive the displayed order.
    ///
    /// Selected records that are no longer part of the input (by identity)
    /// are dropped from the selection; the callback fires if any were.
    pub fn set_records(&mut self, records: Vec<Arc<R>>) {
        self.records = records;
        self.rebuild_order();

        let pruned = self.selection.retain_present(&self.records);
        if pruned > 0 {
            log::debug!("{}: pruned {pruned} stale selected rows", self.id);
            self.notify_selection();
        }
    }

    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
        self.header_cursor = self.header_cursor.min(self.columns.len().saturating_sub(1));
    }

    pub fn set_loading(&mut self, loading: bool) {
        if self.loading != loading {
            log::debug!("{}: loading={loading}", self.id);
        }
        self.loading = loading;
    }

    pub fn set_selectable(&mut self, selectable: bool) {
        self.selectable = selectable;
    }

    /// Mark whether the table has keyboard focus; cursors are only drawn
    /// while focused.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if focused && self.cursor.is_none() && !self.order.is_empty() {
            self.cursor = Some(self.scroll_offset);
        }
    }

    /// Limit the rendered body to `rows` rows (at least one), or lift the
    /// limit with `None`. The cursor stays in view.
    pub fn set_viewport_height(&mut self, rows: Option<usize>) {
        self.viewport_height = rows.map(|r| r.max(1));
        self.scroll_to_cursor();
    }

    pub fn set_on_selection_change(&mut self, callback: impl FnMut(&[Arc<R>]) + 'static) {
        self.on_selection_change = Some(Box::new(callback));
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn id_str(&self) -> &str {
        &self.id
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Input records in the caller's order.
    pub fn records(&self) -> &[Arc<R>] {
        &self.records
    }

    pub fn sort(&self) -> Option<&SortKey> {
        self.sort.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn header_cursor(&self) -> usize {
        self.header_cursor
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn viewport(&self) -> Option<usize> {
        self.viewport_height
    }

    /// Displayed-row indices that are rendered.
    pub fn visible_rows(&self) -> Range<usize> {
        let len = self.displayed_len();
        let start = self.scroll_offset.min(len);
        let end = match self.viewport_height {
            Some(rows) => start.saturating_add(rows).min(len),
            None => len,
        };
        start..end
    }

    /// Rows moved by one page of cursor movement.
    pub fn page_size(&self) -> usize {
        self.viewport_height.unwrap_or(DEFAULT_PAGE)
    }

    pub fn spinner(&self) -> &Spinner {
        &self.spinner
    }

    /// Records in display (sorted) order.
    pub fn displayed(&self) -> impl Iterator<Item = &Arc<R>> + '_ {
        self.order.iter().map(|&i| &self.records[i])
    }

    pub fn displayed_records(&self) -> Vec<Arc<R>> {
        self.displayed().cloned().collect()
    }

    pub fn displayed_len(&self) -> usize {
        self.order.len()
    }

    /// Record at position `index` of the displayed order.
    pub fn row(&self, index: usize) -> Option<&Arc<R>> {
        self.order.get(index).map(|&i| &self.records[i])
    }

    /// Field value for a displayed row and column.
    pub fn cell(&self, row: usize, column: usize) -> Option<Value> {
        let record = self.row(row)?;
        let column = self.columns.get(column)?;
        Some(record.field(&column.field))
    }

    /// Display string of a cell.
    pub fn cell_text(&self, row: usize, column: usize) -> Option<String> {
        self.cell(row, column).map(|v| v.to_string())
    }

    /// Current selection, in the order rows were selected.
    pub fn selection(&self) -> &[Arc<R>] {
        self.selection.as_slice()
    }

    pub fn is_selected(&self, record: &Arc<R>) -> bool {
        self.selection.contains(record)
    }

    pub fn is_selected_at(&self, index: usize) -> bool {
        self.row(index).is_some_and(|r| self.selection.contains(r))
    }

    /// Number of displayed rows that are selected.
    pub fn selected_displayed_count(&self) -> usize {
        self.selection.count_in(self.displayed())
    }

    /// State of the select-all header control.
    pub fn select_all_state(&self) -> CheckState {
        CheckState::from_counts(self.selected_displayed_count(), self.displayed_len())
    }

    /// "N of M rows selected", when a selectable table has a selection.
    pub fn selection_summary(&self) -> Option<String> {
        if !self.selectable || self.selection.is_empty() {
            return None;
        }
        Some(format!(
            "{} of {} rows selected",
            self.selection.len(),
            self.displayed_len()
        ))
    }

    /// Footer text, absent while loading or when nothing is displayed.
    pub fn footer_summary(&self) -> Option<FooterSummary> {
        let count = self.displayed_len();
        if self.loading || count == 0 {
            return None;
        }
        let noun = if count == 1 { "row" } else { "rows" };
        Some(FooterSummary {
            rows: format!("Showing {count} {noun}"),
            selected: self
                .selectable
                .then(|| format!("{} selected", self.selection.len())),
        })
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Activate the header of column `index`.
    ///
    /// Returns false for non-sortable or unknown columns, which leave the
    /// sort untouched.
    pub fn toggle_sort(&mut self, index: usize) -> bool {
        let Some(column) = self.columns.get(index) else {
            return false;
        };
        if !column.sortable {
            return false;
        }

        let next = SortKey::toggled(self.sort.as_ref(), &column.field);
        log::debug!(
            "{}: sort by {} {:?}",
            self.id,
            next.field,
            next.direction
        );
        self.sort = Some(next);
        self.header_cursor = index;
        self.rebuild_order();
        true
    }

    /// Toggle selection of the displayed row at `index`.
    pub fn toggle_row(&mut self, index: usize) -> bool {
        let Some(record) = self.row(index).cloned() else {
            return false;
        };
        self.cursor = Some(index);
        self.scroll_to_cursor();
        self.toggle_record(&record)
    }

    /// Toggle selection of `record` by identity.
    ///
    /// Records that are not part of the current input are ignored, so the
    /// selection never holds anything the table does not display.
    pub fn toggle_record(&mut self, record: &Arc<R>) -> bool {
        if !self.records.iter().any(|r| Arc::ptr_eq(r, record)) {
            return false;
        }
        let now_selected = self.selection.toggle(record);
        log::debug!(
            "{}: row {} ({} selected)",
            self.id,
            if now_selected { "selected" } else { "deselected" },
            self.selection.len()
        );
        self.notify_selection();
        true
    }

    /// Select every displayed row, or clear the selection if every displayed
    /// row is already selected.
    pub fn toggle_select_all(&mut self) {
        if self.select_all_state().is_checked() {
            self.selection.clear();
            log::debug!("{}: select-all cleared selection", self.id);
        } else {
            let displayed = self.displayed_records();
            self.selection.replace(displayed);
            log::debug!("{}: selected all {} rows", self.id, self.selection.len());
        }
        self.notify_selection();
    }

    /// Empty the selection and notify the callback with an empty slice.
    pub fn clear_selection(&mut self) {
        let removed = self.selection.clear();
        log::debug!("{}: cleared {removed} selected rows", self.id);
        self.notify_selection();
    }

    /// Move the row cursor by `delta`, clamped to the displayed rows.
    pub fn move_cursor(&mut self, delta: isize) -> bool {
        let len = self.displayed_len();
        if len == 0 {
            return false;
        }
        let current = self.cursor.unwrap_or(0) as isize;
        let next = current.saturating_add(delta).clamp(0, len as isize - 1) as usize;
        self.cursor = Some(next);
        self.scroll_to_cursor();
        true
    }

    pub fn cursor_first(&mut self) -> bool {
        self.set_cursor(0)
    }

    pub fn cursor_last(&mut self) -> bool {
        self.set_cursor(self.displayed_len().saturating_sub(1))
    }

    pub fn set_cursor(&mut self, index: usize) -> bool {
        if index >= self.displayed_len() {
            return false;
        }
        self.cursor = Some(index);
        self.scroll_to_cursor();
        true
    }

    /// Scroll the viewport by `delta` rows without moving the cursor.
    ///
    /// Returns false when there is nothing to scroll.
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        let before = self.scroll_offset;
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
        self.clamp_scroll();
        self.scroll_offset != before
    }

    /// Move the header cursor by `delta`, clamped to the columns.
    pub fn move_header_cursor(&mut self, delta: isize) -> bool {
        if self.columns.is_empty() {
            return false;
        }
        let last = self.columns.len() as isize - 1;
        self.header_cursor = (self.header_cursor as isize + delta).clamp(0, last) as usize;
        true
    }

    /// Advance the loading spinner by one frame.
    pub fn tick(&mut self) {
        if self.loading {
            self.spinner.tick();
        }
    }

    fn rebuild_order(&mut self) {
        self.order = display_order(&self.records, self.sort.as_ref());
        self.cursor = match self.cursor {
            _ if self.order.is_empty() => None,
            Some(c) => Some(c.min(self.order.len() - 1)),
            None => None,
        };
        self.scroll_to_cursor();
    }

    /// Shift the viewport the least amount that puts the cursor inside it.
    fn scroll_to_cursor(&mut self) {
        if let (Some(cursor), Some(rows)) = (self.cursor, self.viewport_height) {
            if cursor < self.scroll_offset {
                self.scroll_offset = cursor;
            } else if cursor >= self.scroll_offset.saturating_add(rows) {
                self.scroll_offset = (cursor + 1).saturating_sub(rows);
            }
        }
        self.clamp_scroll();
    }

    fn clamp_scroll(&mut self) {
        let max = match self.viewport_height {
            Some(rows) => self.displayed_len().saturating_sub(rows),
            None => 0,
        };
        self.scroll_offset = self.scroll_offset.min(max);
    }

    fn notify_selection(&mut self) {
        if let Some(callback) = self.on_selection_change.as_mut() {
            callback(self.selection.as_slice());
        }
    }
}
