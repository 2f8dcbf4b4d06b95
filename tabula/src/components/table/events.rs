//! Event handling for the DataTable component.

use tabula_dom::{Key, Modifiers};

use crate::components::events::{ComponentEvents, EventResult};
use crate::record::Record;

use super::state::DataTable;

/// Parsed form of a clicked element id below the table's prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    SelectAll,
    Clear,
    Sort(usize),
    RowCheckbox(usize),
    Row(usize),
}

impl Target {
    fn parse(prefix: &str, id: &str) -> Option<Self> {
        let rest = id.strip_prefix(prefix)?.strip_prefix(':')?;
        match rest {
            "select-all" => return Some(Target::SelectAll),
            "clear" => return Some(Target::Clear),
            _ => {}
        }

        let (kind, index) = rest.split_once(':')?;
        let index = index.parse().ok()?;
        match kind {
            "sort" => Some(Target::Sort(index)),
            "row" => Some(Target::RowCheckbox(index)),
            "cursor" => Some(Target::Row(index)),
            _ => None,
        }
    }
}

impl<R: Record> DataTable<R> {
    fn on_space(&mut self) -> EventResult {
        if !self.is_selectable() {
            return EventResult::Ignored;
        }
        match self.cursor() {
            Some(index) => self.toggle_row(index).into(),
            None => EventResult::Ignored,
        }
    }
}

impl<R: Record> ComponentEvents for DataTable<R> {
    fn on_click(&mut self, id: &str) -> EventResult {
        let Some(target) = Target::parse(self.id_str(), id) else {
            return EventResult::Ignored;
        };
        if self.is_loading() {
            return EventResult::Ignored;
        }
        log::trace!("{}: click {target:?}", self.id_str());

        match target {
            Target::Sort(index) => self.toggle_sort(index).into(),
            Target::Row(index) => self.set_cursor(index).into(),
            Target::SelectAll | Target::Clear | Target::RowCheckbox(_)
                if !self.is_selectable() =>
            {
                EventResult::Ignored
            }
            Target::RowCheckbox(index) => self.toggle_row(index).into(),
            Target::SelectAll => {
                self.toggle_select_all();
                EventResult::Consumed
            }
            Target::Clear => {
                self.clear_selection();
                EventResult::Consumed
            }
        }
    }

    fn on_key(&mut self, key: Key, modifiers: Modifiers) -> EventResult {
        if self.is_loading() || modifiers.ctrl || modifiers.alt {
            return EventResult::Ignored;
        }

        match key {
            Key::Up => self.move_cursor(-1).into(),
            Key::Down => self.move_cursor(1).into(),
            Key::PageUp => self.move_cursor(-page_delta(self.page_size())).into(),
            Key::PageDown => self.move_cursor(page_delta(self.page_size())).into(),
            Key::Home => self.cursor_first().into(),
            Key::End => self.cursor_last().into(),
            Key::Left => self.move_header_cursor(-1).into(),
            Key::Right => self.move_header_cursor(1).into(),
            Key::Char('s') | Key::Enter => self.toggle_sort(self.header_cursor()).into(),
            Key::Char(' ') => self.on_space(),
            Key::Char('a') if self.is_selectable() => {
                self.toggle_select_all();
                EventResult::Consumed
            }
            Key::Escape if self.is_selectable() && !self.selection().is_empty() => {
                self.clear_selection();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}

fn page_delta(rows: usize) -> isize {
    isize::try_from(rows).unwrap_or(isize::MAX)
}
