//! Element tree construction for the DataTable component.

use tabula_dom::text::display_width;
use tabula_dom::{Align, Element, Justify, Size, Style, TextAlign};

use crate::components::checkbox::{CheckState, render_checkbox};
use crate::record::Record;
use crate::theme::Theme;

use super::item::{Alignment, Column};
use super::state::DataTable;

/// Spacing between columns, in cells.
const COLUMN_GAP: u16 = 2;

const ARROW_UP: &str = "↑";
const ARROW_DOWN: &str = "↓";

impl From<Alignment> for TextAlign {
    fn from(align: Alignment) -> Self {
        match align {
            Alignment::Left => TextAlign::Left,
            Alignment::Center => TextAlign::Center,
            Alignment::Right => TextAlign::Right,
        }
    }
}

impl<R: Record> DataTable<R> {
    /// Width of every column in display order.
    ///
    /// A fixed width wins; otherwise the column is as wide as its header
    /// (plus the sort arrow) or its widest displayed cell. Every displayed
    /// row counts, not just the visible ones, so widths hold while scrolling.
    pub fn column_widths(&self) -> Vec<u16> {
        self.columns()
            .iter()
            .map(|column| {
                column
                    .width
                    .unwrap_or_else(|| self.content_width(column))
            })
            .collect()
    }

    fn content_width(&self, column: &Column) -> u16 {
        let header = display_width(&column.title) + if column.sortable { 2 } else { 0 };
        let cells = self
            .displayed()
            .map(|record| display_width(&record.field(&column.field).to_string()))
            .max()
            .unwrap_or(0);
        header.max(cells).min(u16::MAX as usize) as u16
    }

    /// Total width of the grid, including the selection column.
    fn grid_width(&self, widths: &[u16]) -> u16 {
        let mut cells: Vec<u16> = widths.to_vec();
        if self.is_selectable() {
            cells.insert(0, 1);
        }
        let gaps = COLUMN_GAP.saturating_mul(cells.len().saturating_sub(1).min(u16::MAX as usize) as u16);
        cells.iter().fold(gaps, |acc, w| acc.saturating_add(*w))
    }

    /// Build the element tree for the current state.
    pub fn render(&self, theme: &Theme) -> Element {
        let root = Element::col().id(self.id_str());

        if self.is_loading() {
            return root.child(self.render_loading(theme));
        }

        let widths = self.column_widths();
        let mut root = root;

        if let Some(summary) = self.selection_summary() {
            root = root.child(self.render_summary(summary, theme));
        }

        root = root.child(self.render_header(&widths, theme));

        if self.displayed_len() == 0 {
            root = root.child(self.render_empty(&widths, theme));
        } else {
            root = root.children(self.visible_rows().map(|i| self.render_row(i, &widths, theme)));
        }

        if let Some(footer) = self.footer_summary() {
            let mut bar = Element::row()
                .id(format!("{}:footer", self.id_str()))
                .gap(COLUMN_GAP)
                .style(Style::new().foreground(theme.muted))
                .child(Element::text(footer.rows));
            if let Some(selected) = footer.selected {
                bar = bar.child(Element::text(selected));
            }
            root = root.child(bar);
        }

        root
    }

    fn render_loading(&self, theme: &Theme) -> Element {
        Element::row()
            .id(format!("{}:loading", self.id_str()))
            .gap(1)
            .child(self.spinner().build(theme))
            .child(Element::text("Loading data...").style(Style::new().foreground(theme.secondary)))
    }

    fn render_summary(&self, summary: String, theme: &Theme) -> Element {
        Element::row()
            .id(format!("{}:summary", self.id_str()))
            .gap(COLUMN_GAP)
            .child(Element::text(summary).style(Style::new().foreground(theme.primary)))
            .child(
                Element::text("Clear selection")
                    .id(format!("{}:clear", self.id_str()))
                    .style(Style::new().foreground(theme.accent).underline())
                    .clickable(true),
            )
    }

    fn render_header(&self, widths: &[u16], theme: &Theme) -> Element {
        let mut header = Element::row()
            .id(format!("{}:header", self.id_str()))
            .gap(COLUMN_GAP)
            .style(Style::new().foreground(theme.secondary).bold());

        if self.is_selectable() {
            header = header.child(render_checkbox(
                format!("{}:select-all", self.id_str()),
                self.select_all_state(),
                theme,
            ));
        }

        for (index, (column, &width)) in self.columns().iter().zip(widths).enumerate() {
            header = header.child(self.render_header_cell(index, column, width, theme));
        }

        header
    }

    fn render_header_cell(&self, index: usize, column: &Column, width: u16, theme: &Theme) -> Element {
        let mut style = Style::new();
        if self.is_focused() && self.header_cursor() == index {
            style = style.underline();
        }

        if !column.sortable {
            return Element::text(column.title.clone())
                .width(Size::Fixed(width))
                .text_align(column.align.into())
                .style(style);
        }

        let (arrow, arrow_style) = match self.sort() {
            Some(sort) if sort.field == column.field => {
                let arrow = if sort.direction.is_ascending() {
                    ARROW_UP
                } else {
                    ARROW_DOWN
                };
                (arrow, Style::new().foreground(theme.accent))
            }
            _ => (ARROW_UP, Style::new().foreground(theme.muted).dim()),
        };

        let justify = match column.align {
            Alignment::Left => Justify::Start,
            Alignment::Center => Justify::Center,
            Alignment::Right => Justify::End,
        };

        Element::row()
            .id(format!("{}:sort:{index}", self.id_str()))
            .width(Size::Fixed(width))
            .gap(1)
            .justify(justify)
            .style(style)
            .clickable(true)
            .child(Element::text(column.title.clone()))
            .child(Element::text(arrow).style(arrow_style))
    }

    fn render_empty(&self, widths: &[u16], theme: &Theme) -> Element {
        const TITLE: &str = "No data available";
        const DETAIL: &str = "There are no records to display at this time.";

        let width = self.grid_width(widths).max(display_width(DETAIL) as u16);
        Element::col()
            .id(format!("{}:empty", self.id_str()))
            .width(Size::Fixed(width))
            .align(Align::Center)
            .child(Element::text(TITLE).style(Style::new().foreground(theme.primary).bold()))
            .child(Element::text(DETAIL).style(Style::new().foreground(theme.muted)))
    }

    fn render_row(&self, index: usize, widths: &[u16], theme: &Theme) -> Element {
        let selected = self.is_selected_at(index);
        let under_cursor = self.is_focused() && self.cursor() == Some(index);

        let mut style = Style::new().foreground(theme.primary);
        if under_cursor {
            style = style.background(theme.row_cursor);
        } else if selected {
            style = style.background(theme.row_selected);
        }

        let mut row = Element::row()
            .id(format!("{}:cursor:{index}", self.id_str()))
            .gap(COLUMN_GAP)
            .style(style)
            .clickable(true);

        if self.is_selectable() {
            row = row.child(render_checkbox(
                format!("{}:row:{index}", self.id_str()),
                CheckState::from(selected),
                theme,
            ));
        }

        for (column_index, (column, &width)) in self.columns().iter().zip(widths).enumerate() {
            let text = self.cell_text(index, column_index).unwrap_or_default();
            row = row.child(
                Element::text(text)
                    .width(Size::Fixed(width))
                    .text_align(column.align.into()),
            );
        }

        row
    }
}
