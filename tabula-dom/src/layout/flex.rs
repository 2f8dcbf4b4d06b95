use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Align, Direction, Justify, Size};

pub type LayoutResult = HashMap<String, Rect>;

pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    let width = resolve_size(element.width, available.width, element, true);
    let height = resolve_size(element.height, available.height, element, false);
    let rect = Rect::new(available.x, available.y, width, height);
    result.insert(element.id.clone(), rect);
    layout_children(element, rect, &mut result);
    result
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    if children.is_empty() {
        return;
    }

    let inner = rect.inset(element.insets());

    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_size = if is_row { inner.height } else { inner.width };

    // First pass: fixed and content sizes, count fill items
    let gap_total = total_gap(element.gap, children.len());
    let mut fixed_total = 0u16;
    let mut fill_count = 0u16;

    for child in children {
        match main_axis(child, is_row) {
            Size::Fill => fill_count = fill_count.saturating_add(1),
            _ => fixed_total = fixed_total.saturating_add(outer_size(child, is_row)),
        }
    }

    let remaining = main_size.saturating_sub(fixed_total.saturating_add(gap_total));
    let fill_size = if fill_count > 0 {
        remaining / fill_count
    } else {
        0
    };

    let sizes: Vec<u16> = children
        .iter()
        .map(|child| match main_axis(child, is_row) {
            Size::Fill => fill_size,
            _ => outer_size(child, is_row),
        })
        .collect();

    let used = sizes.iter().fold(gap_total, |acc, s| acc.saturating_add(*s));
    let extra = main_size.saturating_sub(used);

    let (start_offset, between) = match element.justify {
        Justify::Start => (0, element.gap),
        Justify::End => (extra, element.gap),
        Justify::Center => (extra / 2, element.gap),
        Justify::SpaceBetween if children.len() > 1 => {
            (0, (extra / clamp_count(children.len() - 1)).saturating_add(element.gap))
        }
        Justify::SpaceBetween => (0, element.gap),
    };

    let mut offset = start_offset;

    for (child, main) in children.iter().zip(sizes) {
        let cross = match cross_axis(child, is_row) {
            Size::Fixed(n) => n,
            Size::Fill => cross_size,
            Size::Auto if element.align == Align::Stretch => cross_size,
            Size::Auto => estimate_size(child, !is_row),
        }
        .min(cross_size);

        let clamped_main = main.min(main_size.saturating_sub(offset));

        let cross_offset = match element.align {
            Align::Start | Align::Stretch => 0,
            Align::Center => cross_size.saturating_sub(cross) / 2,
            Align::End => cross_size.saturating_sub(cross),
        };

        let child_rect = if is_row {
            Rect::new(
                inner.x.saturating_add(offset),
                inner.y.saturating_add(cross_offset),
                clamped_main,
                cross,
            )
        } else {
            Rect::new(
                inner.x.saturating_add(cross_offset),
                inner.y.saturating_add(offset),
                cross,
                clamped_main,
            )
        };

        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);

        offset = offset.saturating_add(main).saturating_add(between);
    }
}

fn main_axis(element: &Element, is_row: bool) -> Size {
    if is_row {
        element.width
    } else {
        element.height
    }
}

fn cross_axis(element: &Element, is_row: bool) -> Size {
    if is_row {
        element.height
    } else {
        element.width
    }
}

fn resolve_size(size: Size, available: u16, element: &Element, is_width: bool) -> u16 {
    match size {
        Size::Fixed(n) => n,
        Size::Fill => available,
        Size::Auto => estimate_size(element, is_width),
    }
    .min(available)
}

/// Size an element asks for along one axis, honouring a fixed size.
fn outer_size(element: &Element, is_width: bool) -> u16 {
    let size = if is_width {
        element.width
    } else {
        element.height
    };
    match size {
        Size::Fixed(n) => n,
        _ => estimate_size(element, is_width),
    }
}

/// Intrinsic content size along one axis, including padding and border.
fn estimate_size(element: &Element, is_width: bool) -> u16 {
    let insets = element.insets();
    let chrome = if is_width {
        insets.horizontal_total()
    } else {
        insets.vertical_total()
    };

    let content_size = match &element.content {
        Content::Text(text) => {
            if is_width {
                clamp_count(text.lines().map(display_width).max().unwrap_or(0))
            } else {
                clamp_count(text.lines().count().max(1))
            }
        }
        Content::Children(children) if children.is_empty() => 0,
        Content::Children(children) => {
            let along_main = (element.direction == Direction::Row) == is_width;
            if along_main {
                children
                    .iter()
                    .map(|c| outer_size(c, is_width))
                    .fold(total_gap(element.gap, children.len()), u16::saturating_add)
            } else {
                children
                    .iter()
                    .map(|c| outer_size(c, is_width))
                    .max()
                    .unwrap_or(0)
            }
        }
        Content::None => 0,
    };

    content_size.saturating_add(chrome)
}

/// Cell counts past the coordinate space pin to its edge.
fn clamp_count(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn total_gap(gap: u16, children: usize) -> u16 {
    gap.saturating_mul(clamp_count(children.saturating_sub(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_respects_fixed_children() {
        let row = Element::row()
            .gap(1)
            .child(Element::text("ab").width(Size::Fixed(5)))
            .child(Element::text("cdef"));
        assert_eq!(estimate_size(&row, true), 5 + 1 + 4);
        assert_eq!(estimate_size(&row, false), 1);
    }

    #[test]
    fn multiline_text_height_counts_lines() {
        let el = Element::text("one\ntwo\nthree");
        assert_eq!(estimate_size(&el, false), 3);
        assert_eq!(estimate_size(&el, true), 5);
    }

    #[test]
    fn estimates_saturate_instead_of_wrapping() {
        let tall = Element::col()
            .gap(2)
            .padding(crate::types::Edges::all(3))
            .children((0..40_000).map(|i| Element::text(i.to_string())));
        assert_eq!(estimate_size(&tall, false), u16::MAX);

        let wide = Element::text("x".repeat(70_000));
        assert_eq!(estimate_size(&wide, true), u16::MAX);
    }
}
