use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{align_offset, char_width, display_width, truncate_to_width};
use crate::types::{Rgb, TextStyle};

/// Paint state a child picks up from its ancestors.
#[derive(Debug, Clone, Copy, Default)]
struct Inherited {
    fg: Option<Rgb>,
    text_style: TextStyle,
}

/// Paint `element` and its descendants into `buf` using a precomputed layout.
///
/// Children are painted after their parent, so later siblings win on overlap.
/// Elements missing from `layout` are skipped together with their subtree.
pub fn render_to_buffer(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let mut painted = 0usize;
    render_element(element, layout, buf, Inherited::default(), &mut painted);
    log::trace!("rendered {painted} elements into {}x{}", buf.width(), buf.height());
}

fn render_element(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    inherited: Inherited,
    painted: &mut usize,
) {
    let Some(&rect) = layout.get(&element.id) else {
        return;
    };
    *painted += 1;

    let style = &element.style;
    let fg = style.foreground.map(|c| c.to_rgb()).or(inherited.fg);
    let text_style = style.text_style.merge(inherited.text_style);

    if let Some(bg) = style.background {
        fill_rect(buf, rect, bg.to_rgb());
    }

    if let Some(glyphs) = style.border.glyphs() {
        let color = style.border_color.map(|c| c.to_rgb()).or(fg);
        draw_border(buf, rect, glyphs, color);
    }

    let inner = rect.inset(element.insets());

    match &element.content {
        Content::Text(text) => draw_text(buf, inner, text, element, fg, text_style),
        Content::Children(children) => {
            let next = Inherited { fg, text_style };
            for child in children {
                render_element(child, layout, buf, next, painted);
            }
        }
        Content::None => {}
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                *cell = Cell::blank(bg);
            }
        }
    }
}

fn draw_border(buf: &mut Buffer, rect: Rect, glyphs: [char; 6], color: Option<Rgb>) {
    if rect.width < 2 || rect.height < 2 {
        return;
    }
    let [tl, tr, bl, br, h, v] = glyphs;
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    for x in rect.x..=right {
        let (top, low) = if x == rect.x {
            (tl, bl)
        } else if x == right {
            (tr, br)
        } else {
            (h, h)
        };
        put_char(buf, x, rect.y, top, color, TextStyle::new());
        put_char(buf, x, bottom, low, color, TextStyle::new());
    }
    for y in rect.y.saturating_add(1)..bottom {
        put_char(buf, rect.x, y, v, color, TextStyle::new());
        put_char(buf, right, y, v, color, TextStyle::new());
    }
}

fn draw_text(
    buf: &mut Buffer,
    area: Rect,
    text: &str,
    element: &Element,
    fg: Option<Rgb>,
    text_style: TextStyle,
) {
    if area.is_empty() {
        return;
    }

    for (row, line) in text.lines().take(area.height as usize).enumerate() {
        let line = truncate_to_width(line, area.width as usize);
        let offset = align_offset(display_width(&line), area.width as usize, element.text_align);
        let y = area.y.saturating_add(row as u16);
        let mut x = area.x.saturating_add(offset as u16);

        for ch in line.chars() {
            let width = char_width(ch) as u16;
            if width == 0 {
                continue;
            }
            if x.saturating_add(width) > area.right() {
                break;
            }
            put_char(buf, x, y, ch, fg, text_style);
            if width == 2 {
                if let Some(cell) = buf.get_mut(x.saturating_add(1), y) {
                    cell.wide_continuation = true;
                }
            }
            x = x.saturating_add(width);
        }
    }
}

/// Write one glyph, keeping the background already painted underneath.
fn put_char(buf: &mut Buffer, x: u16, y: u16, ch: char, fg: Option<Rgb>, style: TextStyle) {
    if let Some(cell) = buf.get_mut(x, y) {
        cell.paint(ch, fg, style);
    }
}
