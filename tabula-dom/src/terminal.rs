use std::io::{self, Write};
use std::panic;
use std::sync::Once;

use crossterm::{
    cursor, event, execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::{Buffer, Cell};
use crate::element::Element;
use crate::layout::{layout, LayoutResult, Rect};
use crate::render::render_to_buffer;
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

static PANIC_HOOK: Once = Once::new();

/// Raw-mode alternate-screen terminal with double-buffered diff output.
///
/// The terminal is restored when the value is dropped, and by a panic hook
/// installed on first use so a crash never leaves the shell in raw mode.
pub struct Terminal {
    out: io::Stdout,
    /// Frame being painted.
    frame: Buffer,
    /// What the screen currently shows.
    shown: Buffer,
    last_layout: LayoutResult,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut out = io::stdout();

        terminal::enable_raw_mode()?;
        let (width, height) = or_rollback(
            || {
                execute!(
                    out,
                    terminal::EnterAlternateScreen,
                    cursor::Hide,
                    event::EnableMouseCapture
                )?;
                terminal::size()
            },
            || {
                let _ = restore();
            },
        )?;
        install_panic_hook();
        log::debug!("terminal opened at {width}x{height}");

        Ok(Self {
            out,
            frame: Buffer::new(width, height),
            shown: unknown_screen(width, height),
            last_layout: LayoutResult::new(),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.frame.width(), self.frame.height())
    }

    /// Lay out, paint and flush `root`, returning the layout used so callers
    /// can hit-test the next click against what is on screen.
    pub fn render(&mut self, root: &Element) -> io::Result<&LayoutResult> {
        let (width, height) = terminal::size()?;
        if (width, height) != self.size() {
            log::debug!("terminal resized to {width}x{height}");
            self.frame = Buffer::new(width, height);
            self.shown = unknown_screen(width, height);
        }

        self.frame.clear();
        self.last_layout = layout(root, Rect::from_size(width, height));
        render_to_buffer(root, &self.last_layout, &mut self.frame);

        let mut pen = Pen::reset(&mut self.out)?;
        for (x, y, cell) in self.frame.diff(&self.shown) {
            if !cell.wide_continuation {
                pen.draw(&mut self.out, x, y, cell)?;
            }
        }
        queue!(self.out, SetAttribute(Attribute::Reset))?;
        self.out.flush()?;

        std::mem::swap(&mut self.frame, &mut self.shown);
        Ok(&self.last_layout)
    }

    /// Layout from the last render.
    pub fn layout(&self) -> &LayoutResult {
        &self.last_layout
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = restore();
    }
}

/// Leave the alternate screen and raw mode. Harmless when already restored.
pub fn restore() -> io::Result<()> {
    let screen = execute!(
        io::stdout(),
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    );
    let raw = terminal::disable_raw_mode();
    screen.and(raw)
}

fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        chain_panic_hook(|| {
            let _ = restore();
        })
    });
}

/// Run `cleanup` before whatever panic hook was installed previously.
fn chain_panic_hook(cleanup: impl Fn() + Send + Sync + 'static) {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        cleanup();
        previous(info);
    }));
}

fn or_rollback<T>(setup: impl FnOnce() -> io::Result<T>, rollback: impl FnOnce()) -> io::Result<T> {
    setup().inspect_err(|_| rollback())
}

/// A buffer that matches no real cell, forcing a full repaint on next flush.
fn unknown_screen(width: u16, height: u16) -> Buffer {
    Buffer::filled(
        width,
        height,
        Cell {
            glyph: '\u{0}',
            ..Cell::default()
        },
    )
}

/// Terminal drawing state, tracked so unchanged attributes and cursor moves
/// are not re-sent.
struct Pen {
    fg: Rgb,
    bg: Rgb,
    attrs: TextStyle,
    /// Where the terminal cursor sits after the last glyph.
    next: Option<(u16, u16)>,
}

impl Pen {
    fn reset(out: &mut impl Write) -> io::Result<Self> {
        let blank = Cell::default();
        queue!(
            out,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(to_ct(blank.fg)),
            SetBackgroundColor(to_ct(blank.bg))
        )?;
        Ok(Self {
            fg: blank.fg,
            bg: blank.bg,
            attrs: blank.attrs,
            next: None,
        })
    }

    fn draw(&mut self, out: &mut impl Write, x: u16, y: u16, cell: &Cell) -> io::Result<()> {
        if self.next != Some((x, y)) {
            queue!(out, cursor::MoveTo(x, y))?;
        }

        if cell.attrs != self.attrs {
            // Attributes are not individually reversible.
            let next = self.next;
            *self = Self::reset(out)?;
            self.next = next;
            apply_attrs(out, cell.attrs)?;
            self.attrs = cell.attrs;
        }
        if cell.fg != self.fg {
            queue!(out, SetForegroundColor(to_ct(cell.fg)))?;
            self.fg = cell.fg;
        }
        if cell.bg != self.bg {
            queue!(out, SetBackgroundColor(to_ct(cell.bg)))?;
            self.bg = cell.bg;
        }

        write!(out, "{}", cell.glyph)?;
        let advance = char_width(cell.glyph).max(1) as u16;
        self.next = Some((x.saturating_add(advance), y));
        Ok(())
    }
}

fn apply_attrs(out: &mut impl Write, attrs: TextStyle) -> io::Result<()> {
    let flags = [
        (attrs.bold, Attribute::Bold),
        (attrs.dim, Attribute::Dim),
        (attrs.italic, Attribute::Italic),
        (attrs.underline, Attribute::Underlined),
        (attrs.reversed, Attribute::Reverse),
    ];
    for (_, attr) in flags.into_iter().filter(|(on, _)| *on) {
        queue!(out, SetAttribute(attr))?;
    }
    Ok(())
}

fn to_ct(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell as Flag;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn failed_setup_runs_rollback() {
        let rolled_back = Flag::new(false);
        let result: io::Result<()> = or_rollback(
            || Err(io::Error::other("no tty")),
            || rolled_back.set(true),
        );
        assert!(result.is_err());
        assert!(rolled_back.get());

        let rolled_back = Flag::new(false);
        let result = or_rollback(|| Ok(7), || rolled_back.set(true));
        assert_eq!(result.unwrap(), 7);
        assert!(!rolled_back.get());
    }

    #[test]
    fn panic_hook_runs_cleanup_first() {
        let cleaned = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cleaned);
        chain_panic_hook(move || flag.store(true, Ordering::SeqCst));

        let result = panic::catch_unwind(|| panic!("boom"));

        assert!(result.is_err());
        assert!(cleaned.load(Ordering::SeqCst));
    }

    #[test]
    fn pen_skips_cursor_moves_for_adjacent_cells() {
        let mut out = Vec::new();
        let mut pen = Pen::reset(&mut out).unwrap();
        let cell = |glyph| Cell {
            glyph,
            ..Cell::default()
        };

        pen.draw(&mut out, 0, 0, &cell('a')).unwrap();
        pen.draw(&mut out, 1, 0, &cell('b')).unwrap();
        pen.draw(&mut out, 5, 0, &cell('c')).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("\u{1b}[1;1H").count(), 1);
        assert_eq!(text.matches("\u{1b}[1;6H").count(), 1);
        assert_eq!(text.matches('H').count(), 2);
        assert!(text.ends_with('c'));
    }
}
