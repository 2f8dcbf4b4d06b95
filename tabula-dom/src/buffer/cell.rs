use crate::types::{Rgb, TextStyle};

const DEFAULT_FG: Rgb = Rgb::new(255, 255, 255);
const DEFAULT_BG: Rgb = Rgb::new(0, 0, 0);

/// One screen cell as it will be flushed to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub attrs: TextStyle,
    /// Right half of a double-width glyph painted in the cell to the left.
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(DEFAULT_BG)
    }
}

impl Cell {
    /// An empty cell over `bg`.
    pub const fn blank(bg: Rgb) -> Self {
        Self {
            glyph: ' ',
            fg: DEFAULT_FG,
            bg,
            attrs: TextStyle::new(),
            wide_continuation: false,
        }
    }

    /// Overwrite the glyph, keeping the background. `None` keeps the current
    /// foreground too.
    pub fn paint(&mut self, glyph: char, fg: Option<Rgb>, attrs: TextStyle) {
        self.glyph = glyph;
        self.attrs = attrs;
        self.wide_continuation = false;
        if let Some(fg) = fg {
            self.fg = fg;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_keeps_background_and_unset_foreground() {
        let bg = Rgb::new(1, 2, 3);
        let mut cell = Cell::blank(bg);
        cell.wide_continuation = true;

        cell.paint('x', None, TextStyle::new());

        assert_eq!(cell.glyph, 'x');
        assert_eq!(cell.bg, bg);
        assert_eq!(cell.fg, DEFAULT_FG);
        assert!(!cell.wide_continuation);
    }
}
