use crate::types::Edges;

/// Screen area in cells. Edges saturate at the terminal coordinate limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Area anchored at the origin.
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// First column past the area.
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// First row past the area.
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Area left after taking `edges` off each side.
    pub const fn inset(self, edges: Edges) -> Self {
        Self {
            x: self.x.saturating_add(edges.left),
            y: self.y.saturating_add(edges.top),
            width: self.width.saturating_sub(edges.horizontal_total()),
            height: self.height.saturating_sub(edges.vertical_total()),
        }
    }

    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}
