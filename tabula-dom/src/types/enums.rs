#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Fixed(u16),
    Fill,
    #[default]
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
    Stretch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Border {
    #[default]
    None,
    Single,
    Rounded,
}

impl Border {
    /// Corner and edge glyphs: top-left, top-right, bottom-left, bottom-right,
    /// horizontal, vertical.
    pub const fn glyphs(&self) -> Option<[char; 6]> {
        match self {
            Self::None => None,
            Self::Single => Some(['┌', '┐', '└', '┘', '─', '│']),
            Self::Rounded => Some(['╭', '╮', '╰', '╯', '─', '│']),
        }
    }

    pub const fn thickness(&self) -> u16 {
        match self {
            Self::None => 0,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub dim: bool,
    pub reversed: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            dim: false,
            reversed: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub const fn reversed(mut self) -> Self {
        self.reversed = true;
        self
    }

    /// Combine with a parent style; any flag set on either side stays set.
    pub const fn merge(self, other: TextStyle) -> Self {
        Self {
            bold: self.bold || other.bold,
            italic: self.italic || other.italic,
            underline: self.underline || other.underline,
            dim: self.dim || other.dim,
            reversed: self.reversed || other.reversed,
        }
    }
}
