/// A colour as declared by widgets and themes.
///
/// Themes are written in OKLCH so lightness steps stay perceptually even;
/// the renderer only ever sees the resolved [`Rgb`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Build a colour from a `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        Self::Rgb {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h } => oklch_to_rgb(*l, *c, *h),
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}
