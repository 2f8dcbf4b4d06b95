//! Colour palette shared by the widgets.

use tabula_dom::Color;

/// Dark theme with purple accents.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Core colors
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub primary: Color,
    pub secondary: Color,
    pub muted: Color,
    pub accent: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Row states
    pub row_cursor: Color,
    pub row_selected: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::oklch(0.15, 0.01, 280.0),
            surface: Color::oklch(0.2, 0.015, 280.0),
            border: Color::oklch(0.3, 0.02, 280.0),
            primary: Color::oklch(0.9, 0.0, 0.0),
            secondary: Color::oklch(0.75, 0.02, 280.0),
            muted: Color::oklch(0.5, 0.02, 280.0),
            accent: Color::oklch(0.6, 0.15, 280.0),

            success: Color::oklch(0.7, 0.15, 145.0), // green
            warning: Color::oklch(0.75, 0.15, 85.0), // yellow/orange
            error: Color::oklch(0.65, 0.2, 25.0),    // red

            row_cursor: Color::hex(0xA277FF),
            row_selected: Color::hex(0x6E5494),
        }
    }
}
