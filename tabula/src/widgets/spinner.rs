//! Spinner widget for loading states.
//!
//! Frames advance on [`Spinner::tick`]; the host decides the frame rate.

use tabula_dom::{Element, Style};

use crate::theme::Theme;

const BRAILLE_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// An indeterminate progress indicator.
#[derive(Clone, Debug)]
pub struct Spinner {
    frames: &'static [&'static str],
    frame: usize,
}

impl Default for Spinner {
    fn default() -> Self {
        Self {
            frames: BRAILLE_FRAMES,
            frame: 0,
        }
    }
}

impl Spinner {
    /// Create a new spinner with the braille frame set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom frame set. An empty set falls back to the default.
    pub fn frames(mut self, frames: &'static [&'static str]) -> Self {
        if !frames.is_empty() {
            self.frames = frames;
            self.frame = 0;
        }
        self
    }

    /// Advance to the next frame, wrapping around.
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % self.frames.len();
    }

    pub fn current(&self) -> &'static str {
        self.frames[self.frame]
    }

    /// Build the spinner element.
    pub fn build(&self, theme: &Theme) -> Element {
        Element::text(self.current()).style(Style::new().foreground(theme.accent).bold())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_wraps_around() {
        let mut spinner = Spinner::new().frames(&["a", "b"]);
        assert_eq!(spinner.current(), "a");
        spinner.tick();
        assert_eq!(spinner.current(), "b");
        spinner.tick();
        assert_eq!(spinner.current(), "a");
    }

    #[test]
    fn empty_frame_set_is_ignored() {
        let spinner = Spinner::new().frames(&[]);
        assert_eq!(spinner.current(), "⠋");
    }
}
