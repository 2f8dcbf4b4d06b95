use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::types::TextAlign;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut `s` down to `max_width` cells, ending in `…` when anything was dropped.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1;
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push('…');
    result
}

/// Horizontal offset of a line of `text_width` cells inside `available` cells.
pub fn align_offset(text_width: usize, available: usize, align: TextAlign) -> usize {
    let slack = available.saturating_sub(text_width);
    match align {
        TextAlign::Left => 0,
        TextAlign::Center => slack / 2,
        TextAlign::Right => slack,
    }
}
