//! Horizontal text windowing for single-line input fields.
//!
//! All indices are byte offsets into UTF-8 strings. Window boundaries always
//! land on valid character boundaries.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

fn clamp_to_char_boundary(text: &str, idx: usize) -> usize {
    let mut idx = idx.min(text.len());
    while idx > 0 && !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

/// Compute a window `[start, end)` over `text` such that `end - start` fits
/// into `available_width` terminal cells and the char at `cursor` is visible.
pub fn window(text: &str, cursor: usize, available_width: usize) -> (usize, usize) {
    let cursor = clamp_to_char_boundary(text, cursor);
    if available_width == 0 || text.is_empty() {
        return (cursor, cursor);
    }

    // Everything up to and including the char under the cursor must fit;
    // otherwise walk backwards from the cursor until the width is spent.
    let cursor_end = match text[cursor..].chars().next() {
        Some(ch) => cursor + ch.len_utf8(),
        None => cursor,
    };

    let start = if UnicodeWidthStr::width(&text[..cursor_end]) <= available_width {
        0
    } else {
        let mut start = cursor;
        let mut used = 0usize;
        for (idx, ch) in text[..cursor_end].char_indices().rev() {
            let w = UnicodeWidthChar::width(ch).unwrap_or(0);
            if used + w > available_width {
                break;
            }
            used += w;
            start = idx;
        }
        start
    };

    let end = start + truncate_to_width(&text[start..], available_width);
    (start, end.min(text.len()))
}

/// Returns how many bytes from the start of `s` fit into `max_width` cells.
pub fn truncate_to_width(s: &str, max_width: usize) -> usize {
    if max_width == 0 || s.is_empty() {
        return 0;
    }

    let mut used = 0usize;
    let mut end = 0usize;
    for (idx, ch) in s.char_indices() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        end = idx + ch.len_utf8();
    }

    end
}
