//! Utility functions for UI rendering
//!
//! All widths are counted in characters, never bytes.

use crate::constants::{COL_FIXED, COL_NAME_MAX, COL_NAME_MIN, ELLIPSIS, TABLE_MARGIN};

/// Truncates a string to fit within a given width.
///
/// If the string exceeds `max_len`, it is truncated and "..." is appended.
/// Widths of 3 or less have no room for the marker and keep the first
/// `max_len` characters instead.
///
/// # Arguments
/// * `s` - The string to truncate
/// * `max_len` - Maximum character length for the output
///
/// # Returns
/// The original string if it fits, or a truncated version with "..." suffix
#[must_use]
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > ELLIPSIS.len() {
        let kept: String = s.chars().take(max_len - ELLIPSIS.len()).collect();
        kept + ELLIPSIS
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Right-aligns `s` in `width` characters. Longer strings are returned as is.
#[must_use]
pub fn pad_left(s: &str, width: usize) -> String {
    let n = s.chars().count();
    if n >= width {
        return s.to_string();
    }
    format!("{}{}", " ".repeat(width - n), s)
}

/// Left-aligns `s` in `width` characters. Longer strings are returned as is.
#[must_use]
pub fn pad_right(s: &str, width: usize) -> String {
    let n = s.chars().count();
    if n >= width {
        return s.to_string();
    }
    format!("{}{}", s, " ".repeat(width - n))
}

/// Truncates then pads to exactly `width` characters.
#[must_use]
pub fn fit(s: &str, width: usize) -> String {
    pad_right(&truncate_string(s, width), width)
}

/// Width of the Name column for a terminal `width` columns wide.
///
/// The Name column takes whatever the fixed columns and margin leave,
/// bounded to `[COL_NAME_MIN, COL_NAME_MAX]`.
#[must_use]
pub fn name_column_width(width: usize) -> usize {
    width
        .saturating_sub(COL_FIXED + TABLE_MARGIN)
        .clamp(COL_NAME_MIN, COL_NAME_MAX)
}
