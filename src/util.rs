//! Shared text helpers

use unicode_width::UnicodeWidthChar;

/// Ellipsis appended to truncated text
pub const ELLIPSIS: &str = "...";

/// Slice `s` to at most `max_chars` characters, respecting UTF-8 boundaries.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}

/// Body preview: the first `max_chars` characters, plus `...` if anything was cut.
pub fn preview(s: &str, max_chars: usize) -> String {
    let head = truncate_chars(s, max_chars);
    if head.len() == s.len() {
        s.to_string()
    } else {
        format!("{}{}", head, ELLIPSIS)
    }
}

/// Fit `s` into `width` terminal columns, ending with `…` when cut.
///
/// Wide characters (CJK, emoji) count as two columns.
pub fn fit_width(s: &str, width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
