//! Text helpers shared by the render functions.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `s` to at most `max_width` terminal columns, adding "..." when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// Marker shown in front of an article title.
pub fn image_marker(has_image: bool) -> &'static str {
    if has_image {
        "[img]"
    } else {
        "[ - ]"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_untouched() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }

    #[test]
    fn test_long_text_truncated() {
        assert_eq!(truncate_to_width("hello world", 8), "hello...");
    }

    #[test]
    fn test_wide_chars_respect_columns() {
        // Each CJK char is two columns wide.
        let out = truncate_to_width("日本語のニュース", 9);
        assert_eq!(out, "日本語...");
        assert!(out.width() <= 9);
    }

    #[test]
    fn test_tiny_width() {
        assert_eq!(truncate_to_width("hello", 2), "..");
    }

    #[test]
    fn test_image_marker() {
        assert_eq!(image_marker(true), "[img]");
        assert_eq!(image_marker(false), "[ - ]");
    }
}
