use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal column width of a string (CJK text counts double-width)
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Truncate to at most `max` columns, appending `…` when anything was cut.
/// Never splits a double-width character in half.
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if display_width(s) <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let budget = max - 1; // reserve a column for the ellipsis
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('\u{2026}');
    out
}

/// Pad with trailing spaces to exactly `width` columns (wider input is
/// returned unchanged)
pub fn pad_to_width(s: &str, width: usize) -> String {
    let w = display_width(s);
    if w >= width {
        return s.to_string();
    }
    let mut out = s.to_string();
    out.push_str(&" ".repeat(width - w));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_cjk() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("分屏"), 4);
        // 4 CJK doubles + space + parens + 2 CJK doubles
        assert_eq!(display_width("左右分屏 (垂直)"), 15);
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_to_width("hello world", 20), "hello world");
        assert_eq!(truncate_to_width("hello world", 5), "hell\u{2026}");
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn test_truncate_never_splits_wide_char() {
        // "分" is 2 columns; with 4 columns available only one fits plus …
        let t = truncate_to_width("分屏模式", 4);
        assert_eq!(t, "分\u{2026}");
        assert!(display_width(&t) <= 4);
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("分屏", 5), "分屏 ");
        assert_eq!(pad_to_width("abcdef", 3), "abcdef");
    }
}
