use unicode_width::UnicodeWidthChar;

/// Cuts `s` to at most `max_width` terminal columns, ending in "..." when
/// anything was dropped.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push_str("...");
    out
}

pub fn display_width(s: &str) -> usize {
    s.chars().map(|c| c.width().unwrap_or(0)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_no_truncation() {
        assert_eq!(truncate_string("Short string", 20), "Short string");
    }

    #[test]
    fn test_truncate_string_with_truncation() {
        let result = truncate_string("This is a very long string that should be truncated", 20);
        assert_eq!(result, "This is a very lo...");
        assert_eq!(display_width(&result), 20);
    }

    #[test]
    fn test_truncate_string_multibyte() {
        // Byte slicing would split 'ñ'.
        assert_eq!(truncate_string("mañana por la mañana", 8), "mañan...");
    }

    #[test]
    fn test_truncate_string_wide_chars() {
        let result = truncate_string("日本語のテキスト", 9);
        assert_eq!(result, "日本語...");
        assert!(display_width(&result) <= 9);
    }

    #[test]
    fn test_truncate_string_tiny_width() {
        assert_eq!(truncate_string("abcdef", 2), "..");
        assert_eq!(truncate_string("", 0), "");
    }
}
