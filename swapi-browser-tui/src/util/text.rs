//! 按显示宽度截断文本

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 截断到不超过 `max_width` 列，被截断时以 `…` 结尾
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // 留一列给省略号
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("R2-D2", 10), "R2-D2");
        assert_eq!(truncate_to_width("R2-D2", 5), "R2-D2");
    }

    #[test]
    fn long_text_ends_with_ellipsis() {
        let out = truncate_to_width("Obi-Wan Kenobi", 8);
        assert_eq!(out, "Obi-Wan…");
        assert_eq!(out.width(), 8);
    }

    #[test]
    fn wide_chars_are_counted_by_columns() {
        // 每个汉字占两列
        let out = truncate_to_width("天行者卢克", 6);
        assert_eq!(out, "天行…");
        assert!(out.width() <= 6);
    }

    #[test]
    fn zero_width_gives_empty() {
        assert_eq!(truncate_to_width("Leia", 0), "");
    }
}
