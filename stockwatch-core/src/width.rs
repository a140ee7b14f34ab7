use unicode_width::UnicodeWidthChar;

/// Выравнивание внутри колонки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// пробелы справа
    Left,
    /// пробелы слева
    Right,
    /// поровну, лишний пробел справа
    Center,
}

/// Ширина символа в колонках терминала по таблицам `unicode-width`:
/// 2 для широких символов (иероглифы, полноширинные формы), иначе 1.
///
/// Считается то, что реально займёт терминал, а не свойство East_Asian_Width:
/// комбинирующие и невидимые символы (U+302A, U+3099, U+3164) дают 1, хотя
/// формально они Wide, а U+17A4 даёт 2. Символы с нулевой шириной считаются
/// за 1, чтобы выравнивание не уезжало на управляющих байтах.
pub fn char_width(ch: char) -> usize {
    match UnicodeWidthChar::width(ch) {
        Some(2) => 2,
        _ => 1,
    }
}

/// Ширина строки в колонках терминала
pub fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Дополняет текст пробелами до `width` колонок. Длинный текст не обрезается.
pub fn align_text(text: &str, width: usize, align: Align) -> String {
    let actual = display_width(text);
    if actual >= width {
        return text.to_string();
    }

    let padding = width - actual;
    match align {
        Align::Left => format!("{text}{}", " ".repeat(padding)),
        Align::Right => format!("{}{text}", " ".repeat(padding)),
        Align::Center => {
            let left = padding / 2;
            let right = padding - left;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_text_width_is_char_count() {
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width("sh601318"), 8);
        assert_eq!(display_width("N/A"), 3);
        assert_eq!(display_width("↑"), 1);
    }

    #[test]
    fn wide_text_counts_double() {
        assert_eq!(display_width("中国平安"), 8);
        assert_eq!(display_width("ＡＢ"), 4);
    }

    #[test]
    fn mixed_text_sums_widths() {
        assert_eq!(display_width("平安ABC"), 7);
        assert_eq!(display_width("万科Ａ"), 6);
    }

    #[test]
    fn char_width_follows_terminal_columns() {
        assert_eq!(char_width('中'), 2);
        assert_eq!(char_width('Ａ'), 2);
        assert_eq!(char_width('　'), 2);
        assert_eq!(char_width('a'), 1);
        assert_eq!(char_width('ｱ'), 1);
        // Wide по East_Asian_Width, но в терминале ничего не занимают
        for ch in ['\u{302A}', '\u{302F}', '\u{3099}', '\u{309A}', '\u{3164}'] {
            assert_eq!(char_width(ch), 1, "U+{:04X}", ch as u32);
        }
        // Neutral по East_Asian_Width, но терминал рисует его в две колонки
        assert_eq!(char_width('\u{17A4}'), 2);
        // нулевая ширина и управляющие символы считаются за одну колонку
        assert_eq!(char_width('\u{200B}'), 1);
        assert_eq!(char_width('\x1b'), 1);
    }

    #[test]
    fn combining_mark_after_kana_is_counted() {
        // が = か + U+3099
        assert_eq!(display_width("か\u{3099}"), 3);
        assert_eq!(display_width("が"), 2);
    }

    #[test]
    fn pads_left_right_center() {
        assert_eq!(align_text("ab", 5, Align::Left), "ab   ");
        assert_eq!(align_text("ab", 5, Align::Right), "   ab");
        assert_eq!(align_text("ab", 5, Align::Center), " ab  ");
        assert_eq!(align_text("ab", 6, Align::Center), "  ab  ");
    }

    #[test]
    fn pads_by_display_width() {
        let got = align_text("名称", 12, Align::Left);
        assert_eq!(got, "名称        ");
        assert_eq!(display_width(&got), 12);
        assert_eq!(align_text("平安", 6, Align::Right), "  平安");
    }

    #[test]
    fn never_truncates() {
        assert_eq!(align_text("abcdef", 3, Align::Right), "abcdef");
        assert_eq!(align_text("中国平安银行", 12, Align::Left), "中国平安银行");
        assert_eq!(align_text("中国平安银行股份", 12, Align::Center), "中国平安银行股份");
        for w in 0..10 {
            for align in [Align::Left, Align::Right, Align::Center] {
                let out = align_text("平安x", w, align);
                assert!(display_width(&out) >= display_width("平安x"));
                assert!(out.contains("平安x"));
            }
        }
    }
}
