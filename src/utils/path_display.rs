use std::path::Path;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// 문자열을 최대 너비에 맞춰 중간 생략한다.
pub fn truncate_middle(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width < ELLIPSIS.width() + 2 {
        return take_by_width(text.chars(), max_width);
    }

    let side = (max_width - ELLIPSIS.width()) / 2;
    let head = take_by_width(text.chars(), side);
    let tail: String = take_by_width(text.chars().rev(), side)
        .chars()
        .rev()
        .collect();
    format!("{}{}{}", head, ELLIPSIS, tail)
}

/// 앞에서부터 최대 너비만큼 자른다 (생략 표시 없음).
pub fn truncate_end(text: &str, max_width: usize) -> String {
    take_by_width(text.chars(), max_width)
}

/// 경로를 표시용으로 축약한다.
/// HOME 아래 경로는 `~`로 바꾸고, 그래도 길면 앞부분을 `...`로 생략해 파일명이 보이게 한다.
pub fn display_path(path: &Path, max_width: usize) -> String {
    let text = shorten_home(path);
    if text.width() <= max_width {
        return text;
    }
    if max_width <= ELLIPSIS.width() {
        return take_by_width(text.chars(), max_width);
    }

    let tail: String = take_by_width(text.chars().rev(), max_width - ELLIPSIS.width())
        .chars()
        .rev()
        .collect();
    format!("{}{}", ELLIPSIS, tail)
}

fn shorten_home(path: &Path) -> String {
    let Some(home) = dirs::home_dir() else {
        return path.display().to_string();
    };

    match path.strip_prefix(&home) {
        Ok(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Ok(rest) => format!("~{}{}", std::path::MAIN_SEPARATOR, rest.display()),
        Err(_) => path.display().to_string(),
    }
}

/// 문자 순서대로 최대 너비만큼 취한다 (역순 이터레이터면 역순 결과).
fn take_by_width(chars: impl Iterator<Item = char>, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;
    for ch in chars {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_middle() {
        assert_eq!(truncate_middle("short", 10), "short");
        assert_eq!(truncate_middle("verylongstring", 10), "ver...ing");
        assert_eq!(truncate_middle("verylongstring", 4), "very");
    }

    #[test]
    fn test_truncate_middle_wide_chars() {
        let value = "가나다라마바사아자차카타파하";
        assert!(truncate_middle(value, 12).width() <= 12);
    }

    #[test]
    fn test_display_path_keeps_file_name() {
        let path = Path::new("/srv/projects/very/deep/tree/of/folders/report.txt");
        let shown = display_path(path, 20);
        assert!(shown.starts_with("..."));
        assert!(shown.ends_with("report.txt"));
        assert!(shown.width() <= 20);
    }

    #[test]
    fn test_display_path_short_is_untouched() {
        assert_eq!(display_path(Path::new("/tmp/a.txt"), 40), "/tmp/a.txt");
    }

    #[test]
    fn test_truncate_end() {
        assert_eq!(truncate_end("abcdef", 4), "abcd");
        assert_eq!(truncate_end("가나다", 5), "가나");
        assert_eq!(truncate_end("ab", 10), "ab");
    }
}
