// Formatters - 파일 크기, 개수 포맷팅

/// 파일 크기를 읽기 쉬운 형식으로 포맷팅 (숫자와 단위 사이 공백)
///
/// `0 B`, `512 B`, `1.5 KB`, `1.0 MB` 형식
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// 개수에 따라 단수/복수형 반환
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// 상태바용 선택 요약 ("2 of 5 selected")
pub fn format_selection_summary(selected: usize, total: usize) -> String {
    format!("{} of {} selected", selected, total)
}
