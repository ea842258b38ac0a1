//! 경로 입력 다이얼로그 보조 함수
//!
//! `~` 확장, 상대 경로 해석, 자동완성 후보 수집, 다중 경로 파싱

use std::fs;
use std::path::{Path, PathBuf};

/// 자동완성 후보 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionKind {
    /// 디렉토리만
    Directories,
    /// 디렉토리 + 파일
    FilesAndDirectories,
}

/// 입력 경로 해석 (`~` 확장 + base 기준 상대 경로)
pub fn resolve_input_path(input: &str, base_path: &Path) -> PathBuf {
    let expanded = if input == "~" {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from(input))
    } else if let Some(rest) = input
        .strip_prefix("~/")
        .or_else(|| input.strip_prefix("~\\"))
    {
        match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(input),
        }
    } else {
        PathBuf::from(input)
    };

    if expanded.is_absolute() {
        expanded
    } else {
        base_path.join(expanded)
    }
}

/// 입력값을 (부모 부분, 마지막 세그먼트)로 분리
pub fn split_path_input(value: &str) -> (&str, &str) {
    match value
        .char_indices()
        .rev()
        .find(|(_, c)| std::path::is_separator(*c))
    {
        Some((idx, _)) => (&value[..=idx], &value[idx + 1..]),
        None => ("", value),
    }
}

/// 단일 경로 입력에 대한 자동완성 후보
///
/// 디렉토리 후보는 구분자로 끝나므로 바로 다음 단계 완성이 가능하다.
/// 숨김 항목은 입력한 세그먼트가 '.'으로 시작할 때만 포함한다.
pub fn completion_candidates(value: &str, base_path: &Path, kind: CompletionKind) -> Vec<String> {
    let (raw_parent, partial) = if value == "~" {
        ("~/", "")
    } else {
        split_path_input(value)
    };
    let dir_path = if raw_parent.is_empty() {
        base_path.to_path_buf()
    } else {
        resolve_input_path(raw_parent, base_path)
    };
    let display_prefix = if value == "~" {
        format!("~{}", std::path::MAIN_SEPARATOR)
    } else {
        raw_parent.to_string()
    };

    let mut candidates: Vec<String> = fs::read_dir(&dir_path)
        .ok()
        .into_iter()
        .flat_map(|iter| iter.flatten())
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().to_string();
            if !name.starts_with(partial) {
                return None;
            }
            if name.starts_with('.') && !partial.starts_with('.') {
                return None;
            }
            let path = entry.path();
            if path.is_dir() {
                Some(format!(
                    "{}{}{}",
                    display_prefix,
                    name,
                    std::path::MAIN_SEPARATOR
                ))
            } else if kind == CompletionKind::FilesAndDirectories && path.is_file() {
                Some(format!("{}{}", display_prefix, name))
            } else {
                None
            }
        })
        .collect();
    candidates.sort_unstable();
    candidates
}

/// 셸 스타일 경로 목록 파싱 (공백 구분, 따옴표 지원)
///
/// 따옴표 짝이 맞지 않으면 None
pub fn parse_path_list(input: &str) -> Option<Vec<String>> {
    shlex::split(input)
}

/// 다중 경로 입력에서 마지막 토큰의 시작 바이트 위치
///
/// 따옴표 안의 공백은 구분자로 보지 않는다.
pub fn last_token_start(input: &str) -> usize {
    let mut quote: Option<char> = None;
    let mut start = 0;
    let mut escaped = false;
    for (idx, ch) in input.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, ch) {
            (_, '\\') if quote != Some('\'') => escaped = true,
            (None, '"') | (None, '\'') => quote = Some(ch),
            (Some(q), c) if c == q => quote = None,
            (None, c) if c.is_whitespace() => start = idx + c.len_utf8(),
            _ => {}
        }
    }
    start
}

/// 다중 경로 입력의 마지막 토큰에 대한 자동완성 후보
///
/// 후보는 입력 전체 문자열 형태로 반환한다 (앞쪽 토큰 유지).
/// 따옴표로 시작하는 토큰은 완성하지 않는다.
pub fn completion_candidates_for_list(input: &str, base_path: &Path) -> Vec<String> {
    let start = last_token_start(input);
    let (head, token) = input.split_at(start);
    if token.starts_with('"') || token.starts_with('\'') {
        return Vec::new();
    }

    completion_candidates(token, base_path, CompletionKind::FilesAndDirectories)
        .into_iter()
        .map(|candidate| {
            let quoted = shlex::try_quote(&candidate)
                .map(|q| q.into_owned())
                .unwrap_or(candidate);
            format!("{}{}", head, quoted)
        })
        .collect()
}
