//! 파일 내용 읽기 (텍스트 / base64 / 인라인 에러)

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fs;
use std::path::Path;

/// 텍스트 판별에 사용하는 앞부분 크기
pub const PROBE_LEN: usize = 1024;

/// 내보내기 레코드에 들어갈 파일 내용
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// UTF-8 텍스트 (원본 그대로)
    Text(String),
    /// 원본 바이트의 base64
    Base64(String),
    /// 읽기 실패 설명
    Unreadable(String),
}

impl FileContent {
    /// 레코드에 기록할 문자열
    pub fn as_str(&self) -> &str {
        match self {
            FileContent::Text(s) | FileContent::Base64(s) | FileContent::Unreadable(s) => s,
        }
    }
}

/// 앞부분이 UTF-8로 해석 가능한지 확인
///
/// 경계에서 잘린 멀티바이트 문자는 허용한다.
pub fn probe_is_text(bytes: &[u8]) -> bool {
    let probe = &bytes[..bytes.len().min(PROBE_LEN)];
    match std::str::from_utf8(probe) {
        Ok(_) => true,
        Err(e) => e.error_len().is_none(),
    }
}

/// 바이트를 내용으로 분류
pub fn decode_bytes(bytes: Vec<u8>) -> FileContent {
    if probe_is_text(&bytes) {
        match String::from_utf8(bytes) {
            Ok(text) => FileContent::Text(text),
            Err(e) => FileContent::Base64(STANDARD.encode(e.as_bytes())),
        }
    } else {
        FileContent::Base64(STANDARD.encode(&bytes))
    }
}

/// 파일 내용 읽기
///
/// 실패해도 에러를 반환하지 않고 설명 문자열을 담는다.
pub fn read_content(path: &Path) -> FileContent {
    match fs::read(path) {
        Ok(bytes) => decode_bytes(bytes),
        Err(e) => FileContent::Unreadable(format!("Error reading as binary: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_text_file_is_exact() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.txt");
        let text = "\u{feff}line one\r\nline two\n한글";
        fs::write(&path, text).unwrap();

        assert_eq!(read_content(&path), FileContent::Text(text.to_string()));
    }

    #[test]
    fn test_binary_file_is_base64() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("b.bin");
        fs::write(&path, [0xFF, 0xFE]).unwrap();

        let content = read_content(&path);
        assert_eq!(content, FileContent::Base64("//4=".to_string()));
        assert_eq!(STANDARD.decode(content.as_str()).unwrap(), vec![0xFF, 0xFE]);
    }

    #[test]
    fn test_empty_file_is_empty_text() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty");
        fs::write(&path, b"").unwrap();

        assert_eq!(read_content(&path), FileContent::Text(String::new()));
    }

    #[test]
    fn test_probe_accepts_char_cut_at_boundary() {
        let mut bytes = vec![b'a'; PROBE_LEN - 1];
        bytes.extend_from_slice("é".as_bytes());
        assert!(probe_is_text(&bytes));
        assert!(matches!(decode_bytes(bytes), FileContent::Text(_)));
    }

    #[test]
    fn test_invalid_after_probe_is_base64() {
        let mut bytes = vec![b'a'; PROBE_LEN + 10];
        bytes.push(0xFF);
        let expected = STANDARD.encode(&bytes);

        assert_eq!(decode_bytes(bytes), FileContent::Base64(expected));
    }

    #[test]
    fn test_missing_file_is_inline_error() {
        let temp = TempDir::new().unwrap();
        let content = read_content(&temp.path().join("gone"));

        match content {
            FileContent::Unreadable(message) => {
                assert!(message.starts_with("Error reading as binary: "));
            }
            other => panic!("Expected Unreadable, got {:?}", other),
        }
    }
}
