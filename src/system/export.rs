//! 선택 파일 내용을 단일 텍스트 파일로 내보내기

use crate::system::content::{read_content, FileContent};
use crate::utils::error::{ConglomerateError, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// 내보내기 결과 요약
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub records: usize,
    pub text: usize,
    pub base64: usize,
    pub unreadable: usize,
    pub bytes_written: u64,
}

impl ExportSummary {
    fn count(&mut self, content: &FileContent) {
        self.records += 1;
        match content {
            FileContent::Text(_) => self.text += 1,
            FileContent::Base64(_) => self.base64 += 1,
            FileContent::Unreadable(_) => self.unreadable += 1,
        }
    }
}

/// 레코드 한 줄 생성: `"<name>", "<path>": "<content>"` + 빈 줄
pub fn format_record(path: &Path, content: &str) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    format!("\"{}\", \"{}\": \"{}\"\n\n", name, path.display(), content)
}

/// 확장자가 없으면 기본 확장자 추가
///
/// 파일 이름이 없는 경로(`/`, `..`)는 그대로 둔다.
pub fn with_default_extension(path: &Path, extension: &str) -> PathBuf {
    let extension = extension.trim_start_matches('.');
    if path.file_name().is_none() || path.extension().is_some() || extension.is_empty() {
        path.to_path_buf()
    } else {
        path.with_extension(extension)
    }
}

/// 레코드를 순서대로 기록
///
/// 중간 실패 시 이미 기록한 내용은 그대로 남는다.
pub fn write_records<W: Write>(writer: &mut W, paths: &[&Path]) -> io::Result<ExportSummary> {
    let mut summary = ExportSummary::default();
    for path in paths {
        let content = read_content(path);
        let record = format_record(path, content.as_str());
        writer.write_all(record.as_bytes())?;
        summary.count(&content);
        summary.bytes_written += record.len() as u64;
    }
    writer.flush()?;
    Ok(summary)
}

/// 출력 파일 생성 후 내보내기
pub fn export_to_file(paths: &[&Path], output: &Path) -> Result<ExportSummary> {
    let file = File::create(output).map_err(|e| ConglomerateError::from_io(e, output))?;
    let mut writer = BufWriter::new(file);
    write_records(&mut writer, paths).map_err(|e| ConglomerateError::from_io(e, output))
}
