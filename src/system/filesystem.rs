use crate::models::CandidateFile;
use crate::utils::error::{ConglomerateError, Result};
use std::fs;
use std::path::Path;

/// 파일 시스템 모듈
pub struct FileSystem;

impl FileSystem {
    /// 새 파일 시스템 인스턴스 생성
    pub fn new() -> Self {
        Self
    }

    /// 폴더의 일반 파일 목록 (비재귀)
    ///
    /// 하위 디렉토리는 제외하고 심볼릭 링크는 대상 기준으로 판단합니다.
    /// 결과는 파일 이름 순으로 정렬되며 크기를 함께 담습니다.
    pub fn list_files(&self, path: &Path) -> Result<Vec<CandidateFile>> {
        // 1. 경로 존재 확인
        if !path.exists() {
            return Err(ConglomerateError::PathNotFound {
                path: path.to_path_buf(),
            });
        }

        // 2. 디렉토리 여부 확인
        if !path.is_dir() {
            return Err(ConglomerateError::NotADirectory {
                path: path.to_path_buf(),
            });
        }

        // 3. 디렉토리 읽기
        let read_dir = fs::read_dir(path).map_err(|e| ConglomerateError::from_io(e, path))?;

        // 4. 일반 파일만 수집
        let mut files = Vec::new();
        for entry in read_dir {
            // 에러 발생 시 해당 엔트리는 스킵
            let Ok(entry) = entry else { continue };

            let entry_path = entry.path();
            // 링크는 대상 메타데이터 (끊어진 링크는 제외)
            let Ok(metadata) = fs::metadata(&entry_path) else {
                continue;
            };
            if metadata.is_file() {
                files.push(CandidateFile::new(entry_path, metadata.len()));
            }
        }

        files.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
        Ok(files)
    }

    /// 추가 가능한 일반 파일인지 확인하고 크기와 함께 반환
    pub fn check_file(&self, path: &Path) -> Result<CandidateFile> {
        let metadata = fs::metadata(path).map_err(|e| ConglomerateError::from_io(e, path))?;
        if metadata.is_file() {
            Ok(CandidateFile::new(path, metadata.len()))
        } else {
            Err(ConglomerateError::NotAFile {
                path: path.to_path_buf(),
            })
        }
    }

    /// 경로 존재 여부
    pub fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    /// 디렉토리 여부
    pub fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

impl Default for FileSystem {
    fn default() -> Self {
        Self::new()
    }
}
