use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConglomerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path not found: {}", path.display())]
    PathNotFound { path: PathBuf },

    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Not a regular file: {}", path.display())]
    NotAFile { path: PathBuf },

    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ConglomerateError {
    /// io::Error를 경로 정보가 있는 에러로 변환
    pub fn from_io(err: std::io::Error, path: &std::path::Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => ConglomerateError::PathNotFound {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::PermissionDenied => ConglomerateError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => ConglomerateError::Io(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConglomerateError>;
