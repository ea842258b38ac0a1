//! 읽기 전용 사용자 설정 (`settings.toml`)

use crate::utils::error::{ConglomerateError, Result};
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// 사용자 설정
///
/// 모든 필드는 생략 가능하며 파일은 읽기만 합니다.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 시작 테마 이름
    pub theme: String,
    /// 확장자 없는 출력 경로에 붙일 확장자
    pub default_extension: String,
    /// 로그 필터 (`info`, `debug`, `conglomerate=trace` 등)
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            default_extension: "txt".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// `<config_dir>/conglomerate/settings.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("conglomerate").join("settings.toml"))
    }

    /// 파일에서 설정 로드 (파일이 없으면 기본값)
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid settings in {}", path.display()))
    }

    /// 기본 경로에서 설정 로드
    pub fn load() -> anyhow::Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// 확장자는 경로 구분자나 앞의 점 없이 적어야 한다
    fn validate(&self) -> Result<()> {
        let ext = &self.default_extension;
        if ext.starts_with('.') || ext.contains(['/', '\\']) {
            return Err(ConglomerateError::Config(format!(
                "default_extension must be a bare extension, got {:?}",
                ext
            )));
        }
        Ok(())
    }
}
