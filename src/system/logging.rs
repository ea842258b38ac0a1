//! 파일 로그 초기화
//!
//! TUI가 터미널을 점유하므로 로그는 캐시 디렉토리의 파일로만 기록한다.

use anyhow::{anyhow, Context};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const FALLBACK_LEVEL: &str = "info";

/// `<cache_dir>/conglomerate/conglomerate.log`
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("conglomerate").join("conglomerate.log"))
}

/// 설정 문자열로 필터 생성 (잘못된 값이면 info)
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL))
}

/// 지정 파일로 전역 subscriber 설치
pub fn init_at(path: &Path, level: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {}", e))
}

/// 기본 경로로 로그 초기화, 로그 파일 경로 반환
pub fn init(level: &str) -> anyhow::Result<PathBuf> {
    let path = default_log_path().context("cache directory is not available")?;
    init_at(&path, level)?;
    Ok(path)
}
