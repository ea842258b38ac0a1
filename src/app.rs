use crate::core::actions::Action;
use crate::models::{PanelState, SelectionEvent};
use crate::system::{
    export_to_file, with_default_extension, ExportSummary, FileSystem, Settings,
};
use crate::ui::{DialogKind, InputPurpose, LayoutManager, ThemeManager};
use crate::utils::path_input;
use std::env;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

mod dialogs;
mod navigation;
mod operations;
mod text_edit;

/// 토스트 메시지 표시 시간
const TOAST_DURATION: Duration = Duration::from_secs(3);

/// 앱 상태
pub struct App {
    /// 종료 플래그
    pub should_quit: bool,
    /// 레이아웃 매니저
    pub layout: LayoutManager,
    /// 후보 패널 상태
    pub panel: PanelState,
    /// 파일 시스템
    pub filesystem: FileSystem,
    /// 테마 관리자
    pub theme_manager: ThemeManager,
    /// 읽기 전용 설정
    pub settings: Settings,
    /// 상대 경로 해석 기준 (시작 시 작업 디렉토리)
    pub base_path: PathBuf,
    /// 현재 표시 중인 다이얼로그
    pub dialog: Option<DialogKind>,
    /// 덮어쓰기 확인 대기 중인 출력 경로
    pending_export: Option<PathBuf>,
    /// 토스트 메시지 (3초 후 자동 소멸)
    pub toast_message: Option<(String, Instant)>,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let base_path = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let mut app = Self::with_base_path(settings, base_path);

        match app.theme_manager.load_themes_from_config_dir() {
            Ok(0) => {}
            Ok(count) => tracing::info!(count, "custom themes loaded"),
            Err(err) => tracing::warn!("failed to load custom themes: {:#}", err),
        }
        let theme = app.settings.theme.clone();
        if let Err(err) = app.theme_manager.switch_theme(&theme) {
            tracing::warn!("{}", err);
        }
        app
    }

    fn with_base_path(settings: Settings, base_path: PathBuf) -> Self {
        Self {
            should_quit: false,
            layout: LayoutManager::new(),
            panel: PanelState::new(),
            filesystem: FileSystem::new(),
            theme_manager: ThemeManager::new(),
            settings,
            base_path,
            dialog: None,
            pending_export: None,
            toast_message: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn new_for_test(base_path: &Path) -> Self {
        Self::with_base_path(Settings::default(), base_path.to_path_buf())
    }

    /// 종료
    pub fn quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some((message.into(), Instant::now()));
    }

    /// 만료되지 않은 토스트 메시지
    pub fn active_toast(&self) -> Option<&str> {
        self.toast_message
            .as_ref()
            .filter(|(_, at)| at.elapsed() < TOAST_DURATION)
            .map(|(message, _)| message.as_str())
    }

    /// 만료된 토스트 정리
    pub fn expire_toast(&mut self) {
        if self.active_toast().is_none() {
            self.toast_message = None;
        }
    }

    /// 선택된 파일 총 크기 (추가 시점에 조회한 크기 기준)
    pub fn selected_size(&self) -> u64 {
        self.panel.candidates.selected_size()
    }

    /// 헤더에 표시할 폴더 (없으면 None)
    pub fn folder(&self) -> Option<&Path> {
        self.panel.folder.as_deref()
    }

    /// 다이얼로그 기본 디렉토리: 선택한 폴더 또는 시작 디렉토리
    fn dialog_base_dir(&self) -> PathBuf {
        self.panel
            .folder
            .clone()
            .unwrap_or_else(|| self.base_path.clone())
    }

    fn resolve(&self, input: &str) -> PathBuf {
        path_input::resolve_input_path(input, &self.base_path)
    }
}

#[cfg(test)]
mod tests;
