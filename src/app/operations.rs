use super::*;
use crate::utils::formatter::pluralize;
use std::path::MAIN_SEPARATOR;

impl App {
    // === 폴더 선택 ===

    /// 폴더 선택 다이얼로그 열기
    pub fn start_select_folder(&mut self) {
        let initial = self.dialog_base_dir().display().to_string();
        self.dialog = Some(DialogKind::select_folder_input(
            initial,
            self.base_path.clone(),
        ));
        self.update_input_completion_state();
    }

    pub(super) fn load_folder_from_input(&mut self, input: &str) {
        let input = input.trim();
        if input.is_empty() {
            return;
        }
        let folder = self.resolve(input);
        self.load_folder(folder);
    }

    /// 폴더의 파일 목록으로 후보를 교체 (모두 선택)
    ///
    /// 목록 조회에 실패하면 에러 다이얼로그만 띄우고 기존 상태는 유지한다.
    pub fn load_folder(&mut self, folder: PathBuf) {
        match self.filesystem.list_files(&folder) {
            Ok(files) => {
                let count = files.len();
                tracing::info!(folder = %folder.display(), count, "folder loaded");
                self.panel.load_folder(folder, files);
                self.set_toast(format!("Loaded {}", pluralize(count, "file", "files")));
            }
            Err(err) => {
                self.show_error(format!("Failed to list files: {}", err));
            }
        }
    }

    // === 파일 추가 ===

    /// 파일 추가 다이얼로그 열기
    pub fn start_add_files(&mut self) {
        self.dialog = Some(DialogKind::add_files_input(self.base_path.clone()));
    }

    pub(super) fn add_files_from_input(&mut self, input: &str) {
        if input.trim().is_empty() {
            return;
        }
        let Some(tokens) = path_input::parse_path_list(input) else {
            self.show_error("Failed to parse file list: unbalanced quotes");
            return;
        };
        let paths = tokens.iter().map(|token| self.resolve(token)).collect();
        self.add_files(paths);
    }

    /// 후보 목록에 파일 추가 (중복 제외, 새 항목은 선택 상태)
    ///
    /// 일반 파일이 아닌 경로는 건너뛰고 하나의 경고로 모아 보고한다.
    /// 반환값은 새로 추가된 개수.
    pub fn add_files(&mut self, paths: Vec<PathBuf>) -> usize {
        let mut valid = Vec::new();
        let mut skipped = Vec::new();
        for path in paths {
            match self.filesystem.check_file(&path) {
                Ok(file) => valid.push(file),
                Err(err) => skipped.push(err.to_string()),
            }
        }

        let before = self.panel.candidates.len();
        self.panel.apply(SelectionEvent::FilesPicked(valid));
        let added = self.panel.candidates.len() - before;

        tracing::info!(added, skipped = skipped.len(), "files added");
        self.set_toast(format!("Added {}", pluralize(added, "file", "files")));

        if !skipped.is_empty() {
            tracing::warn!("skipped files: {}", skipped.join("; "));
            self.show_warning(
                "Skipped Files",
                format!(
                    "{} skipped:\n{}",
                    pluralize(skipped.len(), "path", "paths"),
                    skipped.join("\n")
                ),
            );
        }
        added
    }

    // === 내보내기 ===

    /// 내보내기 다이얼로그 열기 (선택이 없으면 경고만 표시)
    pub fn start_export(&mut self) {
        if self.panel.candidates.selected_count() == 0 {
            tracing::warn!("export requested with empty selection");
            self.show_warning("No Files", "Please select at least one file.");
            return;
        }

        let mut initial = self.dialog_base_dir().display().to_string();
        if !initial.ends_with(MAIN_SEPARATOR) {
            initial.push(MAIN_SEPARATOR);
        }
        self.dialog = Some(DialogKind::export_path_input(
            initial,
            self.base_path.clone(),
        ));
    }

    pub(super) fn export_from_input(&mut self, input: &str) {
        let input = input.trim();
        if input.is_empty() {
            return;
        }
        let target = self.resolve(input);
        // 파일 이름 없이 확인하면 폴더 옆에 `<폴더>.txt`가 생기므로 거부
        if input.ends_with(['/', MAIN_SEPARATOR]) || self.filesystem.is_directory(&target) {
            self.show_error(format!("{} is a directory", target.display()));
            return;
        }
        let output = with_default_extension(&target, &self.settings.default_extension);

        if self.filesystem.exists(&output) && !self.filesystem.is_directory(&output) {
            self.dialog = Some(DialogKind::confirm(
                "Overwrite",
                format!("{} already exists. Overwrite?", output.display()),
            ));
            self.pending_export = Some(output);
            return;
        }
        self.export_to(&output);
    }

    /// 선택된 파일을 출력 파일에 기록
    ///
    /// 쓰기 도중 실패하면 이미 기록된 내용은 디스크에 남는다.
    pub fn export_to(&mut self, output: &Path) -> Option<ExportSummary> {
        let selected = self.panel.candidates.selected_paths();
        if selected.is_empty() {
            tracing::warn!("export requested with empty selection");
            self.show_warning("No Files", "Please select at least one file.");
            return None;
        }

        tracing::info!(output = %output.display(), files = selected.len(), "export started");
        match export_to_file(&selected, output) {
            Ok(summary) => {
                tracing::info!(
                    records = summary.records,
                    text = summary.text,
                    base64 = summary.base64,
                    unreadable = summary.unreadable,
                    bytes = summary.bytes_written,
                    "export finished"
                );
                self.show_message("Success", format!("Output saved to {}", output.display()));
                Some(summary)
            }
            Err(err) => {
                self.show_error(format!("Failed to generate output: {}", err));
                None
            }
        }
    }
}
