use super::text_edit::InputEdit;
use super::*;
use crate::ui::components::dialog::help_row_count;
use crate::utils::path_input::CompletionKind;

impl App {
    // === 다이얼로그 공통 ===

    pub fn is_dialog_active(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
        self.pending_export = None;
    }

    pub fn show_message(&mut self, title: &str, message: impl Into<String>) {
        self.dialog = Some(DialogKind::message(title, message));
    }

    pub fn show_warning(&mut self, title: &str, message: impl Into<String>) {
        self.dialog = Some(DialogKind::warning(title, message));
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!("{}", message);
        self.dialog = Some(DialogKind::error("Error", message));
    }

    // === 입력 다이얼로그 편집 ===

    fn edit_input(&mut self, edit: impl FnOnce(&mut InputEdit<'_>)) {
        if let Some(DialogKind::Input {
            value, cursor_pos, ..
        }) = &mut self.dialog
        {
            edit(&mut InputEdit::new(value, cursor_pos));
        }
        self.update_input_completion_state();
    }

    /// 입력 다이얼로그: 문자 입력
    pub fn dialog_input_char(&mut self, c: char) {
        self.edit_input(|e| e.insert(c));
    }

    /// 입력 다이얼로그: 백스페이스
    pub fn dialog_input_backspace(&mut self) {
        self.edit_input(|e| e.backspace());
    }

    /// 입력 다이얼로그: Delete
    pub fn dialog_input_delete(&mut self) {
        self.edit_input(|e| e.delete());
    }

    /// 입력 다이얼로그: 경로 구성요소 삭제 (Ctrl+W)
    pub fn dialog_input_delete_prev_word(&mut self) {
        self.edit_input(|e| e.delete_component());
    }

    pub fn dialog_input_left(&mut self) {
        self.edit_input(|e| e.left());
    }

    pub fn dialog_input_right(&mut self) {
        self.edit_input(|e| e.right());
    }

    pub fn dialog_input_home(&mut self) {
        self.edit_input(|e| e.home());
    }

    pub fn dialog_input_end(&mut self) {
        self.edit_input(|e| e.end());
    }

    /// 입력/확인 다이얼로그: OK/Cancel 버튼 전환
    pub fn dialog_toggle_button(&mut self) {
        if let Some(
            DialogKind::Input {
                selected_button, ..
            }
            | DialogKind::Confirm {
                selected_button, ..
            },
        ) = &mut self.dialog
        {
            *selected_button = if *selected_button == 0 { 1 } else { 0 };
        }
    }

    #[cfg(test)]
    pub fn get_dialog_selected_button(&self) -> Option<usize> {
        match &self.dialog {
            Some(
                DialogKind::Input {
                    selected_button, ..
                }
                | DialogKind::Confirm {
                    selected_button, ..
                },
            ) => Some(*selected_button),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn get_dialog_input_value(&self) -> Option<String> {
        match &self.dialog {
            Some(DialogKind::Input { value, .. }) => Some(value.clone()),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn get_dialog_input_purpose(&self) -> Option<InputPurpose> {
        match &self.dialog {
            Some(DialogKind::Input { purpose, .. }) => Some(*purpose),
            _ => None,
        }
    }

    // === 자동완성 ===

    fn collect_input_completion_candidates(
        purpose: InputPurpose,
        value: &str,
        base_path: &Path,
    ) -> Vec<String> {
        match purpose {
            InputPurpose::SelectFolder => {
                path_input::completion_candidates(value, base_path, CompletionKind::Directories)
            }
            InputPurpose::ExportPath => path_input::completion_candidates(
                value,
                base_path,
                CompletionKind::FilesAndDirectories,
            ),
            InputPurpose::AddFiles => path_input::completion_candidates_for_list(value, base_path),
        }
    }

    /// 입력값 기준으로 추천 목록 갱신 (선택은 해제)
    pub(super) fn update_input_completion_state(&mut self) {
        if let Some(DialogKind::Input {
            value,
            purpose,
            base_path,
            completion_candidates,
            completion_index,
            ..
        }) = &mut self.dialog
        {
            *completion_candidates =
                Self::collect_input_completion_candidates(*purpose, value, base_path);
            *completion_index = None;
        }
    }

    /// 추천 목록이 비었거나 유일한 추천이 이미 적용된 상태면 다시 수집
    fn needs_completion_seed(&self) -> bool {
        matches!(
            &self.dialog,
            Some(DialogKind::Input {
                value,
                completion_candidates,
                ..
            }) if completion_candidates.is_empty()
                || (completion_candidates.len() == 1 && completion_candidates[0] == *value)
        )
    }

    fn cycle_completion(&mut self, forward: bool) {
        if self.needs_completion_seed() {
            self.update_input_completion_state();
        }

        if let Some(DialogKind::Input {
            completion_candidates,
            completion_index,
            value,
            cursor_pos,
            ..
        }) = &mut self.dialog
        {
            let len = completion_candidates.len();
            if len == 0 {
                return;
            }
            let next = match (*completion_index, forward) {
                (None, true) => 0,
                (None, false) => len - 1,
                (Some(idx), true) => (idx + 1) % len,
                (Some(idx), false) => (idx + len - 1) % len,
            };
            *completion_index = Some(next);
            *value = completion_candidates[next].clone();
            *cursor_pos = value.len();
        }
    }

    /// 경로 입력 다이얼로그: 다음 추천으로 순환 + 즉시 적용 (Tab)
    pub fn dialog_input_cycle_completion_next(&mut self) {
        self.cycle_completion(true);
    }

    /// 경로 입력 다이얼로그: 이전 추천으로 순환 + 즉시 적용 (Shift+Tab)
    pub fn dialog_input_cycle_completion_prev(&mut self) {
        self.cycle_completion(false);
    }

    // === 확인 처리 ===

    /// Enter: 포커스된 버튼에 따라 다이얼로그 처리
    pub fn confirm_dialog(&mut self) {
        let Some(dialog) = self.dialog.take() else {
            return;
        };

        match dialog {
            DialogKind::Input {
                value,
                purpose,
                selected_button: 0,
                ..
            } => match purpose {
                InputPurpose::SelectFolder => self.load_folder_from_input(&value),
                InputPurpose::AddFiles => self.add_files_from_input(&value),
                InputPurpose::ExportPath => self.export_from_input(&value),
            },
            DialogKind::Confirm {
                selected_button: 0,
                ..
            } => {
                if let Some(output) = self.pending_export.take() {
                    self.export_to(&output);
                }
            }
            _ => self.pending_export = None,
        }
    }

    // === 도움말 ===

    pub fn show_help(&mut self) {
        self.dialog = Some(DialogKind::help());
    }

    pub fn dialog_help_scroll_down(&mut self) {
        if let Some(DialogKind::Help { scroll_offset }) = &mut self.dialog {
            if *scroll_offset + 1 < help_row_count() {
                *scroll_offset += 1;
            }
        }
    }

    pub fn dialog_help_scroll_up(&mut self) {
        if let Some(DialogKind::Help { scroll_offset }) = &mut self.dialog {
            *scroll_offset = scroll_offset.saturating_sub(1);
        }
    }
}
