use super::*;

impl App {
    /// 액션 실행 (단일 진실 원천)
    pub fn execute_action(&mut self, action: Action) {
        tracing::trace!(action = action.id(), "execute");
        match action {
            Action::MoveUp => self.move_selection_up(),
            Action::MoveDown => self.move_selection_down(),
            Action::GoToTop => self.go_to_top(),
            Action::GoToBottom => self.go_to_bottom(),
            Action::PageUp => self.move_selection_page_up(),
            Action::PageDown => self.move_selection_page_down(),
            Action::SelectFolder => self.start_select_folder(),
            Action::AddFiles => self.start_add_files(),
            Action::Export => self.start_export(),
            Action::ToggleRow => self.toggle_current(),
            Action::ToggleAndMoveDown => self.toggle_selection_and_move_down(),
            Action::SelectAll => self.select_all(),
            Action::DeselectAll => self.deselect_all(),
            Action::CycleTheme => self.cycle_theme(),
            Action::ShowHelp => self.show_help(),
            Action::Quit => self.quit(),
        }
    }

    /// 반 페이지 이동 폭
    fn half_page(&self) -> usize {
        (self.layout.list_height() / 2).max(1)
    }

    fn after_cursor_move(&mut self) {
        let height = self.layout.list_height();
        self.panel.adjust_scroll(height);
    }

    pub fn move_selection_up(&mut self) {
        self.panel.move_up(1);
        self.after_cursor_move();
    }

    pub fn move_selection_down(&mut self) {
        self.panel.move_down(1);
        self.after_cursor_move();
    }

    pub fn move_selection_page_up(&mut self) {
        self.panel.move_up(self.half_page());
        self.after_cursor_move();
    }

    pub fn move_selection_page_down(&mut self) {
        self.panel.move_down(self.half_page());
        self.after_cursor_move();
    }

    pub fn go_to_top(&mut self) {
        self.panel.go_to_top();
        self.after_cursor_move();
    }

    pub fn go_to_bottom(&mut self) {
        self.panel.go_to_bottom();
        self.after_cursor_move();
    }

    // === 선택 ===

    /// 커서 행 선택 토글
    pub fn toggle_current(&mut self) {
        if self.panel.candidates.is_empty() {
            return;
        }
        let index = self.panel.cursor;
        self.panel.apply(SelectionEvent::Toggled(index));
        if let Some(path) = self.panel.current_path() {
            tracing::debug!(
                path = %path.display(),
                selected = self.panel.candidates.is_selected(path),
                "toggled"
            );
        }
    }

    /// 토글 후 다음 행으로 이동 (Space)
    pub fn toggle_selection_and_move_down(&mut self) {
        self.toggle_current();
        self.move_selection_down();
    }

    pub fn select_all(&mut self) {
        self.panel.apply(SelectionEvent::SelectAll);
        tracing::debug!(count = self.panel.candidates.selected_count(), "select all");
    }

    pub fn deselect_all(&mut self) {
        self.panel.apply(SelectionEvent::DeselectAll);
        tracing::debug!("deselect all");
    }

    // === 테마 ===

    pub fn cycle_theme(&mut self) {
        self.theme_manager.cycle_theme();
        let name = self.theme_manager.current_name().to_string();
        tracing::debug!(theme = %name, "theme changed");
        self.set_toast(format!("Theme: {}", name));
    }
}
