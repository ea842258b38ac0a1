use crate::models::candidate_list::{reduce, CandidateFile, CandidateList, SelectionEvent};
use std::path::{Path, PathBuf};

/// 후보 패널 상태
#[derive(Debug, Clone, Default)]
pub struct PanelState {
    /// 마지막으로 불러온 폴더 (표시용)
    pub folder: Option<PathBuf>,
    /// 후보 목록 + 선택 집합
    pub candidates: CandidateList,
    /// 커서 위치
    pub cursor: usize,
    /// 스크롤 오프셋
    pub scroll_offset: usize,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 이벤트 적용 후 커서 범위 보정
    pub fn apply(&mut self, event: SelectionEvent) {
        let current = std::mem::take(&mut self.candidates);
        self.candidates = reduce(current, event);
        self.clamp_cursor();
    }

    /// 새 폴더 목록으로 교체
    pub fn load_folder(&mut self, folder: PathBuf, files: Vec<CandidateFile>) {
        self.folder = Some(folder);
        self.apply(SelectionEvent::FolderListed(files));
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    /// 커서 아래 경로
    pub fn current_path(&self) -> Option<&Path> {
        self.candidates.get(self.cursor)
    }

    /// 마지막 인덱스 (비어 있으면 0)
    pub fn max_index(&self) -> usize {
        self.candidates.len().saturating_sub(1)
    }

    pub fn move_up(&mut self, amount: usize) {
        self.cursor = self.cursor.saturating_sub(amount);
    }

    pub fn move_down(&mut self, amount: usize) {
        self.cursor = (self.cursor + amount).min(self.max_index());
    }

    pub fn go_to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn go_to_bottom(&mut self) {
        self.cursor = self.max_index();
    }

    /// 커서가 보이도록 스크롤 오프셋 조정
    pub fn adjust_scroll(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + visible_height {
            self.scroll_offset = self.cursor + 1 - visible_height;
        }
        let max_offset = self.candidates.len().saturating_sub(visible_height);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    fn clamp_cursor(&mut self) {
        if self.cursor > self.max_index() {
            self.cursor = self.max_index();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(count: usize) -> PanelState {
        let mut state = PanelState::new();
        let files = (0..count)
            .map(|i| CandidateFile::new(format!("/d/f{:02}", i), 0))
            .collect();
        state.load_folder(PathBuf::from("/d"), files);
        state
    }

    #[test]
    fn test_load_folder_resets_cursor() {
        let mut state = loaded(5);
        state.cursor = 4;
        state.scroll_offset = 2;
        state.load_folder(PathBuf::from("/e"), vec![CandidateFile::new("/e/x", 0)]);

        assert_eq!(state.cursor, 0);
        assert_eq!(state.scroll_offset, 0);
        assert_eq!(state.folder.as_deref(), Some(Path::new("/e")));
    }

    #[test]
    fn test_cursor_movement_is_clamped() {
        let mut state = loaded(3);
        state.move_down(10);
        assert_eq!(state.cursor, 2);
        state.move_up(10);
        assert_eq!(state.cursor, 0);
        state.go_to_bottom();
        assert_eq!(state.current_path(), Some(Path::new("/d/f02")));
    }

    #[test]
    fn test_adjust_scroll_follows_cursor() {
        let mut state = loaded(20);
        state.cursor = 12;
        state.adjust_scroll(5);
        assert_eq!(state.scroll_offset, 8);

        state.cursor = 3;
        state.adjust_scroll(5);
        assert_eq!(state.scroll_offset, 3);
    }

    #[test]
    fn test_empty_panel_has_no_current_path() {
        let mut state = PanelState::new();
        state.move_down(1);
        assert_eq!(state.cursor, 0);
        assert!(state.current_path().is_none());
    }
}
