use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// 후보 파일 (목록 조회 시점의 크기 포함)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub size: u64,
}

impl CandidateFile {
    pub fn new(path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }
}

/// 후보 목록 상태 전이 이벤트
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// 폴더 목록으로 전체 교체 (전부 선택)
    FolderListed(Vec<CandidateFile>),
    /// 파일 추가 (중복 제외, 새 항목만 선택)
    FilesPicked(Vec<CandidateFile>),
    /// 해당 행 선택 반전
    Toggled(usize),
    /// 전체 선택
    SelectAll,
    /// 전체 선택 해제
    DeselectAll,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    file: CandidateFile,
    selected: bool,
}

/// 내보내기 후보 목록 + 선택 상태
///
/// `index`는 경로 → `entries` 위치이며 `entries`에는 중복이 없다.
/// `selected_count`/`selected_size`는 선택된 항목의 개수와 크기 합계와 항상 같다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateList {
    entries: Vec<Entry>,
    index: HashMap<PathBuf, usize>,
    selected_count: usize,
    selected_size: u64,
}

impl CandidateList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.entries.get(index).map(|entry| entry.file.path.as_path())
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.index.contains_key(path)
    }

    pub fn is_selected(&self, path: &Path) -> bool {
        self.index
            .get(path)
            .is_some_and(|&i| self.entries[i].selected)
    }

    pub fn selected_count(&self) -> usize {
        self.selected_count
    }

    /// 선택된 파일 크기 합계 (목록 조회 시점 기준)
    pub fn selected_size(&self) -> u64 {
        self.selected_size
    }

    /// 선택된 경로 (후보 목록 순서)
    pub fn selected_paths(&self) -> Vec<&Path> {
        self.entries
            .iter()
            .filter(|entry| entry.selected)
            .map(|entry| entry.file.path.as_path())
            .collect()
    }

    /// (경로, 선택 여부) 순회
    pub fn iter(&self) -> impl Iterator<Item = (&Path, bool)> + '_ {
        self.entries
            .iter()
            .map(|entry| (entry.file.path.as_path(), entry.selected))
    }

    /// 패널 표시용 (파일, 선택 여부) 순회
    pub fn rows(&self) -> impl Iterator<Item = (&CandidateFile, bool)> + '_ {
        self.entries.iter().map(|entry| (&entry.file, entry.selected))
    }

    /// 새 항목을 선택 상태로 추가 (이미 있으면 무시)
    fn push_selected(&mut self, file: CandidateFile) {
        if self.index.contains_key(&file.path) {
            return;
        }
        self.index.insert(file.path.clone(), self.entries.len());
        self.selected_count += 1;
        self.selected_size += file.size;
        self.entries.push(Entry {
            file,
            selected: true,
        });
    }

    fn set_all(&mut self, selected: bool) {
        for entry in &mut self.entries {
            entry.selected = selected;
        }
        if selected {
            self.selected_count = self.entries.len();
            self.selected_size = self.entries.iter().map(|entry| entry.file.size).sum();
        } else {
            self.selected_count = 0;
            self.selected_size = 0;
        }
    }
}

/// 단일 상태 전이 함수
///
/// 이벤트를 적용한 새 상태를 반환한다. 범위를 벗어난 토글은 무시한다.
pub fn reduce(mut state: CandidateList, event: SelectionEvent) -> CandidateList {
    match event {
        SelectionEvent::FolderListed(files) => {
            let mut next = CandidateList::new();
            for file in files {
                next.push_selected(file);
            }
            next
        }
        SelectionEvent::FilesPicked(files) => {
            for file in files {
                state.push_selected(file);
            }
            state
        }
        SelectionEvent::Toggled(index) => {
            if let Some(entry) = state.entries.get_mut(index) {
                entry.selected = !entry.selected;
                if entry.selected {
                    state.selected_count += 1;
                    state.selected_size += entry.file.size;
                } else {
                    state.selected_count -= 1;
                    state.selected_size -= entry.file.size;
                }
            }
            state
        }
        SelectionEvent::SelectAll => {
            state.set_all(true);
            state
        }
        SelectionEvent::DeselectAll => {
            state.set_all(false);
            state
        }
    }
}
