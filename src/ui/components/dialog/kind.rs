use std::path::PathBuf;

/// 입력 다이얼로그 목적
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPurpose {
    /// 폴더 선택 (디렉토리만 자동완성)
    SelectFolder,
    /// 파일 추가 (공백 구분 경로 목록)
    AddFiles,
    /// 내보내기 대상 파일 경로
    ExportPath,
}

/// 다이얼로그 종류
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogKind {
    /// 경로 입력 다이얼로그
    Input {
        title: String,
        prompt: String,
        value: String,
        cursor_pos: usize,
        selected_button: usize, // 0: OK, 1: Cancel
        purpose: InputPurpose,
        base_path: PathBuf,
        completion_candidates: Vec<String>,
        completion_index: Option<usize>,
    },
    /// 확인 다이얼로그 (OK/Cancel)
    Confirm {
        title: String,
        message: String,
        selected_button: usize, // 0: OK, 1: Cancel
    },
    /// 정보 메시지
    Message { title: String, message: String },
    /// 경고 메시지
    Warning { title: String, message: String },
    /// 에러 메시지
    Error { title: String, message: String },
    /// 단축키 도움말
    Help { scroll_offset: usize },
}

impl DialogKind {
    pub fn is_input(&self) -> bool {
        matches!(self, DialogKind::Input { .. })
    }

    /// OK 버튼 하나만 있는 알림형 다이얼로그
    pub fn is_notice(&self) -> bool {
        matches!(
            self,
            DialogKind::Message { .. } | DialogKind::Warning { .. } | DialogKind::Error { .. }
        )
    }

    pub fn title(&self) -> &str {
        match self {
            DialogKind::Input { title, .. }
            | DialogKind::Confirm { title, .. }
            | DialogKind::Message { title, .. }
            | DialogKind::Warning { title, .. }
            | DialogKind::Error { title, .. } => title,
            DialogKind::Help { .. } => "Keyboard Shortcuts",
        }
    }
}
