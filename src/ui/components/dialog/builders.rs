use super::{DialogKind, InputPurpose};
use std::path::PathBuf;

impl DialogKind {
    fn path_input(
        title: &str,
        prompt: &str,
        initial: String,
        purpose: InputPurpose,
        base_path: PathBuf,
    ) -> Self {
        let cursor_pos = initial.len();
        DialogKind::Input {
            title: title.to_string(),
            prompt: prompt.to_string(),
            value: initial,
            cursor_pos,
            selected_button: 0, // OK 기본 선택
            purpose,
            base_path,
            completion_candidates: Vec::new(),
            completion_index: None,
        }
    }

    /// 폴더 선택 입력 다이얼로그 생성
    pub fn select_folder_input(initial: impl Into<String>, base_path: PathBuf) -> Self {
        Self::path_input(
            "Select Folder",
            "Folder:",
            initial.into(),
            InputPurpose::SelectFolder,
            base_path,
        )
    }

    /// 파일 추가 입력 다이얼로그 생성
    pub fn add_files_input(base_path: PathBuf) -> Self {
        Self::path_input(
            "Add Files",
            "Files (space separated, quote paths with spaces):",
            String::new(),
            InputPurpose::AddFiles,
            base_path,
        )
    }

    /// 내보내기 경로 입력 다이얼로그 생성
    pub fn export_path_input(initial: impl Into<String>, base_path: PathBuf) -> Self {
        Self::path_input(
            "Export to Text File",
            "Output file:",
            initial.into(),
            InputPurpose::ExportPath,
            base_path,
        )
    }

    /// 확인 다이얼로그 생성
    pub fn confirm(title: impl Into<String>, message: impl Into<String>) -> Self {
        DialogKind::Confirm {
            title: title.into(),
            message: message.into(),
            selected_button: 1, // 덮어쓰기 확인은 Cancel 기본
        }
    }

    pub fn message(title: impl Into<String>, message: impl Into<String>) -> Self {
        DialogKind::Message {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        DialogKind::Warning {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        DialogKind::Error {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn help() -> Self {
        DialogKind::Help { scroll_offset: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_folder_input_creation() {
        let dialog = DialogKind::select_folder_input("/tmp/data", PathBuf::from("/tmp"));
        match dialog {
            DialogKind::Input {
                title,
                value,
                cursor_pos,
                selected_button,
                purpose,
                base_path,
                completion_candidates,
                completion_index,
                ..
            } => {
                assert_eq!(title, "Select Folder");
                assert_eq!(value, "/tmp/data");
                assert_eq!(cursor_pos, 9);
                assert_eq!(selected_button, 0);
                assert_eq!(purpose, InputPurpose::SelectFolder);
                assert_eq!(base_path, PathBuf::from("/tmp"));
                assert!(completion_candidates.is_empty());
                assert!(completion_index.is_none());
            }
            _ => panic!("Expected Input dialog"),
        }
    }

    #[test]
    fn test_add_files_input_starts_empty() {
        let dialog = DialogKind::add_files_input(PathBuf::from("."));
        match dialog {
            DialogKind::Input {
                value,
                cursor_pos,
                purpose,
                ..
            } => {
                assert!(value.is_empty());
                assert_eq!(cursor_pos, 0);
                assert_eq!(purpose, InputPurpose::AddFiles);
            }
            _ => panic!("Expected Input dialog"),
        }
    }

    #[test]
    fn test_export_path_input_title() {
        let dialog = DialogKind::export_path_input("/out/", PathBuf::from("/out"));
        assert_eq!(dialog.title(), "Export to Text File");
        assert!(dialog.is_input());
    }

    #[test]
    fn test_confirm_defaults_to_cancel() {
        match DialogKind::confirm("Overwrite", "Replace file?") {
            DialogKind::Confirm {
                selected_button, ..
            } => assert_eq!(selected_button, 1),
            _ => panic!("Expected Confirm dialog"),
        }
    }

    #[test]
    fn test_notice_kinds() {
        assert!(DialogKind::message("Success", "done").is_notice());
        assert!(DialogKind::warning("No Files", "none").is_notice());
        assert!(DialogKind::error("Error", "failed").is_notice());
        assert!(!DialogKind::help().is_notice());
        assert!(!DialogKind::confirm("a", "b").is_notice());
    }
}
