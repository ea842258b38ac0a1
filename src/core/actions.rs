//! 액션 레지스트리
//!
//! 키 바인딩, 커맨드바 항목, 도움말 내용이 모두 이 모듈을 참조합니다.

use crate::ui::components::command_bar::CommandItem;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// 사용자 액션
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,
    PageUp,
    PageDown,
    // Files
    SelectFolder,
    AddFiles,
    Export,
    // Selection
    ToggleRow,
    ToggleAndMoveDown,
    SelectAll,
    DeselectAll,
    // System
    CycleTheme,
    ShowHelp,
    Quit,
}

/// 액션 카테고리
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Navigation,
    Files,
    Selection,
    System,
}

impl ActionCategory {
    pub fn title(self) -> &'static str {
        match self {
            ActionCategory::Navigation => "Navigation",
            ActionCategory::Files => "Files",
            ActionCategory::Selection => "Selection",
            ActionCategory::System => "System",
        }
    }
}

/// 커맨드바 표시 정보
pub struct CommandBarEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub priority: u8,
    /// 선택된 파일이 있어야 활성화
    pub needs_selection: bool,
}

/// 액션 정의
pub struct ActionDef {
    pub action: Action,
    pub id: &'static str,
    pub label: &'static str,
    pub category: ActionCategory,
    pub shortcut_display: Option<&'static str>,
    pub command_bar: Option<CommandBarEntry>,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

pub static ACTION_DEFS: &[ActionDef] = &[
    // Navigation
    ActionDef {
        action: Action::MoveUp,
        id: "move_up",
        label: "Move up / down",
        category: ActionCategory::Navigation,
        shortcut_display: Some("j / k"),
        command_bar: Some(CommandBarEntry {
            key: "j/k",
            label: "Up/Dn",
            priority: 50,
            needs_selection: false,
        }),
    },
    ActionDef {
        action: Action::MoveDown,
        id: "move_down",
        label: "Move down",
        category: ActionCategory::Navigation,
        shortcut_display: None,
        command_bar: None,
    },
    ActionDef {
        action: Action::GoToTop,
        id: "go_top",
        label: "Top",
        category: ActionCategory::Navigation,
        shortcut_display: Some("Home"),
        command_bar: None,
    },
    ActionDef {
        action: Action::GoToBottom,
        id: "go_bottom",
        label: "Bottom",
        category: ActionCategory::Navigation,
        shortcut_display: Some("G / End"),
        command_bar: None,
    },
    ActionDef {
        action: Action::PageUp,
        id: "page_up",
        label: "Half page up",
        category: ActionCategory::Navigation,
        shortcut_display: Some("^U / PgUp"),
        command_bar: None,
    },
    ActionDef {
        action: Action::PageDown,
        id: "page_down",
        label: "Half page down",
        category: ActionCategory::Navigation,
        shortcut_display: Some("^D / PgDn"),
        command_bar: None,
    },
    // Files
    ActionDef {
        action: Action::SelectFolder,
        id: "select_folder",
        label: "Select folder",
        category: ActionCategory::Files,
        shortcut_display: Some("o"),
        command_bar: Some(CommandBarEntry {
            key: "o",
            label: "Folder",
            priority: 10,
            needs_selection: false,
        }),
    },
    ActionDef {
        action: Action::AddFiles,
        id: "add_files",
        label: "Add files",
        category: ActionCategory::Files,
        shortcut_display: Some("a"),
        command_bar: Some(CommandBarEntry {
            key: "a",
            label: "Add",
            priority: 11,
            needs_selection: false,
        }),
    },
    ActionDef {
        action: Action::Export,
        id: "export",
        label: "Export to text file",
        category: ActionCategory::Files,
        shortcut_display: Some("e"),
        command_bar: Some(CommandBarEntry {
            key: "e",
            label: "Export",
            priority: 12,
            needs_selection: true,
        }),
    },
    // Selection
    ActionDef {
        action: Action::ToggleRow,
        id: "toggle_row",
        label: "Toggle file",
        category: ActionCategory::Selection,
        shortcut_display: Some("Enter"),
        command_bar: None,
    },
    ActionDef {
        action: Action::ToggleAndMoveDown,
        id: "toggle_move_down",
        label: "Toggle and move down",
        category: ActionCategory::Selection,
        shortcut_display: Some("Space"),
        command_bar: Some(CommandBarEntry {
            key: "Spc",
            label: "Toggle",
            priority: 20,
            needs_selection: false,
        }),
    },
    ActionDef {
        action: Action::SelectAll,
        id: "select_all",
        label: "Select all",
        category: ActionCategory::Selection,
        shortcut_display: Some("^A"),
        command_bar: Some(CommandBarEntry {
            key: "^A",
            label: "All",
            priority: 21,
            needs_selection: false,
        }),
    },
    ActionDef {
        action: Action::DeselectAll,
        id: "deselect_all",
        label: "Deselect all",
        category: ActionCategory::Selection,
        shortcut_display: Some("u"),
        command_bar: Some(CommandBarEntry {
            key: "u",
            label: "None",
            priority: 22,
            needs_selection: false,
        }),
    },
    // System
    ActionDef {
        action: Action::CycleTheme,
        id: "cycle_theme",
        label: "Cycle theme",
        category: ActionCategory::System,
        shortcut_display: Some("T"),
        command_bar: None,
    },
    ActionDef {
        action: Action::ShowHelp,
        id: "help",
        label: "Help",
        category: ActionCategory::System,
        shortcut_display: Some("?"),
        command_bar: Some(CommandBarEntry {
            key: "?",
            label: "Help",
            priority: 90,
            needs_selection: false,
        }),
    },
    ActionDef {
        action: Action::Quit,
        id: "quit",
        label: "Quit",
        category: ActionCategory::System,
        shortcut_display: Some("q / ^C"),
        command_bar: Some(CommandBarEntry {
            key: "q",
            label: "Quit",
            priority: 99,
            needs_selection: false,
        }),
    },
];

fn build_key_bindings() -> Vec<KeyBinding> {
    let bind = |code, modifiers, action| KeyBinding {
        code,
        modifiers,
        action,
    };
    let none = Some(KeyModifiers::NONE);
    let ctrl = Some(KeyModifiers::CONTROL);

    vec![
        // 종료
        bind(KeyCode::Char('q'), none, Action::Quit),
        bind(KeyCode::Char('c'), ctrl, Action::Quit),
        // 탐색
        bind(KeyCode::Char('j'), none, Action::MoveDown),
        bind(KeyCode::Down, None, Action::MoveDown),
        bind(KeyCode::Char('k'), none, Action::MoveUp),
        bind(KeyCode::Up, None, Action::MoveUp),
        bind(KeyCode::Home, None, Action::GoToTop),
        bind(KeyCode::End, None, Action::GoToBottom),
        // Shift 조합 여부는 터미널마다 다름
        bind(KeyCode::Char('G'), None, Action::GoToBottom),
        bind(KeyCode::PageUp, None, Action::PageUp),
        bind(KeyCode::PageDown, None, Action::PageDown),
        bind(KeyCode::Char('u'), ctrl, Action::PageUp),
        bind(KeyCode::Char('d'), ctrl, Action::PageDown),
        // 파일
        bind(KeyCode::Char('o'), none, Action::SelectFolder),
        bind(KeyCode::Char('a'), none, Action::AddFiles),
        bind(KeyCode::Char('e'), none, Action::Export),
        // 선택
        bind(KeyCode::Enter, none, Action::ToggleRow),
        bind(KeyCode::Char(' '), none, Action::ToggleAndMoveDown),
        bind(KeyCode::Char('a'), ctrl, Action::SelectAll),
        bind(KeyCode::Char('u'), none, Action::DeselectAll),
        // 시스템
        bind(KeyCode::Char('T'), None, Action::CycleTheme),
        bind(KeyCode::Char('?'), None, Action::ShowHelp),
    ]
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);

/// 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// 키 입력으로 액션 조회
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    key_bindings()
        .iter()
        .find(|binding| {
            binding.code == code
                && match binding.modifiers {
                    None => true,
                    Some(required) => modifiers == required,
                }
        })
        .map(|binding| binding.action)
}

impl Action {
    /// 로그용 식별자
    pub fn id(self) -> &'static str {
        ACTION_DEFS
            .iter()
            .find(|d| d.action == self)
            .map(|d| d.id)
            .unwrap_or("unknown")
    }
}

/// 커맨드바 항목 생성 (priority 순)
///
/// 선택이 필요한 항목은 `has_selection`이 false면 비활성으로 표시된다.
pub fn generate_command_bar_items(has_selection: bool) -> Vec<CommandItem> {
    let mut entries: Vec<&CommandBarEntry> = ACTION_DEFS
        .iter()
        .filter_map(|def| def.command_bar.as_ref())
        .collect();

    entries.sort_by_key(|cb| cb.priority);

    entries
        .into_iter()
        .map(|cb| {
            CommandItem::new(cb.key, cb.label).enabled(!cb.needs_selection || has_selection)
        })
        .collect()
}

/// 도움말 다이얼로그용 엔트리
///
/// 반환: (카테고리명, Vec<(단축키, 설명)>)
pub fn generate_help_entries() -> Vec<(&'static str, Vec<(&'static str, &'static str)>)> {
    [
        ActionCategory::Navigation,
        ActionCategory::Files,
        ActionCategory::Selection,
        ActionCategory::System,
    ]
    .iter()
    .map(|cat| {
        let items = ACTION_DEFS
            .iter()
            .filter(|d| d.category == *cat)
            .filter_map(|d| d.shortcut_display.map(|key| (key, d.label)))
            .collect::<Vec<_>>();
        (cat.title(), items)
    })
    .filter(|(_, items)| !items.is_empty())
    .collect()
}
