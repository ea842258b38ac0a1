use super::*;
use std::fs;
use tempfile::TempDir;

fn make_test_app(base: &Path) -> App {
    App::new_for_test(base)
}

/// a.txt ("hi"), b.bin (0xFF 0xFE), sub/ 를 가진 폴더
fn sample_folder() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "hi").unwrap();
    fs::write(temp.path().join("b.bin"), [0xFF, 0xFE]).unwrap();
    fs::create_dir(temp.path().join("sub")).unwrap();
    temp
}

fn dialog_title(app: &App) -> Option<&str> {
    app.dialog.as_ref().map(|d| d.title())
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.dialog_input_char(c);
    }
}

fn clear_input(app: &mut App) {
    app.dialog_input_end();
    while app
        .get_dialog_input_value()
        .is_some_and(|value| !value.is_empty())
    {
        app.dialog_input_backspace();
    }
}

// === 폴더 선택 ===

#[test]
fn test_load_folder_lists_files_preselected() {
    let temp = sample_folder();
    let mut app = make_test_app(temp.path());

    app.load_folder(temp.path().to_path_buf());

    let entries: Vec<_> = app.panel.candidates.iter().collect();
    assert_eq!(
        entries,
        vec![
            (temp.path().join("a.txt").as_path(), true),
            (temp.path().join("b.bin").as_path(), true),
        ]
    );
    assert_eq!(app.folder(), Some(temp.path()));
    assert_eq!(app.active_toast(), Some("Loaded 2 files"));
    assert!(app.dialog.is_none());
}

#[test]
fn test_load_folder_replaces_previous_candidates() {
    let first = sample_folder();
    let second = TempDir::new().unwrap();
    fs::write(second.path().join("only.md"), "# x").unwrap();
    let mut app = make_test_app(first.path());

    app.load_folder(first.path().to_path_buf());
    app.panel.cursor = 1;
    app.load_folder(second.path().to_path_buf());

    assert_eq!(app.panel.candidates.len(), 1);
    assert_eq!(app.panel.cursor, 0);
    assert!(app.panel.candidates.is_selected(&second.path().join("only.md")));
}

#[test]
fn test_load_folder_failure_keeps_state() {
    let temp = sample_folder();
    let mut app = make_test_app(temp.path());
    app.load_folder(temp.path().to_path_buf());
    let before = app.panel.candidates.clone();

    app.load_folder(temp.path().join("missing"));

    assert_eq!(app.panel.candidates, before);
    assert_eq!(app.folder(), Some(temp.path()));
    match &app.dialog {
        Some(DialogKind::Error { message, .. }) => {
            assert!(message.starts_with("Failed to list files:"), "{}", message);
        }
        other => panic!("Expected error dialog, got {:?}", other),
    }
}

#[test]
fn test_load_folder_on_file_is_error() {
    let temp = sample_folder();
    let mut app = make_test_app(temp.path());

    app.load_folder(temp.path().join("a.txt"));

    assert!(app.panel.candidates.is_empty());
    assert_eq!(dialog_title(&app), Some("Error"));
}

#[test]
fn test_select_folder_dialog_with_relative_input() {
    let temp = sample_folder();
    fs::write(temp.path().join("sub").join("inner.txt"), "x").unwrap();
    let mut app = make_test_app(temp.path());

    app.execute_action(Action::SelectFolder);
    assert_eq!(
        app.get_dialog_input_purpose(),
        Some(InputPurpose::SelectFolder)
    );
    assert_eq!(
        app.get_dialog_input_value(),
        Some(temp.path().display().to_string())
    );

    clear_input(&mut app);
    type_text(&mut app, "sub");
    app.confirm_dialog();

    assert!(app.dialog.is_none());
    assert_eq!(app.folder(), Some(temp.path().join("sub").as_path()));
    assert_eq!(app.panel.candidates.len(), 1);
}

#[test]
fn test_select_folder_empty_input_cancels() {
    let temp = sample_folder();
    let mut app = make_test_app(temp.path());

    app.start_select_folder();
    clear_input(&mut app);
    app.confirm_dialog();

    assert!(app.dialog.is_none());
    assert!(app.folder().is_none());
    assert!(app.toast_message.is_none());
}

#[test]
fn test_cancel_button_closes_without_loading() {
    let temp = sample_folder();
    let mut app = make_test_app(temp.path());

    app.start_select_folder();
    app.dialog_toggle_button();
    assert_eq!(app.get_dialog_selected_button(), Some(1));
    app.confirm_dialog();

    assert!(app.dialog.is_none());
    assert!(app.panel.candidates.is_empty());
}

#[test]
fn test_folder_completion_cycles_directories() {
    let temp = sample_folder();
    fs::create_dir(temp.path().join("src")).unwrap();
    let mut app = make_test_app(temp.path());

    app.start_select_folder();
    clear_input(&mut app);
    type_text(&mut app, "s");

    app.dialog_input_cycle_completion_next();
    assert_eq!(app.get_dialog_input_value(), Some("src/".to_string()));
    app.dialog_input_cycle_completion_next();
    assert_eq!(app.get_dialog_input_value(), Some("sub/".to_string()));
    app.dialog_input_cycle_completion_prev();
    assert_eq!(app.get_dialog_input_value(), Some("src/".to_string()));
}

// === 파일 추가 ===

#[test]
fn test_add_same_file_twice_keeps_one_entry() {
    let temp = sample_folder();
    let mut app = make_test_app(temp.path());
    let file = temp.path().join("a.txt");

    assert_eq!(app.add_files(vec![file.clone()]), 1);
    assert_eq!(app.add_files(vec![file.clone()]), 0);

    assert_eq!(app.panel.candidates.len(), 1);
    assert_eq!(app.panel.candidates.selected_count(), 1);
    assert_eq!(app.active_toast(), Some("Added 0 files"));
}

#[test]
fn test_add_files_appends_without_touching_existing() {
    let temp = sample_folder();
    let other = TempDir::new().unwrap();
    let extra = other.path().join("c.txt");
    fs::write(&extra, "c").unwrap();
    let mut app = make_test_app(temp.path());

    app.load_folder(temp.path().to_path_buf());
    app.execute_action(Action::ToggleRow); // a.txt 선택 해제
    app.add_files(vec![extra.clone(), temp.path().join("b.bin")]);

    let entries: Vec<_> = app.panel.candidates.iter().collect();
    assert_eq!(
        entries,
        vec![
            (temp.path().join("a.txt").as_path(), false),
            (temp.path().join("b.bin").as_path(), true),
            (extra.as_path(), true),
        ]
    );
}

#[test]
fn test_add_files_from_input_with_quotes() {
    let temp = sample_folder();
    fs::write(temp.path().join("with space.txt"), "s").unwrap();
    let mut app = make_test_app(temp.path());

    app.execute_action(Action::AddFiles);
    type_text(&mut app, "a.txt \"with space.txt\"");
    app.confirm_dialog();

    assert_eq!(app.panel.candidates.len(), 2);
    assert!(app
        .panel
        .candidates
        .contains(&temp.path().join("with space.txt")));
    assert!(app.dialog.is_none());
    assert_eq!(app.active_toast(), Some("Added 2 files"));
}

#[test]
fn test_add_files_reports_invalid_tokens_once() {
    let temp = sample_folder();
    let mut app = make_test_app(temp.path());

    app.start_add_files();
    type_text(&mut app, "a.txt missing.txt sub");
    app.confirm_dialog();

    assert_eq!(app.panel.candidates.len(), 1);
    match &app.dialog {
        Some(DialogKind::Warning { title, message }) => {
            assert_eq!(title, "Skipped Files");
            assert!(message.starts_with("2 paths skipped"), "{}", message);
            assert!(message.contains("missing.txt"));
            assert!(message.contains("sub"));
        }
        other => panic!("Expected warning dialog, got {:?}", other),
    }
}

#[test]
fn test_add_files_unbalanced_quotes_is_error() {
    let temp = sample_folder();
    let mut app = make_test_app(temp.path());

    app.start_add_files();
    type_text(&mut app, "\"a.txt");
    app.confirm_dialog();

    assert!(app.panel.candidates.is_empty());
    assert_eq!(dialog_title(&app), Some("Error"));
}

#[test]
fn test_add_files_completion_keeps_previous_tokens() {
    let temp = sample_folder();
    let mut app = make_test_app(temp.path());

    app.start_add_files();
    type_text(&mut app, "a.txt b");
    app.dialog_input_cycle_completion_next();

    assert_eq!(app.get_dialog_input_value(), Some("a.txt b.bin".to_string()));
}

#[test]
fn test_ctrl_w_drops_last_list_token() {
    let temp = sample_folder();
    let mut app = make_test_app(temp.path());

    app.start_add_files();
    type_text(&mut app, "a.txt sub/b.bin");
    app.dialog_input_delete_prev_word();
    assert_eq!(app.get_dialog_input_value(), Some("a.txt sub/".to_string()));
    app.dialog_input_delete_prev_word();
    assert_eq!(app.get_dialog_input_value(), Some("a.txt ".to_string()));

    app.confirm_dialog();
    assert_eq!(app.panel.candidates.len(), 1);
}

// === 선택 토글 ===

#[test]
fn test_toggle_twice_restores_selection() {
    let temp = sample_folder();
    let mut app = make_test_app(temp.path());
    app.load_folder(temp.path().to_path_buf());
    let before = app.panel.candidates.clone();

    app.toggle_current();
    assert_eq!(app.panel.candidates.selected_count(), 1);
    app.toggle_current();

    assert_eq!(app.panel.candidates, before);
}

#[test]
fn test_space_toggles_and_moves_down() {
    let temp = sample_folder();
    let mut app = make_test_app(temp.path());
    app.load_folder(temp.path().to_path_buf());

    app.execute_action(Action::ToggleAndMoveDown);

    assert_eq!(app.panel.cursor, 1);
    assert!(!app.panel.candidates.is_selected(&temp.path().join("a.txt")));
    assert!(app.panel.candidates.is_selected(&temp.path().join("b.bin")));
}

#[test]
fn test_select_all_and_deselect_all() {
    let temp = sample_folder();
    let mut app = make_test_app(temp.path());
    app.load_folder(temp.path().to_path_buf());

    app.execute_action(Action::DeselectAll);
    assert_eq!(app.panel.candidates.selected_count(), 0);
    assert_eq!(app.selected_size(), 0);

    app.execute_action(Action::SelectAll);
    assert_eq!(app.panel.candidates.selected_count(), 2);
    assert_eq!(app.selected_size(), 4);
}

#[test]
fn test_toggle_on_empty_list_is_noop() {
    let temp = TempDir::new().unwrap();
    let mut app = make_test_app(temp.path());

    app.execute_action(Action::ToggleRow);
    app.execute_action(Action::ToggleAndMoveDown);

    assert!(app.panel.candidates.is_empty());
    assert_eq!(app.panel.cursor, 0);
}

// === 내보내기 ===

#[test]
fn test_export_scenario_text_and_binary() {
    let temp = sample_folder();
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("out.txt");
    let mut app = make_test_app(temp.path());
    app.load_folder(temp.path().to_path_buf());

    let summary = app.export_to(&output).expect("export succeeds");

    let a = temp.path().join("a.txt");
    let b = temp.path().join("b.bin");
    let expected = format!(
        "\"a.txt\", \"{}\": \"hi\"\n\n\"b.bin\", \"{}\": \"//4=\"\n\n",
        a.display(),
        b.display()
    );
    assert_eq!(fs::read_to_string(&output).unwrap(), expected);
    assert_eq!(summary.records, 2);
    assert_eq!(summary.text, 1);
    assert_eq!(summary.base64, 1);

    match &app.dialog {
        Some(DialogKind::Message { title, message }) => {
            assert_eq!(title, "Success");
            assert_eq!(message, &format!("Output saved to {}", output.display()));
        }
        other => panic!("Expected success dialog, got {:?}", other),
    }
}

#[test]
fn test_export_follows_candidate_order_not_selection_order() {
    let temp = sample_folder();
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("order.txt");
    let mut app = make_test_app(temp.path());
    app.load_folder(temp.path().to_path_buf());

    // b를 먼저 해제/재선택해도 출력 순서는 a, b
    app.panel.cursor = 1;
    app.toggle_current();
    app.toggle_current();
    app.export_to(&output);

    let written = fs::read_to_string(&output).unwrap();
    let a_pos = written.find("\"a.txt\"").unwrap();
    let b_pos = written.find("\"b.bin\"").unwrap();
    assert!(a_pos < b_pos);
}

#[test]
fn test_export_with_empty_selection_warns_without_io() {
    let temp = sample_folder();
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("never.txt");
    let mut app = make_test_app(temp.path());
    app.load_folder(temp.path().to_path_buf());
    app.deselect_all();

    app.execute_action(Action::Export);
    match &app.dialog {
        Some(DialogKind::Warning { title, message }) => {
            assert_eq!(title, "No Files");
            assert_eq!(message, "Please select at least one file.");
        }
        other => panic!("Expected warning dialog, got {:?}", other),
    }

    app.close_dialog();
    assert!(app.export_to(&output).is_none());
    assert!(!output.exists());
}

#[test]
fn test_export_dialog_prefills_folder_and_adds_extension() {
    let temp = sample_folder();
    let mut app = make_test_app(temp.path());
    app.load_folder(temp.path().to_path_buf());

    app.execute_action(Action::Export);
    let initial = app.get_dialog_input_value().unwrap();
    assert!(initial.ends_with(std::path::MAIN_SEPARATOR));
    assert_eq!(
        app.get_dialog_input_purpose(),
        Some(InputPurpose::ExportPath)
    );

    type_text(&mut app, "bundle");
    app.confirm_dialog();

    let output = temp.path().join("bundle.txt");
    assert!(output.exists());
    assert_eq!(dialog_title(&app), Some("Success"));
}

#[test]
fn test_export_to_prefilled_folder_without_name_is_rejected() {
    let root = TempDir::new().unwrap();
    let proj = root.path().join("proj");
    fs::create_dir(&proj).unwrap();
    fs::write(proj.join("a.txt"), "hi").unwrap();
    let mut app = make_test_app(root.path());
    app.load_folder(proj.clone());

    // 미리 채워진 "<폴더>/" 그대로 확인
    app.start_export();
    app.confirm_dialog();

    match &app.dialog {
        Some(DialogKind::Error { message, .. }) => {
            assert!(message.ends_with("is a directory"), "{}", message);
        }
        other => panic!("Expected error dialog, got {:?}", other),
    }
    assert!(!root.path().join("proj.txt").exists());
    assert_eq!(fs::read_dir(&proj).unwrap().count(), 1);
}

#[test]
fn test_export_to_existing_directory_is_rejected() {
    let temp = sample_folder();
    let mut app = make_test_app(temp.path());
    app.load_folder(temp.path().to_path_buf());

    app.start_export();
    clear_input(&mut app);
    type_text(&mut app, "sub");
    app.confirm_dialog();

    assert_eq!(dialog_title(&app), Some("Error"));
    assert!(!temp.path().join("sub.txt").exists());
    assert_eq!(fs::read_dir(temp.path().join("sub")).unwrap().count(), 0);
}

#[test]
fn test_selected_size_uses_sizes_from_load() {
    let temp = sample_folder();
    let mut app = make_test_app(temp.path());
    app.load_folder(temp.path().to_path_buf());
    assert_eq!(app.selected_size(), 4);

    // 디스크 변경은 다시 불러오기 전까지 반영되지 않음
    fs::write(temp.path().join("a.txt"), "hello world").unwrap();
    assert_eq!(app.selected_size(), 4);

    app.execute_action(Action::ToggleRow);
    assert_eq!(app.selected_size(), 2);

    app.load_folder(temp.path().to_path_buf());
    assert_eq!(app.selected_size(), 13);
}

#[test]
fn test_export_existing_file_asks_before_overwrite() {
    let temp = sample_folder();
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("existing.txt");
    fs::write(&output, "old").unwrap();
    let mut app = make_test_app(temp.path());
    app.load_folder(temp.path().to_path_buf());

    app.start_export();
    clear_input(&mut app);
    type_text(&mut app, &output.display().to_string());
    app.confirm_dialog();

    assert!(matches!(app.dialog, Some(DialogKind::Confirm { .. })));
    // 기본 선택은 Cancel
    app.confirm_dialog();
    assert!(app.dialog.is_none());
    assert_eq!(fs::read_to_string(&output).unwrap(), "old");

    app.start_export();
    clear_input(&mut app);
    type_text(&mut app, &output.display().to_string());
    app.confirm_dialog();
    app.dialog_toggle_button();
    app.confirm_dialog();

    assert_eq!(dialog_title(&app), Some("Success"));
    assert!(fs::read_to_string(&output).unwrap().starts_with("\"a.txt\""));
}

#[test]
fn test_export_write_failure_reports_error() {
    let temp = sample_folder();
    let mut app = make_test_app(temp.path());
    app.load_folder(temp.path().to_path_buf());

    let output = temp.path().join("no_such_dir").join("out.txt");
    assert!(app.export_to(&output).is_none());

    match &app.dialog {
        Some(DialogKind::Error { message, .. }) => {
            assert!(
                message.starts_with("Failed to generate output:"),
                "{}",
                message
            );
        }
        other => panic!("Expected error dialog, got {:?}", other),
    }
}

#[test]
fn test_export_cancel_writes_nothing() {
    let temp = sample_folder();
    let mut app = make_test_app(temp.path());
    app.load_folder(temp.path().to_path_buf());

    app.start_export();
    app.close_dialog();

    let written: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .flatten()
        .map(|e| e.file_name())
        .collect();
    assert_eq!(written.len(), 3);
}

// === 탐색 / 기타 ===

#[test]
fn test_cursor_navigation_and_scroll() {
    let temp = TempDir::new().unwrap();
    for i in 0..30 {
        fs::write(temp.path().join(format!("f{:02}.txt", i)), "x").unwrap();
    }
    let mut app = make_test_app(temp.path());
    app.layout.update(ratatui::layout::Rect::new(0, 0, 80, 14)); // 목록 높이 9
    app.load_folder(temp.path().to_path_buf());

    app.execute_action(Action::GoToBottom);
    assert_eq!(app.panel.cursor, 29);
    assert_eq!(app.panel.scroll_offset, 21);

    app.execute_action(Action::PageUp);
    assert_eq!(app.panel.cursor, 25);

    app.execute_action(Action::GoToTop);
    assert_eq!(app.panel.cursor, 0);
    assert_eq!(app.panel.scroll_offset, 0);

    app.execute_action(Action::MoveUp);
    assert_eq!(app.panel.cursor, 0);
    app.execute_action(Action::PageDown);
    assert_eq!(app.panel.cursor, 4);
}

#[test]
fn test_help_dialog_scroll_and_close() {
    let temp = TempDir::new().unwrap();
    let mut app = make_test_app(temp.path());

    app.execute_action(Action::ShowHelp);
    app.dialog_help_scroll_up();
    app.dialog_help_scroll_down();
    assert_eq!(app.dialog, Some(DialogKind::Help { scroll_offset: 1 }));

    app.confirm_dialog();
    assert!(app.dialog.is_none());
}

#[test]
fn test_cycle_theme_sets_toast() {
    let temp = TempDir::new().unwrap();
    let mut app = make_test_app(temp.path());
    let before = app.theme_manager.current_name().to_string();

    app.execute_action(Action::CycleTheme);

    assert_ne!(app.theme_manager.current_name(), before);
    assert!(app.active_toast().unwrap().starts_with("Theme: "));
}

#[test]
fn test_quit_action() {
    let temp = TempDir::new().unwrap();
    let mut app = make_test_app(temp.path());
    assert!(!app.should_quit());
    app.execute_action(Action::Quit);
    assert!(app.should_quit());
}
