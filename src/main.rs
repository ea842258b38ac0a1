mod app;
mod core;
mod models;
mod system;
mod ui;
mod utils;

use app::App;
use core::actions::{find_action, generate_command_bar_items};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Terminal,
};
use std::io;
use std::time::Duration;
use system::{logging, Settings};
use ui::{CommandBar, Dialog, DialogKind, LayoutMode, Panel, StatusBar, WarningScreen};
use utils::{formatter::format_file_size, path_display::display_path};

fn main() -> anyhow::Result<()> {
    // 설정 오류는 로그에 남기고 기본값으로 계속 진행
    let (settings, settings_error) = match Settings::load() {
        Ok(settings) => (settings, None),
        Err(err) => (Settings::default(), Some(err)),
    };
    if let Ok(path) = logging::init(&settings.log_level) {
        tracing::info!(log = %path.display(), "conglomerate started");
    }
    if let Some(err) = settings_error {
        tracing::warn!("using default settings: {:#}", err);
    }

    let mut app = App::new(settings);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(err.into());
    }

    let backend = CrosstermBackend::new(stdout);
    let res = match Terminal::new(backend) {
        Ok(mut terminal) => {
            let res = run_app(&mut terminal, &mut app);
            let _ = terminal.show_cursor();
            res
        }
        Err(err) => Err(err),
    };

    // Restore terminal
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);

    if let Err(err) = &res {
        tracing::error!("event loop failed: {}", err);
    }
    tracing::info!("conglomerate exited");
    res?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| {
            let size = f.area();

            // 레이아웃 업데이트
            app.layout.update(size);
            app.panel.adjust_scroll(app.layout.list_height());

            match app.layout.mode() {
                LayoutMode::TooSmall => {
                    let (width, height) = app.layout.terminal_size();
                    let warning = WarningScreen::new()
                        .current_size(width, height)
                        .theme(app.theme_manager.current());
                    f.render_widget(warning, size);
                }
                LayoutMode::Normal => render_main_ui(f, app),
            }
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Windows 등에서 Release 이벤트 중복 방지
                if key.kind == KeyEventKind::Press {
                    if app.is_dialog_active() {
                        handle_dialog_keys(app, key.modifiers, key.code);
                    } else {
                        handle_normal_keys(app, key.modifiers, key.code);
                    }
                }
            }
        }

        app.expire_toast();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// 일반 모드 키 처리 (액션 레지스트리 기반)
fn handle_normal_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    if let Some(action) = find_action(modifiers, code) {
        app.execute_action(action);
    }
}

/// 다이얼로그 모드 키 처리
fn handle_dialog_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    let Some(kind) = &app.dialog else {
        return;
    };

    match kind {
        DialogKind::Input { .. } => handle_input_dialog_keys(app, modifiers, code),
        DialogKind::Confirm { .. } => handle_confirm_dialog_keys(app, modifiers, code),
        DialogKind::Message { .. } | DialogKind::Warning { .. } | DialogKind::Error { .. } => {
            handle_message_dialog_keys(app, code)
        }
        DialogKind::Help { .. } => handle_help_dialog_keys(app, code),
    }
}

/// 입력 다이얼로그 키 처리
fn handle_input_dialog_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match (modifiers, code) {
        // 확인 (선택된 버튼에 따라 동작)
        (_, KeyCode::Enter) => app.confirm_dialog(),
        (_, KeyCode::Esc) => app.close_dialog(),
        // 자동완성 순환
        (KeyModifiers::NONE, KeyCode::Tab) => app.dialog_input_cycle_completion_next(),
        (_, KeyCode::BackTab) => app.dialog_input_cycle_completion_prev(),
        // OK/Cancel 전환
        (_, KeyCode::Up) | (_, KeyCode::Down) => app.dialog_toggle_button(),
        (KeyModifiers::CONTROL, KeyCode::Char('w')) => app.dialog_input_delete_prev_word(),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => app.dialog_input_char(c),
        (_, KeyCode::Backspace) => app.dialog_input_backspace(),
        (_, KeyCode::Delete) => app.dialog_input_delete(),
        (_, KeyCode::Left) => app.dialog_input_left(),
        (_, KeyCode::Right) => app.dialog_input_right(),
        (_, KeyCode::Home) => app.dialog_input_home(),
        (_, KeyCode::End) => app.dialog_input_end(),
        _ => {}
    }
}

/// 확인 다이얼로그 키 처리
fn handle_confirm_dialog_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match (modifiers, code) {
        (KeyModifiers::NONE, KeyCode::Tab)
        | (_, KeyCode::BackTab)
        | (_, KeyCode::Left)
        | (_, KeyCode::Right) => app.dialog_toggle_button(),
        (_, KeyCode::Enter) => app.confirm_dialog(),
        (_, KeyCode::Esc) => app.close_dialog(),
        _ => {}
    }
}

/// 메시지/경고/에러 다이얼로그 키 처리
fn handle_message_dialog_keys(app: &mut App, code: KeyCode) {
    if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        app.close_dialog();
    }
}

/// 도움말 다이얼로그 키 처리
fn handle_help_dialog_keys(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => app.close_dialog(),
        KeyCode::Char('j') | KeyCode::Down => app.dialog_help_scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.dialog_help_scroll_up(),
        _ => {}
    }
}

/// 헤더: 앱 이름 + 선택 폴더
fn render_header(f: &mut ratatui::Frame<'_>, app: &App, theme: &ui::Theme, area: Rect) {
    let name = " Conglomerate ";
    let folder = match app.folder() {
        Some(folder) => {
            display_path(folder, (area.width as usize).saturating_sub(name.len() + 1))
        }
        None => "No folder selected".to_string(),
    };
    let line = Line::from(vec![
        Span::styled(
            name,
            Style::default()
                .fg(theme.accent.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(folder, Style::default().fg(theme.header_fg.to_color())),
    ]);
    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(theme.bg_primary.to_color())),
        area,
    );
}

/// 상태바 데이터 수집 + 렌더링
fn render_status_bar(f: &mut ratatui::Frame<'_>, app: &App, theme: &ui::Theme, area: Rect) {
    let candidates = &app.panel.candidates;
    let selected_size = format_file_size(app.selected_size());
    let status_bar = StatusBar::new()
        .candidate_count(candidates.len())
        .selected_count(candidates.selected_count())
        .selected_size(&selected_size)
        .right_text(app.active_toast().or(Some(app.theme_manager.current_name())))
        .theme(theme);
    f.render_widget(status_bar, area);
}

/// 메인 UI 렌더링
fn render_main_ui(f: &mut ratatui::Frame<'_>, app: &App) {
    let areas = app.layout.areas();
    let theme = app.theme_manager.current();

    render_header(f, app, theme, areas.header);

    let panel = Panel::new()
        .candidates(&app.panel.candidates)
        .cursor(app.panel.cursor)
        .scroll_offset(app.panel.scroll_offset)
        .theme(theme);
    f.render_widget(panel, areas.panel);

    render_status_bar(f, app, theme, areas.status_bar);

    let has_selection = app.panel.candidates.selected_count() > 0;
    let command_bar = CommandBar::new()
        .commands(generate_command_bar_items(has_selection))
        .theme(theme);
    f.render_widget(command_bar, areas.command_bar);

    if let Some(dialog_kind) = &app.dialog {
        let dialog = Dialog::new(dialog_kind).theme(theme);
        f.render_widget(dialog, f.area());
    }
}
