use super::{DialogKind, InputPurpose};
use crate::core::actions::generate_help_entries;
use crate::ui::Theme;
use crate::utils::path_display;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 다이얼로그 내부 좌우 패딩 (border 안쪽 여백)
const DIALOG_H_PADDING: u16 = 2;
/// 다이얼로그 내부 상단 패딩 (border 아래 여백)
const DIALOG_V_PADDING: u16 = 1;
/// 도움말 키 컬럼 폭
const HELP_KEY_COL_WIDTH: u16 = 16;

/// 도움말 전체 행 수 (카테고리 헤더 + 항목 + 구분 빈 줄)
pub fn help_row_count() -> usize {
    let entries = generate_help_entries();
    let rows: usize = entries.iter().map(|(_, items)| items.len() + 2).sum();
    rows.saturating_sub(1)
}

pub struct Dialog<'a> {
    kind: &'a DialogKind,
    bg_color: Color,
    fg_color: Color,
    border_color: Color,
    title_color: Color,
    button_bg: Color,
    button_fg: Color,
    button_selected_bg: Color,
    button_selected_fg: Color,
    input_bg: Color,
    warning_color: Color,
    error_color: Color,
    success_color: Color,
    muted_color: Color,
}

impl<'a> Dialog<'a> {
    pub fn new(kind: &'a DialogKind) -> Self {
        Self {
            kind,
            bg_color: Color::Rgb(45, 45, 48),
            fg_color: Color::Rgb(212, 212, 212),
            border_color: Color::Rgb(0, 120, 212),
            title_color: Color::Rgb(0, 120, 212),
            button_bg: Color::Rgb(60, 60, 60),
            button_fg: Color::Rgb(212, 212, 212),
            button_selected_bg: Color::Rgb(0, 120, 212),
            button_selected_fg: Color::White,
            input_bg: Color::Rgb(30, 30, 30),
            warning_color: Color::Rgb(255, 165, 0),
            error_color: Color::Rgb(244, 71, 71),
            success_color: Color::Rgb(100, 180, 100),
            muted_color: Color::Rgb(128, 128, 128),
        }
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.dialog_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.border_color = theme.dialog_border.to_color();
        self.title_color = theme.accent.to_color();
        self.button_bg = theme.command_bar_bg.to_color();
        self.button_fg = theme.fg_primary.to_color();
        self.button_selected_bg = theme.cursor_bg.to_color();
        self.button_selected_fg = theme.cursor_fg.to_color();
        self.input_bg = theme.bg_primary.to_color();
        self.warning_color = theme.warning.to_color();
        self.error_color = theme.error.to_color();
        self.success_color = theme.success.to_color();
        self.muted_color = theme.row_normal.to_color();
        self
    }

    /// 다이얼로그 영역 계산 (화면 중앙, 반응형)
    fn calculate_area(&self, screen: Rect) -> Rect {
        let sw = screen.width;
        let sh = screen.height;

        let (width, height) = match self.kind {
            DialogKind::Input { .. } => {
                let w = ((sw as f32 * 0.72) as u16).clamp(56, 110);
                (w, 12u16)
            }
            DialogKind::Confirm { .. } => (50u16.min(sw.saturating_sub(4)).max(30), 8u16),
            DialogKind::Message { message, .. }
            | DialogKind::Warning { message, .. }
            | DialogKind::Error { message, .. } => {
                let w = 60u16.min(sw.saturating_sub(4)).max(30);
                // 긴 경로가 줄바꿈되는 만큼 높이 확보
                let inner_w = w.saturating_sub(DIALOG_H_PADDING * 2).max(1) as usize;
                let lines: usize = message
                    .lines()
                    .map(|line| line.width().div_ceil(inner_w).max(1))
                    .sum::<usize>()
                    .max(1);
                let h = (5 + lines as u16).min(sh.saturating_sub(4)).max(6);
                (w, h)
            }
            DialogKind::Help { .. } => {
                let w = 60u16.min(sw.saturating_sub(4)).max(40);
                let h = sh.saturating_sub(6).max(15);
                (w, h)
            }
        };

        let width = width.min(sw.saturating_sub(4));
        let height = height.min(sh.saturating_sub(4));

        Rect {
            x: screen.x + (sw.saturating_sub(width)) / 2,
            y: screen.y + (sh.saturating_sub(height)) / 2,
            width,
            height,
        }
    }

    fn render_frame(&self, buf: &mut Buffer, area: Rect, title: &str, accent: Color) -> Rect {
        let block = Block::default()
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(self.bg_color));
        block.render(area, buf);

        Rect {
            x: area.x + DIALOG_H_PADDING,
            y: area.y + DIALOG_V_PADDING,
            width: area.width.saturating_sub(DIALOG_H_PADDING * 2),
            height: area.height.saturating_sub(DIALOG_V_PADDING * 2),
        }
    }

    /// 버튼 렌더링 헬퍼
    fn render_button(
        &self,
        buf: &mut Buffer,
        x: u16,
        y: u16,
        label: &str,
        is_selected: bool,
    ) -> u16 {
        let (bg, fg) = if is_selected {
            (self.button_selected_bg, self.button_selected_fg)
        } else {
            (self.button_bg, self.button_fg)
        };

        let padded_label = format!(" {} ", label);
        let width = padded_label.width() as u16;
        let style = Style::default().fg(fg).bg(bg);
        buf.set_string(x, y, &padded_label, style);

        // wide character continuation cell 배경 보정
        for i in 0..width {
            if let Some(cell) = buf.cell_mut((x + i, y)) {
                cell.set_bg(bg);
            }
        }

        width
    }

    /// OK/Cancel 버튼 쌍 (x 기준 왼쪽 정렬)
    fn render_ok_cancel(&self, buf: &mut Buffer, x: u16, y: u16, selected_button: usize) {
        let ok_width = self.render_button(buf, x, y, "OK", selected_button == 0);
        self.render_button(buf, x + ok_width + 2, y, "Cancel", selected_button == 1);
    }

    /// 입력 필드 한 줄 렌더링 (커서가 보이도록 가로 스크롤)
    fn render_input_field(
        &self,
        buf: &mut Buffer,
        x: u16,
        y: u16,
        width: u16,
        value: &str,
        cursor_pos: usize,
    ) {
        for cx in x..x + width {
            if let Some(cell) = buf.cell_mut((cx, y)) {
                cell.set_bg(self.input_bg);
            }
        }

        // cursor_pos는 바이트 인덱스, 표시는 display width 기준
        let max_display = (width as usize).saturating_sub(2).max(1);
        let cursor_col: usize = value[..cursor_pos.min(value.len())]
            .chars()
            .map(|c| c.width().unwrap_or(0))
            .sum();

        let (display_value, cursor_display_col) = if cursor_col < max_display {
            (value, cursor_col)
        } else {
            let target_start = cursor_col - (max_display - 1);
            let mut start_byte = value.len();
            let mut width_sum = 0;
            for (i, c) in value.char_indices() {
                if width_sum >= target_start {
                    start_byte = i;
                    break;
                }
                width_sum += c.width().unwrap_or(0);
            }
            (&value[start_byte..], cursor_col - width_sum)
        };

        let value_style = Style::default().fg(self.fg_color).bg(self.input_bg);
        let display_value = path_display::truncate_end(display_value, max_display);
        buf.set_string(x + 1, y, display_value, value_style);

        let cursor_x = x + 1 + cursor_display_col as u16;
        if cursor_x < x + width.saturating_sub(1) {
            if let Some(cell) = buf.cell_mut((cursor_x, y)) {
                if cursor_pos < value.len() {
                    cell.set_style(Style::default().fg(self.input_bg).bg(self.fg_color));
                } else {
                    cell.set_char('▏');
                    cell.set_style(Style::default().fg(self.fg_color).bg(self.input_bg));
                }
            }
        }
    }

    /// 입력 다이얼로그 렌더링
    #[allow(clippy::too_many_arguments)]
    fn render_input(
        &self,
        buf: &mut Buffer,
        area: Rect,
        title: &str,
        prompt: &str,
        value: &str,
        purpose: InputPurpose,
        completion_candidates: &[String],
        completion_index: Option<usize>,
        cursor_pos: usize,
        selected_button: usize,
    ) {
        let inner = self.render_frame(buf, area, title, self.title_color);

        buf.set_string(inner.x, inner.y, prompt, Style::default().fg(self.fg_color));
        self.render_input_field(buf, inner.x, inner.y + 1, inner.width, value, cursor_pos);

        let button_y = area.y + area.height.saturating_sub(2);
        let hint_y = button_y.saturating_sub(1);
        let dim = Style::default()
            .fg(self.border_color)
            .bg(self.bg_color)
            .add_modifier(Modifier::DIM);

        // 자동완성 목록 (선택 항목 기준 스크롤)
        if inner.height >= 5 && !completion_candidates.is_empty() {
            let title_y = inner.y + 2;
            let list_y = inner.y + 3;
            let visible_rows = hint_y.saturating_sub(list_y) as usize;
            let total = completion_candidates.len();
            let selected = completion_index.unwrap_or(0).min(total - 1);

            let label = match purpose {
                InputPurpose::SelectFolder => "Folders",
                InputPurpose::AddFiles | InputPurpose::ExportPath => "Suggestions",
            };
            buf.set_string(
                inner.x,
                title_y,
                format!("{} ({}/{})", label, selected + 1, total),
                dim,
            );

            let scroll = (selected + 1).saturating_sub(visible_rows);
            for (row, candidate) in completion_candidates
                .iter()
                .enumerate()
                .skip(scroll)
                .take(visible_rows)
            {
                let y = list_y + (row - scroll) as u16;
                let is_current = completion_index == Some(row);
                let marker = if is_current { "> " } else { "  " };
                let content_width = inner.width.saturating_sub(marker.width() as u16) as usize;
                let text = path_display::truncate_middle(candidate, content_width);
                let style = if is_current {
                    Style::default()
                        .fg(self.button_selected_fg)
                        .bg(self.button_selected_bg)
                } else {
                    Style::default().fg(self.fg_color).bg(self.bg_color)
                };
                buf.set_string(inner.x, y, format!("{}{}", marker, text), style);
            }
        }

        if inner.height >= 4 {
            let hint = "Tab/Shift+Tab: complete  Enter: confirm  Esc: cancel";
            let hint = path_display::truncate_end(hint, inner.width as usize);
            let hint_x = inner.x + (inner.width.saturating_sub(hint.width() as u16)) / 2;
            buf.set_string(hint_x, hint_y, hint, dim);
        }

        self.render_ok_cancel(buf, inner.x, button_y, selected_button);
    }

    /// 확인 다이얼로그 렌더링
    fn render_confirm(
        &self,
        buf: &mut Buffer,
        area: Rect,
        title: &str,
        message: &str,
        selected_button: usize,
    ) {
        let inner = self.render_frame(buf, area, title, self.warning_color);

        let msg_area = Rect {
            height: inner.height.saturating_sub(2),
            ..inner
        };
        Paragraph::new(message)
            .style(Style::default().fg(self.fg_color))
            .wrap(Wrap { trim: true })
            .render(msg_area, buf);

        // 버튼 (하단 중앙)
        let button_y = area.y + area.height.saturating_sub(2);
        let buttons_width = (" OK ".width() + 2 + " Cancel ".width()) as u16;
        let button_x = area.x + (area.width.saturating_sub(buttons_width)) / 2;
        self.render_ok_cancel(buf, button_x, button_y, selected_button);
    }

    /// 메시지/경고/에러 다이얼로그 렌더링
    fn render_notice(
        &self,
        buf: &mut Buffer,
        area: Rect,
        title: &str,
        message: &str,
        accent: Color,
    ) {
        let inner = self.render_frame(buf, area, title, accent);

        let msg_area = Rect {
            height: inner.height.saturating_sub(2),
            ..inner
        };
        Paragraph::new(message)
            .style(Style::default().fg(self.fg_color))
            .wrap(Wrap { trim: true })
            .render(msg_area, buf);

        // OK 버튼
        let button_y = area.y + area.height.saturating_sub(2);
        let button_width = " OK ".width() as u16;
        let button_x = area.x + (area.width.saturating_sub(button_width)) / 2;
        self.render_button(buf, button_x, button_y, "OK", true);
    }

    fn render_help(&self, buf: &mut Buffer, area: Rect, scroll_offset: usize) {
        let frame = self.render_frame(buf, area, self.kind.title(), self.title_color);
        let content = Rect {
            height: frame.height.saturating_sub(2), // 하단 힌트 공간
            ..frame
        };

        let header_style = Style::default()
            .fg(self.title_color)
            .add_modifier(Modifier::BOLD);
        let key_style = Style::default().fg(self.success_color);
        let desc_style = Style::default().fg(self.fg_color);

        // (is_header, col1, col2)
        let mut rows: Vec<(bool, &str, &str)> = Vec::new();
        for (category, items) in generate_help_entries() {
            if !rows.is_empty() {
                rows.push((false, "", ""));
            }
            rows.push((true, category, ""));
            rows.extend(items.into_iter().map(|(key, desc)| (false, key, desc)));
        }

        let visible_height = content.height as usize;
        let max_scroll = rows.len().saturating_sub(visible_height);
        let effective_scroll = scroll_offset.min(max_scroll);

        for (i, (is_header, col1, col2)) in rows
            .iter()
            .skip(effective_scroll)
            .take(visible_height)
            .enumerate()
        {
            let y = content.y + i as u16;
            if *is_header {
                buf.set_string(content.x, y, col1, header_style);
            } else if !col1.is_empty() {
                buf.set_string(content.x + 2, y, col1, key_style);
                buf.set_string(content.x + HELP_KEY_COL_WIDTH, y, col2, desc_style);
            }
        }

        // 스크롤바 (내용이 화면보다 많을 때만)
        let total = rows.len();
        if total > visible_height && visible_height > 0 {
            let thumb_height = (visible_height * visible_height / total).max(1);
            let thumb_pos = effective_scroll * (visible_height - thumb_height) / max_scroll.max(1);
            let scrollbar_x = area.x + area.width.saturating_sub(2);
            for i in 0..visible_height {
                let (symbol, color) = if i >= thumb_pos && i < thumb_pos + thumb_height {
                    ("┃", self.fg_color)
                } else {
                    ("│", self.muted_color)
                };
                buf.set_string(
                    scrollbar_x,
                    content.y + i as u16,
                    symbol,
                    Style::default().fg(color),
                );
            }
        }

        let hint = "j/k: scroll  Esc/q/?: close";
        let hint_x = area.x + (area.width.saturating_sub(hint.width() as u16)) / 2;
        let hint_y = area.y + area.height.saturating_sub(2);
        buf.set_string(hint_x, hint_y, hint, Style::default().fg(self.muted_color));
    }
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog_area = self.calculate_area(area);
        if dialog_area.width < 4 || dialog_area.height < 3 {
            return;
        }

        // 배경 클리어
        Clear.render(dialog_area, buf);

        match self.kind {
            DialogKind::Input {
                title,
                prompt,
                value,
                cursor_pos,
                selected_button,
                purpose,
                completion_candidates,
                completion_index,
                ..
            } => self.render_input(
                buf,
                dialog_area,
                title,
                prompt,
                value,
                *purpose,
                completion_candidates,
                *completion_index,
                *cursor_pos,
                *selected_button,
            ),
            DialogKind::Confirm {
                title,
                message,
                selected_button,
            } => self.render_confirm(buf, dialog_area, title, message, *selected_button),
            DialogKind::Message { title, message } => {
                self.render_notice(buf, dialog_area, title, message, self.success_color)
            }
            DialogKind::Warning { title, message } => {
                self.render_notice(buf, dialog_area, title, message, self.warning_color)
            }
            DialogKind::Error { title, message } => {
                self.render_notice(buf, dialog_area, title, message, self.error_color)
            }
            DialogKind::Help { scroll_offset } => {
                self.render_help(buf, dialog_area, *scroll_offset)
            }
        }
    }
}
