// 후보 파일 패널
//
// 행마다 선택 마커, 파일 이름, 상위 디렉토리, 크기를 표시하고
// 커서 행은 배경색으로 강조한다.

use crate::models::{CandidateFile, CandidateList};
use crate::ui::Theme;
use crate::utils::formatter::format_file_size;
use crate::utils::path_display::{display_path, truncate_middle};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 후보 패널 위젯
pub struct Panel<'a> {
    title: &'a str,
    candidates: Option<&'a CandidateList>,
    cursor: usize,
    scroll_offset: usize,
    border_color: Color,
    bg_color: Color,
    row_color: Color,
    selected_color: Color,
    cursor_fg_color: Color,
    cursor_bg_color: Color,
}

impl Default for Panel<'_> {
    fn default() -> Self {
        Self {
            title: "Files",
            candidates: None,
            cursor: 0,
            scroll_offset: 0,
            border_color: Color::Rgb(0, 120, 212),
            bg_color: Color::Rgb(30, 30, 30),
            row_color: Color::Rgb(128, 128, 128),
            selected_color: Color::Rgb(229, 192, 123),
            cursor_fg_color: Color::Rgb(255, 255, 255),
            cursor_bg_color: Color::Rgb(0, 120, 212),
        }
    }
}

impl<'a> Panel<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn candidates(mut self, candidates: &'a CandidateList) -> Self {
        self.candidates = Some(candidates);
        self
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.border_color = theme.panel_border.to_color();
        self.bg_color = theme.bg_primary.to_color();
        self.row_color = theme.row_normal.to_color();
        self.selected_color = theme.row_selected.to_color();
        self.cursor_fg_color = theme.cursor_fg.to_color();
        self.cursor_bg_color = theme.cursor_bg.to_color();
        self
    }

    /// 단일 행 렌더링
    fn render_row(
        &self,
        file: &CandidateFile,
        is_selected: bool,
        is_cursor: bool,
        row: Rect,
        buf: &mut Buffer,
    ) {
        let width = row.width as usize;
        let fg = if is_cursor {
            self.cursor_fg_color
        } else if is_selected {
            self.selected_color
        } else {
            self.row_color
        };
        let mut style = Style::default().fg(fg);
        if is_cursor {
            style = style.bg(self.cursor_bg_color);
        }
        if is_selected {
            style = style.add_modifier(Modifier::BOLD);
        }
        let dim_style = style.remove_modifier(Modifier::BOLD).add_modifier(Modifier::DIM);

        let path = file.path.as_path();
        let marker = if is_selected { "* " } else { "  " };
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        // 크기는 오른쪽 정렬, 폭이 좁으면 생략
        let size = format!(" {} ", format_file_size(file.size));
        let size = if width >= marker.width() + size.width() + 8 {
            size
        } else {
            String::new()
        };

        // 이름 뒤 남는 폭에 상위 디렉토리 표시
        let body_width = width.saturating_sub(marker.width() + size.width());
        let name_width = name.width().min(body_width);
        let name = truncate_middle(&name, name_width);
        let dir_width = body_width.saturating_sub(name.width() + 2);
        let dir = match path.parent() {
            Some(parent) if dir_width >= 8 => display_path(parent, dir_width),
            _ => String::new(),
        };

        let used = marker.width() + name.width() + if dir.is_empty() { 0 } else { dir.width() + 2 };
        let mut spans = vec![
            Span::styled(marker, style),
            Span::styled(name, style),
        ];
        if !dir.is_empty() {
            spans.push(Span::styled("  ", style));
            spans.push(Span::styled(dir, dim_style));
        }
        let pad = width.saturating_sub(used + size.width());
        spans.push(Span::styled(" ".repeat(pad), style));
        spans.push(Span::styled(size, dim_style));

        buf.set_line(row.x, row.y, &Line::from(spans), row.width);
    }

    fn render_empty_state(&self, inner: Rect, buf: &mut Buffer) {
        let hint = Line::from(vec![Span::styled(
            " No files. Press o to select a folder or a to add files.",
            Style::default().fg(self.row_color),
        )]);
        buf.set_line(inner.x, inner.y, &hint, inner.width);
    }

    fn render_scrollbar(&self, inner: Rect, total: usize, buf: &mut Buffer) {
        let track_height = inner.height as usize;
        if track_height == 0 || total <= track_height {
            return;
        }
        let thumb_height = (track_height * track_height / total).max(1);
        let max_scroll = total - track_height;
        let thumb_pos =
            self.scroll_offset.min(max_scroll) * (track_height - thumb_height) / max_scroll;

        let x = inner.x + inner.width - 1;
        let track_style = Style::default().fg(Color::Rgb(60, 60, 60));
        let thumb_style = Style::default().fg(Color::Rgb(150, 150, 150));
        for i in 0..track_height {
            let (symbol, style) = if i >= thumb_pos && i < thumb_pos + thumb_height {
                ("┃", thumb_style)
            } else {
                ("│", track_style)
            };
            buf.set_string(x, inner.y + i as u16, symbol, style);
        }
    }
}

impl Widget for Panel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default()
                    .fg(self.border_color)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(self.bg_color));

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let Some(candidates) = self.candidates.filter(|c| !c.is_empty()) else {
            self.render_empty_state(inner, buf);
            return;
        };

        let visible = inner.height as usize;
        let has_scrollbar = candidates.len() > visible;
        let row_width = if has_scrollbar {
            inner.width.saturating_sub(1)
        } else {
            inner.width
        };

        for (row, (index, (file, is_selected))) in candidates
            .rows()
            .enumerate()
            .skip(self.scroll_offset)
            .take(visible)
            .enumerate()
        {
            self.render_row(
                file,
                is_selected,
                index == self.cursor,
                Rect::new(inner.x, inner.y + row as u16, row_width, 1),
                buf,
            );
        }

        if has_scrollbar {
            self.render_scrollbar(inner, candidates.len(), buf);
        }
    }
}
