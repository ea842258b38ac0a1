// 상태바
//
// 후보 개수, 선택 개수와 선택 파일 총 크기, 토스트 메시지 표시

use crate::ui::Theme;
use crate::utils::formatter::format_selection_summary;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 상태바 컴포넌트
pub struct StatusBar<'a> {
    /// 후보 파일 수
    candidate_count: usize,
    /// 선택된 파일 수
    selected_count: usize,
    /// 선택된 파일 총 크기 (포맷된 문자열)
    selected_size: &'a str,
    /// 오른쪽 표시 (토스트 또는 테마 이름)
    right_text: Option<&'a str>,
    bg_color: Color,
    fg_color: Color,
    highlight_color: Color,
}

impl Default for StatusBar<'_> {
    fn default() -> Self {
        Self {
            candidate_count: 0,
            selected_count: 0,
            selected_size: "0 B",
            right_text: None,
            bg_color: Color::Rgb(0, 122, 204),
            fg_color: Color::Rgb(255, 255, 255),
            highlight_color: Color::Yellow,
        }
    }
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn candidate_count(mut self, count: usize) -> Self {
        self.candidate_count = count;
        self
    }

    pub fn selected_count(mut self, count: usize) -> Self {
        self.selected_count = count;
        self
    }

    pub fn selected_size(mut self, size: &'a str) -> Self {
        self.selected_size = size;
        self
    }

    pub fn right_text(mut self, text: Option<&'a str>) -> Self {
        self.right_text = text;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.status_bar_bg.to_color();
        self.fg_color = theme.status_bar_fg.to_color();
        self.highlight_color = theme.warning.to_color();
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let left_info = format!(
            " {} ",
            format_selection_summary(self.selected_count, self.candidate_count)
        );
        let size_info = if self.selected_count > 0 {
            format!("| {} ", self.selected_size)
        } else {
            String::new()
        };
        let right_info = self
            .right_text
            .map(|text| format!(" {} ", text))
            .unwrap_or_default();

        let used = left_info.width() + size_info.width() + right_info.width();
        let padding = " ".repeat((area.width as usize).saturating_sub(used));

        let line = Line::from(vec![
            Span::styled(left_info, Style::default().fg(self.fg_color)),
            Span::styled(size_info, Style::default().fg(self.highlight_color)),
            Span::raw(padding),
            Span::styled(right_info, Style::default().fg(self.fg_color)),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
