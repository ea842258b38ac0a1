// 하단 커맨드 바
//
// 액션 레지스트리에서 생성한 단축키 목록 표시

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

const SEPARATOR: &str = "  ";
const OVERFLOW_MARK: &str = " …";

/// 커맨드 항목 (레지스트리의 정적 문자열)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandItem {
    pub key: &'static str,
    pub label: &'static str,
    /// false면 흐리게 표시 (예: 선택이 없을 때 Export)
    pub enabled: bool,
}

impl CommandItem {
    pub fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            enabled: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// "key:label" 표시 폭
    fn width(&self) -> usize {
        self.key.width() + 1 + self.label.width()
    }
}

/// 주어진 폭에 앞에서부터 들어가는 항목 수
fn fitting_count(items: &[CommandItem], width: usize) -> usize {
    let mut used = 1; // 왼쪽 여백
    for (i, item) in items.iter().enumerate() {
        let sep = if i > 0 { SEPARATOR.len() } else { 0 };
        if used + sep + item.width() > width {
            return i;
        }
        used += sep + item.width();
    }
    items.len()
}

/// 커맨드 바 컴포넌트
pub struct CommandBar {
    commands: Vec<CommandItem>,
    bg: Color,
    key_fg: Color,
    label_fg: Color,
    disabled: Color,
}

impl Default for CommandBar {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            bg: Color::Rgb(45, 45, 48),
            key_fg: Color::Rgb(78, 201, 176),
            label_fg: Color::Rgb(204, 204, 204),
            disabled: Color::Rgb(90, 90, 90),
        }
    }
}

impl CommandBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(mut self, commands: Vec<CommandItem>) -> Self {
        self.commands = commands;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg = theme.command_bar_bg.to_color();
        self.key_fg = theme.command_key.to_color();
        self.label_fg = theme.command_bar_fg.to_color();
        self.disabled = theme.command_disabled.to_color();
        self
    }

    fn item_spans(&self, item: &CommandItem) -> [Span<'static>; 3] {
        let (key_style, label_style) = if item.enabled {
            (
                Style::default().fg(self.key_fg).add_modifier(Modifier::BOLD),
                Style::default().fg(self.label_fg),
            )
        } else {
            let dim = Style::default().fg(self.disabled);
            (dim, dim)
        };
        [
            Span::styled(item.key, key_style),
            Span::styled(":", label_style),
            Span::styled(item.label, label_style),
        ]
    }
}

impl Widget for CommandBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg));

        let width = area.width as usize;
        let mut shown = fitting_count(&self.commands, width);
        let truncated = shown < self.commands.len();
        // 잘린 경우 표시 공간 확보
        if truncated {
            shown = fitting_count(&self.commands, width.saturating_sub(OVERFLOW_MARK.width()));
        }

        let mut spans = vec![Span::raw(" ")];
        for (i, item) in self.commands[..shown].iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(SEPARATOR));
            }
            spans.extend(self.item_spans(item));
        }
        if truncated {
            spans.push(Span::styled(OVERFLOW_MARK, Style::default().fg(self.disabled)));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
