// 경고 화면
//
// 터미널이 최소 크기보다 작을 때 표시

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::ui::layout::{MIN_HEIGHT, MIN_WIDTH};
use crate::ui::Theme;

/// 부족한 크기 안내 문구 ("12 more columns, 3 more rows")
fn shortfall_text(current: (u16, u16), required: (u16, u16)) -> String {
    let cols = required.0.saturating_sub(current.0);
    let rows = required.1.saturating_sub(current.1);
    let part = |n: u16, unit: &str| format!("{} more {}{}", n, unit, if n == 1 { "" } else { "s" });

    match (cols, rows) {
        (0, 0) => "Resize to continue".to_string(),
        (c, 0) => part(c, "column"),
        (0, r) => part(r, "row"),
        (c, r) => format!("{}, {}", part(c, "column"), part(r, "row")),
    }
}

/// 경고 화면 컴포넌트
pub struct WarningScreen {
    current: (u16, u16),
    required: (u16, u16),
    accent: Color,
    bg: Color,
    fg: Color,
    /// 부족한 치수 강조 색
    short: Color,
}

impl Default for WarningScreen {
    fn default() -> Self {
        Self {
            current: (0, 0),
            required: (MIN_WIDTH, MIN_HEIGHT),
            accent: Color::Yellow,
            bg: Color::Rgb(30, 30, 30),
            fg: Color::Rgb(212, 212, 212),
            short: Color::Red,
        }
    }
}

impl WarningScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_size(mut self, width: u16, height: u16) -> Self {
        self.current = (width, height);
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.accent = theme.warning.to_color();
        self.bg = theme.bg_primary.to_color();
        self.fg = theme.fg_primary.to_color();
        self.short = theme.error.to_color();
        self
    }

    fn size_line(&self) -> Line<'static> {
        let plain = Style::default().fg(self.fg);
        let dim = |ok: bool| {
            if ok {
                plain
            } else {
                Style::default().fg(self.short).add_modifier(Modifier::BOLD)
            }
        };
        Line::from(vec![
            Span::styled(self.current.0.to_string(), dim(self.current.0 >= self.required.0)),
            Span::styled("x", plain),
            Span::styled(self.current.1.to_string(), dim(self.current.1 >= self.required.1)),
            Span::styled(
                format!(" (need {}x{})", self.required.0, self.required.1),
                plain,
            ),
        ])
    }
}

impl Widget for WarningScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg));

        let lines = vec![
            Line::from(Span::styled(
                "Terminal too small",
                Style::default().fg(self.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            self.size_line(),
            Line::from(Span::styled(
                shortfall_text(self.current, self.required),
                Style::default().fg(self.fg),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.accent))
            .style(Style::default().bg(self.bg));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_text(screen: WarningScreen, area: Rect) -> String {
        let mut buf = Buffer::empty(area);
        screen.render(area, &mut buf);
        let mut rendered = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                if let Some(cell) = buf.cell((x, y)) {
                    rendered.push_str(cell.symbol());
                }
            }
            rendered.push('\n');
        }
        rendered
    }

    #[test]
    fn test_warning_screen_shows_sizes() {
        let area = Rect::new(0, 0, 36, 8);
        let rendered = render_text(WarningScreen::new().current_size(30, 8), area);

        assert!(rendered.contains("Terminal too small"), "{}", rendered);
        assert!(rendered.contains("30x8"), "{}", rendered);
        assert!(rendered.contains("need 40x10"), "{}", rendered);
    }

    #[test]
    fn test_shortfall_text() {
        assert_eq!(shortfall_text((30, 20), (40, 10)), "10 more columns");
        assert_eq!(shortfall_text((50, 9), (40, 10)), "1 more row");
        assert_eq!(
            shortfall_text((39, 7), (40, 10)),
            "1 more column, 3 more rows"
        );
        assert_eq!(shortfall_text((40, 10), (40, 10)), "Resize to continue");
    }
}
