// 레이아웃
//
// 헤더 | 후보 패널 | 상태바 | 커맨드바
// 최소 크기 미만이면 경고 화면만 표시

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 최소 터미널 크기
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 10;

/// 레이아웃 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Normal,
    /// 터미널이 너무 작음
    TooSmall,
}

/// 레이아웃 영역
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutAreas {
    /// 선택 폴더 표시줄
    pub header: Rect,
    /// 후보 목록 패널
    pub panel: Rect,
    pub status_bar: Rect,
    pub command_bar: Rect,
    /// TooSmall 모드 경고 영역
    pub warning: Rect,
}

/// 레이아웃 매니저
#[derive(Debug)]
pub struct LayoutManager {
    mode: LayoutMode,
    terminal_size: (u16, u16),
    areas: LayoutAreas,
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutManager {
    pub fn new() -> Self {
        Self {
            mode: LayoutMode::Normal,
            terminal_size: (80, 24),
            areas: LayoutAreas::default(),
        }
    }

    fn determine_mode(width: u16, height: u16) -> LayoutMode {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            LayoutMode::TooSmall
        } else {
            LayoutMode::Normal
        }
    }

    /// 터미널 크기 업데이트 및 영역 재계산
    pub fn update(&mut self, area: Rect) {
        self.terminal_size = (area.width, area.height);
        self.mode = Self::determine_mode(area.width, area.height);
        self.areas = match self.mode {
            LayoutMode::TooSmall => LayoutAreas {
                warning: area,
                ..Default::default()
            },
            LayoutMode::Normal => Self::calculate_areas(area),
        };
    }

    fn calculate_areas(area: Rect) -> LayoutAreas {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // 헤더
                Constraint::Min(3),    // 패널
                Constraint::Length(1), // 상태바
                Constraint::Length(1), // 커맨드바
            ])
            .split(area);

        LayoutAreas {
            header: chunks[0],
            panel: chunks[1],
            status_bar: chunks[2],
            command_bar: chunks[3],
            warning: Rect::default(),
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn areas(&self) -> &LayoutAreas {
        &self.areas
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// 패널 안쪽(테두리 제외) 목록 높이
    pub fn list_height(&self) -> usize {
        self.areas.panel.height.saturating_sub(2) as usize
    }
}
