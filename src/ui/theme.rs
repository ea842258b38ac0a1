use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 색상 테마
///
/// 기본 제공 테마(dark / light / high_contrast) 외에
/// 설정 디렉토리의 TOML 파일에서 추가 테마를 읽을 수 있습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    // 배경/전경
    pub bg_primary: ColorDef,
    pub fg_primary: ColorDef,

    // 헤더 / 패널
    pub header_fg: ColorDef,
    pub panel_border: ColorDef,

    // 후보 목록
    pub row_normal: ColorDef,
    pub row_selected: ColorDef,
    pub cursor_fg: ColorDef,
    pub cursor_bg: ColorDef,

    // 상태바 / 커맨드바
    pub status_bar_bg: ColorDef,
    pub status_bar_fg: ColorDef,
    pub command_bar_bg: ColorDef,
    pub command_bar_fg: ColorDef,
    pub command_key: ColorDef,
    pub command_disabled: ColorDef,

    // 다이얼로그
    pub dialog_bg: ColorDef,
    pub dialog_border: ColorDef,

    // 강조
    pub accent: ColorDef,
    pub warning: ColorDef,
    pub error: ColorDef,
    pub success: ColorDef,
}

/// 색상 정의
///
/// Hex 문자열("#1e1e1e") 또는 색상 이름("Red")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorDef {
    Hex(String),
    Named(String),
}

impl ColorDef {
    pub fn to_color(&self) -> Color {
        match self {
            ColorDef::Hex(hex) => parse_hex_color(hex),
            ColorDef::Named(name) => parse_named_color(name),
        }
    }
}

impl From<&str> for ColorDef {
    fn from(s: &str) -> Self {
        if s.starts_with('#') {
            ColorDef::Hex(s.to_string())
        } else {
            ColorDef::Named(s.to_string())
        }
    }
}

fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Color::Reset;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(0);
    Color::Rgb(channel(0..2), channel(2..4), channel(4..6))
}

fn parse_named_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

impl Theme {
    /// Dark 테마 (기본)
    pub fn dark() -> Self {
        Theme {
            bg_primary: "#1e1e1e".into(),
            fg_primary: "#d4d4d4".into(),

            header_fg: "#569cd6".into(),
            panel_border: "#0078d4".into(),

            row_normal: "#808080".into(),
            row_selected: "#e5c07b".into(),
            cursor_fg: "#ffffff".into(),
            cursor_bg: "#0078d4".into(),

            status_bar_bg: "#007acc".into(),
            status_bar_fg: "#ffffff".into(),
            command_bar_bg: "#2d2d30".into(),
            command_bar_fg: "#cccccc".into(),
            command_key: "#4ec9b0".into(),
            command_disabled: "#5a5a5a".into(),

            dialog_bg: "#252526".into(),
            dialog_border: "#0078d4".into(),

            accent: "#0078d4".into(),
            warning: "#ffa500".into(),
            error: "#f44747".into(),
            success: "#4ec9b0".into(),
        }
    }

    /// Light 테마
    pub fn light() -> Self {
        Theme {
            bg_primary: "#ffffff".into(),
            fg_primary: "#1e1e1e".into(),

            header_fg: "#0066cc".into(),
            panel_border: "#0078d4".into(),

            row_normal: "#6e6e6e".into(),
            row_selected: "#a65e2b".into(),
            cursor_fg: "#000000".into(),
            cursor_bg: "#add6ff".into(),

            status_bar_bg: "#0078d4".into(),
            status_bar_fg: "#ffffff".into(),
            command_bar_bg: "#f3f3f3".into(),
            command_bar_fg: "#1e1e1e".into(),
            command_key: "#008080".into(),
            command_disabled: "#b0b0b0".into(),

            dialog_bg: "#f3f3f3".into(),
            dialog_border: "#0078d4".into(),

            accent: "#0078d4".into(),
            warning: "#ff8c00".into(),
            error: "#e51400".into(),
            success: "#107c10".into(),
        }
    }

    /// High Contrast 테마
    pub fn high_contrast() -> Self {
        Theme {
            bg_primary: "#000000".into(),
            fg_primary: "#ffffff".into(),

            header_fg: "#00ffff".into(),
            panel_border: "#00ff00".into(),

            row_normal: "#c0c0c0".into(),
            row_selected: "#ffff00".into(),
            cursor_fg: "#000000".into(),
            cursor_bg: "#00ff00".into(),

            status_bar_bg: "#000000".into(),
            status_bar_fg: "#00ff00".into(),
            command_bar_bg: "#000000".into(),
            command_bar_fg: "#ffffff".into(),
            command_key: "#00ffff".into(),
            command_disabled: "#808080".into(),

            dialog_bg: "#000000".into(),
            dialog_border: "#ffffff".into(),

            accent: "#00ff00".into(),
            warning: "#ffff00".into(),
            error: "#ff0000".into(),
            success: "#00ff00".into(),
        }
    }

    /// TOML 파일에서 테마 로드
    pub fn from_file(path: &Path) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)?;
        let theme: Theme = toml::from_str(&content)?;
        Ok(theme)
    }
}

/// 테마 관리자
///
/// 현재 테마를 이름으로 추적하고 런타임 전환을 처리합니다.
pub struct ThemeManager {
    current_index: usize,
    available_themes: Vec<(String, Theme)>,
}

impl ThemeManager {
    /// 기본 테마 관리자 생성 (Dark 테마)
    pub fn new() -> Self {
        Self {
            current_index: 0,
            available_themes: vec![
                ("dark".to_string(), Theme::dark()),
                ("light".to_string(), Theme::light()),
                ("high_contrast".to_string(), Theme::high_contrast()),
            ],
        }
    }

    pub fn current(&self) -> &Theme {
        &self.available_themes[self.current_index].1
    }

    pub fn current_name(&self) -> &str {
        &self.available_themes[self.current_index].0
    }

    /// 이름으로 테마 전환
    pub fn switch_theme(&mut self, name: &str) -> Result<(), String> {
        match self.available_themes.iter().position(|(n, _)| n == name) {
            Some(index) => {
                self.current_index = index;
                Ok(())
            }
            None => Err(format!("Theme not found: {}", name)),
        }
    }

    /// 다음 테마로 순환
    pub fn cycle_theme(&mut self) {
        self.current_index = (self.current_index + 1) % self.available_themes.len();
    }

    pub fn available_themes(&self) -> Vec<String> {
        self.available_themes
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// 커스텀 테마 추가 (같은 이름이면 교체)
    pub fn add_theme(&mut self, name: String, theme: Theme) {
        if let Some(slot) = self.available_themes.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = theme;
        } else {
            self.available_themes.push((name, theme));
        }
    }

    /// 디렉토리의 `*.toml` 테마 파일 로드
    ///
    /// 파싱에 실패한 파일은 건너뛰고, 읽어들인 테마 수를 반환합니다.
    pub fn load_themes_from_dir(&mut self, themes_dir: &Path) -> Result<usize, anyhow::Error> {
        if !themes_dir.is_dir() {
            return Ok(0);
        }

        let mut loaded = 0;
        for entry in fs::read_dir(themes_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match Theme::from_file(&path) {
                Ok(theme) => {
                    self.add_theme(name.to_string(), theme);
                    loaded += 1;
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping invalid theme file");
                }
            }
        }
        Ok(loaded)
    }

    /// `<config_dir>/conglomerate/themes` 로드
    pub fn load_themes_from_config_dir(&mut self) -> Result<usize, anyhow::Error> {
        match dirs::config_dir() {
            Some(config_dir) => {
                self.load_themes_from_dir(&config_dir.join("conglomerate").join("themes"))
            }
            None => Ok(0),
        }
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}
