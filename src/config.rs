use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Sidebar width in characters
    pub sidebar_width: u16,
    /// Width percentage for the list pane when focused (preview gets the rest)
    pub list_focused_width: u16,
    /// Width percentage for the preview pane when focused (list gets the rest)
    pub preview_focused_width: u16,
    /// Time column width in characters
    pub time_width: usize,
    /// From/To column width in characters
    pub from_width: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            sidebar_width: 22,
            list_focused_width: 62,
            preview_focused_width: 65,
            time_width: 8,
            from_width: 22,
        }
    }
}

/// Semantic theme configuration, hex or named colors
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub bg_panel: String,
    pub fg: String,
    pub fg_muted: String,
    pub fg_subtle: String,

    pub border: String,
    pub border_active: String,

    pub primary: String,
    pub selected_bg: String,
    pub unread: String,
    pub starred: String,
    pub attachment: String,
    pub success: String,
    pub error: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            bg_panel: "#262422".to_string(),
            fg: "#f7f7f5".to_string(),
            fg_muted: "#8c8985".to_string(),
            fg_subtle: "#b8b5b0".to_string(),

            border: "#524f4c".to_string(),
            border_active: "#d4a366".to_string(),

            primary: "#d4a366".to_string(),
            selected_bg: "#393634".to_string(),
            unread: "#d4a366".to_string(),
            starred: "#f8ce9b".to_string(),
            attachment: "#b48ead".to_string(),
            success: "#52c41a".to_string(),
            error: "#ff4d4f".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let config_path = dirs::config_dir()
            .map(|p| p.join("bmail/config.toml"))
            .unwrap_or_else(|| PathBuf::from("~/.config/bmail/config.toml"));

        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => eprintln!("Config parse error: {}", e),
                },
                Err(e) => eprintln!("Config read error: {}", e),
            }
        }

        Self::default()
    }
}

impl ThemeConfig {
    pub fn bg_panel(&self) -> ratatui::style::Color {
        parse_color(&self.bg_panel)
    }
    pub fn fg(&self) -> ratatui::style::Color {
        parse_color(&self.fg)
    }
    pub fn fg_muted(&self) -> ratatui::style::Color {
        parse_color(&self.fg_muted)
    }
    pub fn fg_subtle(&self) -> ratatui::style::Color {
        parse_color(&self.fg_subtle)
    }
    pub fn border(&self) -> ratatui::style::Color {
        parse_color(&self.border)
    }
    pub fn border_active(&self) -> ratatui::style::Color {
        parse_color(&self.border_active)
    }
    pub fn primary(&self) -> ratatui::style::Color {
        parse_color(&self.primary)
    }
    pub fn selected_bg(&self) -> ratatui::style::Color {
        parse_color(&self.selected_bg)
    }
    pub fn unread(&self) -> ratatui::style::Color {
        parse_color(&self.unread)
    }
    pub fn starred(&self) -> ratatui::style::Color {
        parse_color(&self.starred)
    }
    pub fn attachment(&self) -> ratatui::style::Color {
        parse_color(&self.attachment)
    }
    pub fn success(&self) -> ratatui::style::Color {
        parse_color(&self.success)
    }
    pub fn error(&self) -> ratatui::style::Color {
        parse_color(&self.error)
    }
}

/// Parse color string to ratatui Color
pub fn parse_color(s: &str) -> ratatui::style::Color {
    use ratatui::style::Color;

    // Hex first (#RRGGBB)
    if s.starts_with('#') && s.len() == 7 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&s[1..3], 16),
            u8::from_str_radix(&s[3..5], 16),
            u8::from_str_radix(&s[5..7], 16),
        ) {
            return Color::Rgb(r, g, b);
        }
    }

    match s.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "white" => Color::White,
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn parses_hex_and_named_colors() {
        assert_eq!(parse_color("#d4a366"), Color::Rgb(0xd4, 0xa3, 0x66));
        assert_eq!(parse_color("cyan"), Color::Cyan);
        assert_eq!(parse_color("not-a-color"), Color::White);
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: Config = toml::from_str("[layout]\nsidebar_width = 30\n").unwrap();
        assert_eq!(config.layout.sidebar_width, 30);
        assert_eq!(config.layout.time_width, LayoutConfig::default().time_width);
        assert_eq!(config.theme.unread, ThemeConfig::default().unread);
    }
}
