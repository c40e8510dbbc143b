use ratatui::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub accent: Color,
    pub text: Color,
    pub subtext: Color,
    pub border: Color,
    pub green: Color,
    pub red: Color,
    pub yellow: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x1E, 0x1E, 0x2E),
            surface: Color::Rgb(0x31, 0x32, 0x44),
            accent: Color::Rgb(0xCB, 0xA6, 0xF7),
            text: Color::Rgb(0xCD, 0xD6, 0xF4),
            subtext: Color::Rgb(0xA6, 0xAD, 0xC8),
            border: Color::Rgb(0x45, 0x47, 0x5A),
            green: Color::Rgb(0xA6, 0xE3, 0xA1),
            red: Color::Rgb(0xF3, 0x8B, 0xA8),
            yellow: Color::Rgb(0xF9, 0xE2, 0xAF),
        }
    }
}
