use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x3d, 0xdc, 0x84);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const FOCUS_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const LABEL_TEXT: Color = Color::Rgb(0xfa, 0xfa, 0xfa);
pub const BUTTON_FOCUSED_BG: Color = Color::Rgb(0x26, 0x26, 0x26);
