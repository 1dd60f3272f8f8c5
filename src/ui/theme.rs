use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x0d, 0x6e, 0xfd);
pub const WARNING: Color = Color::Rgb(0xff, 0xc1, 0x07);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_INFO: Color = Color::Rgb(0x0d, 0xca, 0xf0);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
