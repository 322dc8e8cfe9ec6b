use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x65, 0x55, 0xc0);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const COUNT_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const STATUS_ON: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_OFF: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const PENDING: Color = Color::Rgb(0xea, 0xb3, 0x08);
