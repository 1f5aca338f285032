use ratatui::style::Color;

pub const TITLE: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const CARD_BACK: Color = Color::Rgb(0xcc, 0xcc, 0xcc);
pub const CARD_FACE: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const CARD_MATCHED: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const CARD_CURSOR: Color = Color::Rgb(0xfa, 0xcc, 0x15);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const WIN_SPECIAL: Color = Color::Rgb(0xff, 0xd7, 0x00);
pub const WIN_TOKEN: Color = Color::Rgb(0x60, 0x7a, 0xff);
