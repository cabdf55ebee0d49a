use ratatui::style::Color;

pub const TITLE_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const PROMPT_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_INFO: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const FIELD_LABEL: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const FOCUS_HIGHLIGHT: Color = Color::Rgb(0xfb, 0xbf, 0x24);
pub const MENU_SELECTED: Color = Color::Rgb(0x60, 0xa5, 0xfa);
