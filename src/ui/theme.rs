use ratatui::style::Color;

// Window
pub const SCREEN_BG: Color = Color::Rgb(10, 12, 16);
pub const PANEL_BG: Color = Color::Rgb(20, 23, 30);
pub const TEXT: Color = Color::Rgb(214, 218, 226);
pub const TEXT_HINT: Color = Color::Rgb(118, 124, 138);

// Title and status bars
pub const STATUS_BG: Color = Color::Rgb(28, 58, 110);
pub const STATUS_TEXT: Color = Color::Rgb(232, 238, 252);

// Language list
pub const LIST_BG: Color = Color::Rgb(44, 48, 60);
pub const LIST_SELECTED_BG: Color = Color::Rgb(224, 178, 72);
pub const LIST_SELECTED_TEXT: Color = Color::Rgb(24, 20, 12);

pub const BORDER: Color = Color::Rgb(70, 92, 112);
pub const BORDER_ACTIVE: Color = Color::Rgb(224, 178, 72);

// Translate button
pub const BUTTON_BG: Color = Color::Rgb(30, 140, 88);
pub const BUTTON_BUSY_BG: Color = Color::Rgb(64, 84, 74);
pub const BUTTON_TEXT: Color = Color::Rgb(255, 255, 255);
