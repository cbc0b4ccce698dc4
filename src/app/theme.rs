//! UI 主题：把面板用到的颜色集中管理，避免散落在渲染代码里。

use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub header_fg: Color,
    pub accent_fg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub muted_fg: Color,
    pub error_fg: Color,
    pub separator: Color,
    pub popup_border: Color,
    pub popup_bg: Color,
    pub popup_fg: Color,
    pub popup_selected_bg: Color,
    pub popup_selected_fg: Color,
    pub popup_muted_fg: Color,
    pub mark_fg: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            header_fg: Color::Indexed(6), // Cyan
            accent_fg: Color::Indexed(3), // Yellow
            selected_bg: Color::Indexed(8),  // DarkGray
            selected_fg: Color::Indexed(15), // White
            muted_fg: Color::Indexed(8),     // DarkGray
            error_fg: Color::Indexed(1),     // Red
            separator: Color::Indexed(8),    // DarkGray
            popup_border: Color::Indexed(6), // Cyan
            popup_bg: Color::Reset,
            popup_fg: Color::Indexed(15),          // White
            popup_selected_bg: Color::Indexed(8),  // DarkGray
            popup_selected_fg: Color::Indexed(15), // White
            popup_muted_fg: Color::Indexed(8),     // DarkGray
            mark_fg: Color::Indexed(10),           // LightGreen
        }
    }
}
