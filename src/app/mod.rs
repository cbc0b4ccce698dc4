//! 应用层模块
//!
//! - Workbench: 工作台，管理视图和输入分发
//! - UiTheme: UI 主题

pub mod theme;
pub mod workbench;

pub use theme::UiTheme;
pub use workbench::Workbench;
