//! 核心框架模块
//!
//! 面板可复用的基础抽象：
//! - Command: 语义命令定义
//! - Event: 统一输入事件
//! - View: 可渲染、可交互的视图接口

pub mod command;
#[cfg(feature = "tui")]
pub mod event;
pub mod text_window;
#[cfg(feature = "tui")]
pub mod view;

pub use command::Command;
#[cfg(feature = "tui")]
pub use event::{InputEvent, Key};
#[cfg(feature = "tui")]
pub use view::{EventResult, View};
