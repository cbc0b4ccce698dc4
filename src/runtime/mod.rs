//! 异步运行时模块

mod message;
mod runtime;

pub use message::{PanelMessage, PickerEntry};
pub use runtime::PanelRuntime;
