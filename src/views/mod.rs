//! 视图层模块
//!
//! 所有 UI 视图组件：
//! - ExplorerView: 项目树浏览器（纯渲染）

pub mod explorer;

pub use explorer::ExplorerView;
