//! njwaptree - NJWAP 项目树面板库
//!
//! 模块结构：
//! - config: 配置（settings.json 与投影配置）
//! - fs: 异步文件系统访问
//! - tree: 双根影子投影（节点模型、排序、投影器）
//! - panel: 无界面内核（状态/动作/效果）
//! - runtime: tokio 桥接层
//! - core: 核心框架（Command, Event, View）
//! - views: 视图层（ExplorerView）
//! - app: 应用层（Workbench, UiTheme）
//! - tui: 终端集成（crossterm + ratatui）

pub mod config;
pub mod core;
pub mod fs;
pub mod logging;
pub mod panel;
pub mod runtime;
pub mod tree;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod tui;
#[cfg(feature = "tui")]
pub mod views;
