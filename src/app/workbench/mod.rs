//! 工作台模块：统一管理视图和输入分发

use super::theme::UiTheme;
use crate::config::{ProjectionConfig, Settings};
use crate::core::event::InputEvent;
use crate::core::view::{EventResult, View};
use crate::core::Command;
use crate::panel::{Action, PanelState, Store};
use crate::runtime::{PanelMessage, PanelRuntime};
use crate::views::ExplorerView;
use ratatui::layout::Rect;
use ratatui::Frame;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant, SystemTime};

mod bridge;
mod input;
mod render;
mod tick;
mod util;

// Title row plus its divider.
const HEADER_HEIGHT: u16 = 2;
const STATUS_HEIGHT: u16 = 1;
const MAX_RUNTIME_DRAIN_PER_TICK: usize = 64;
const SETTINGS_CHECK_INTERVAL: Duration = Duration::from_millis(500);

pub struct Workbench {
    store: Store,
    explorer: ExplorerView,
    theme: UiTheme,
    runtime: PanelRuntime,
    runtime_rx: Receiver<PanelMessage>,
    editor_command: String,
    settings_path: Option<PathBuf>,
    last_settings_check: Instant,
    last_settings_modified: Option<SystemTime>,
    pending_open: Option<PathBuf>,
    last_render_area: Option<Rect>,
}

impl Workbench {
    pub fn new(
        settings: Settings,
        settings_path: Option<PathBuf>,
        runtime: PanelRuntime,
        runtime_rx: Receiver<PanelMessage>,
    ) -> Self {
        let editor_command = crate::config::editor_command(&settings);
        let last_settings_modified = settings_path
            .as_ref()
            .and_then(|path| std::fs::metadata(path).and_then(|m| m.modified()).ok());
        let config = ProjectionConfig::from_settings(&settings);

        let mut workbench = Self {
            store: Store::new(PanelState::new(config)),
            explorer: ExplorerView::new(),
            theme: UiTheme::default(),
            runtime,
            runtime_rx,
            editor_command,
            settings_path,
            last_settings_check: Instant::now(),
            last_settings_modified,
            pending_open: None,
            last_render_area: None,
        };

        // Projects the tree when configured, or surfaces the settings hint.
        let _ = workbench.dispatch_kernel(Action::RunCommand(Command::Refresh));
        workbench
    }

    /// 取出待打开的文件（由主循环交给外部编辑器）
    pub fn take_pending_open(&mut self) -> Option<PathBuf> {
        self.pending_open.take()
    }

    pub fn editor_command(&self) -> &str {
        &self.editor_command
    }

    pub fn should_quit(&self) -> bool {
        self.store.state().ui.should_quit
    }
}

impl View for Workbench {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render::render(self, frame, area);
    }

    fn cursor_position(&self) -> Option<(u16, u16)> {
        render::cursor_position(self)
    }
}
