use super::Workbench;
use crate::panel::Action;
use std::sync::mpsc;
use std::time::Instant;

impl Workbench {
    /// 定时轮询后台消息和配置文件（由主循环调用）
    pub fn tick(&mut self) -> bool {
        let mut changed = false;
        changed |= self.poll_runtime();
        changed |= self.poll_settings();
        changed
    }

    fn poll_runtime(&mut self) -> bool {
        let mut changed = false;
        let mut drained = 0usize;
        loop {
            if drained >= super::MAX_RUNTIME_DRAIN_PER_TICK {
                break;
            }
            match self.runtime_rx.try_recv() {
                Ok(msg) => {
                    drained += 1;
                    changed |= self.handle_message(msg);
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => break,
            }
        }
        changed
    }

    fn poll_settings(&mut self) -> bool {
        let Some(path) = self.settings_path.as_ref() else {
            return false;
        };

        if self.last_settings_check.elapsed() < super::SETTINGS_CHECK_INTERVAL {
            return false;
        }
        self.last_settings_check = Instant::now();

        let modified = std::fs::metadata(path).and_then(|m| m.modified()).ok();
        if modified.is_some() && modified != self.last_settings_modified {
            self.last_settings_modified = modified;
            return self.reload_settings();
        }

        false
    }

    pub(super) fn reload_settings(&mut self) -> bool {
        let Some(path) = self.settings_path.clone() else {
            return false;
        };
        let Some(settings) = crate::config::load_settings_from(&path) else {
            return false;
        };

        tracing::info!(path = %path.display(), "settings file changed, reloading");
        self.editor_command = crate::config::editor_command(&settings);
        self.dispatch_kernel(Action::SettingsReloaded { settings })
    }
}
