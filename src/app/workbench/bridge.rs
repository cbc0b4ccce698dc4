use super::Workbench;
use crate::panel::{Action, Effect};
use crate::runtime::PanelMessage;

impl Workbench {
    /// Dispatches into the store and runs the returned effects. Returns
    /// whether the state changed (the caller decides whether to redraw).
    pub(super) fn dispatch_kernel(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
        result.state_changed
    }

    pub(super) fn handle_message(&mut self, msg: PanelMessage) -> bool {
        match msg {
            PanelMessage::TreeProjected { rows } => {
                self.dispatch_kernel(Action::TreeProjected { rows })
            }
            PanelMessage::TreeChanged => self.dispatch_kernel(Action::TreeChanged),
            PanelMessage::PickerDirLoaded { dir, entries } => {
                self.dispatch_kernel(Action::PickerDirLoaded { dir, entries })
            }
            PanelMessage::FsOpFailed { op, path, error } => {
                tracing::warn!(op, path = %path.display(), error = %error, "fs op failed");
                self.dispatch_kernel(Action::FsOpFailed { op, path, error })
            }
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::ReloadSettings => {
                let _ = self.reload_settings();
            }
            Effect::ProjectTree => match self.store.state().config.clone() {
                Some(config) => {
                    let expanded = self.store.state().explorer.expanded.clone();
                    self.runtime.project_tree(config, expanded);
                }
                None => {
                    let _ = self.dispatch_kernel(Action::TreeProjected { rows: Vec::new() });
                }
            },
            // Opening hands control to an external editor; the main loop owns
            // the terminal and must do the suspend/resume dance itself.
            Effect::OpenFile(path) => self.pending_open = Some(path),
            Effect::CreateDir(path) => self.runtime.create_dir(path),
            Effect::CreateFile(path) => self.runtime.create_file(path),
            Effect::RenamePath { from, to } => self.runtime.rename_path(from, to),
            Effect::DeletePath(path) => self.runtime.delete_path(path),
            Effect::ImportFiles { sources, dest_dir } => {
                self.runtime.import_files(sources, dest_dir)
            }
            Effect::LoadPickerDir(dir) => self.runtime.load_picker_dir(dir),
        }
    }
}
