use crate::config::ProjectionConfig;
use crate::core::Command;
use crate::tree::{self, NodeTag};

use super::state::{InputDialogKind, PanelState, PendingAction};
use super::{Action, Effect};

mod confirm_dialog;
mod context_menu;
mod explorer;
mod input_dialog;
mod picker;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

pub struct Store {
    state: PanelState,
}

impl Store {
    pub fn new(state: PanelState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::SettingsReloaded { settings } => {
                let config = ProjectionConfig::from_settings(&settings);
                if config == self.state.config {
                    return DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }

                self.state.config = config;
                // Nudges and failure text from the previous roots no longer
                // apply.
                self.state.ui.status = None;
                if self.state.config.is_some() {
                    DispatchResult {
                        effects: vec![Effect::ProjectTree],
                        state_changed: true,
                    }
                } else {
                    let _ = self.state.explorer.apply_rows(Vec::new());
                    DispatchResult {
                        effects: Vec::new(),
                        state_changed: true,
                    }
                }
            }
            Action::TreeProjected { rows } => DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.explorer.apply_rows(rows),
            },
            Action::TreeChanged => {
                // A mutation landed; stale failure text would be misleading.
                let state_changed = self.state.ui.status.take().is_some();
                DispatchResult {
                    effects: vec![Effect::ProjectTree],
                    state_changed,
                }
            }
            Action::FsOpFailed { op, error, .. } => {
                let prev = self
                    .state
                    .ui
                    .status
                    .replace(format!("{} failed: {}", op, error));
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: prev.as_deref() != self.state.ui.status.as_deref(),
                }
            }
            Action::ExplorerSetViewHeight { .. }
            | Action::ExplorerMoveSelection { .. }
            | Action::ExplorerSelectFirst
            | Action::ExplorerSelectLast
            | Action::ExplorerClickRow { .. }
            | Action::ExplorerScroll { .. }
            | Action::ExplorerActivate
            | Action::ExplorerCollapse
            | Action::ExplorerExpand => self.reduce_explorer_action(action),
            Action::InputDialogAppend(_)
            | Action::InputDialogBackspace
            | Action::InputDialogCursorLeft
            | Action::InputDialogCursorRight
            | Action::InputDialogAccept
            | Action::InputDialogCancel => self.reduce_input_dialog_action(action),
            Action::ConfirmDialogAccept | Action::ConfirmDialogCancel => {
                self.reduce_confirm_dialog_action(action)
            }
            Action::ContextMenuOpen { .. }
            | Action::ContextMenuClose
            | Action::ContextMenuMoveSelection { .. }
            | Action::ContextMenuConfirm => self.reduce_context_menu_action(action),
            Action::PickerDirLoaded { .. }
            | Action::PickerSetViewHeight { .. }
            | Action::PickerMoveSelection { .. }
            | Action::PickerToggleMark
            | Action::PickerEnter
            | Action::PickerCancel => self.reduce_picker_action(action),
        }
    }

    fn dispatch_command(&mut self, command: Command) -> DispatchResult {
        // Without configured roots there is nothing to operate on; nudge at
        // the settings file instead.
        if self.state.config.is_none() && command != Command::Quit {
            let prev = self
                .state
                .ui
                .status
                .replace("Set wwwPath and wwwProjectPath in settings.json".to_string());
            return DispatchResult {
                effects: Vec::new(),
                state_changed: prev.as_deref() != self.state.ui.status.as_deref(),
            };
        }

        if command.requires_selection() && self.state.explorer.selected_row().is_none() {
            return DispatchResult {
                effects: Vec::new(),
                state_changed: false,
            };
        }

        match command {
            Command::Quit => {
                self.state.ui.should_quit = true;
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Command::Refresh => DispatchResult {
                effects: vec![Effect::ReloadSettings, Effect::ProjectTree],
                state_changed: false,
            },
            Command::OpenFile => {
                let Some(row) = self.state.explorer.selected_row() else {
                    return DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                };
                if NodeTag::of(row) != NodeTag::File {
                    return DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }
                DispatchResult {
                    effects: vec![Effect::OpenFile(row.location.clone())],
                    state_changed: false,
                }
            }
            Command::CreateFile | Command::CreateFolder => {
                let Some(parent_dir) = self.state.explorer.create_parent_dir() else {
                    return DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                };
                let dest = self.display_dest(&parent_dir);
                let effects = self.expand_selected_dir_eagerly();

                let dialog = &mut self.state.ui.input_dialog;
                dialog.reset();
                dialog.visible = true;
                if command == Command::CreateFile {
                    dialog.title = format!("New File in {dest}");
                    dialog.kind = Some(InputDialogKind::NewFile { parent_dir });
                } else {
                    dialog.title = format!("New Folder in {dest}");
                    dialog.kind = Some(InputDialogKind::NewFolder { parent_dir });
                }
                DispatchResult {
                    effects,
                    state_changed: true,
                }
            }
            Command::Rename => {
                let Some(row) = self.state.explorer.selected_row() else {
                    return DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                };
                if !NodeTag::of(row).allows_rename() {
                    return DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }

                let from = row.location.clone();
                let name = row.title();
                let is_dir = row.kind.is_directory();
                let title = match self.state.config.as_ref() {
                    Some(config) => format!("Rename {}", row.project_path(config)),
                    None => "Rename".to_string(),
                };

                let dialog = &mut self.state.ui.input_dialog;
                dialog.reset();
                dialog.visible = true;
                dialog.title = title;
                dialog.cursor = name.len();
                dialog.selection = Some(rename_selection(&name, is_dir));
                dialog.value = name;
                dialog.kind = Some(InputDialogKind::RenameEntry { from });
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Command::Remove => {
                let Some(row) = self.state.explorer.selected_row() else {
                    return DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                };
                if !NodeTag::of(row).allows_remove() {
                    return DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }

                let message = format!("Delete '{}'?", row.title());
                let path = row.location.clone();

                let dialog = &mut self.state.ui.confirm_dialog;
                dialog.visible = true;
                dialog.message = message;
                dialog.on_confirm = Some(PendingAction::DeletePath { path });
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Command::ImportFile => {
                let Some(dest_dir) = self.state.explorer.create_parent_dir() else {
                    return DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                };
                let dest_label = self.display_dest(&dest_dir);
                let mut effects = self.expand_selected_dir_eagerly();

                let picker = &mut self.state.ui.picker;
                picker.reset();
                picker.visible = true;
                picker.dest_dir = dest_dir;
                picker.dest_label = dest_label;
                effects.push(Effect::LoadPickerDir(crate::config::home_dir()));
                DispatchResult {
                    effects,
                    state_changed: true,
                }
            }
        }
    }

    /// Prompt label for a destination directory: its project path when the
    /// roots are configured, the absolute path otherwise.
    fn display_dest(&self, dir: &std::path::Path) -> String {
        match (self.state.config.as_ref(), self.state.explorer.selected_row()) {
            (Some(config), Some(row)) => tree::display_path(config, row.origin, dir),
            _ => dir.display().to_string(),
        }
    }

    /// Expanding the target directory up front makes the created entry
    /// visible as soon as the reprojection lands.
    fn expand_selected_dir_eagerly(&mut self) -> Vec<Effect> {
        let key = self
            .state
            .explorer
            .selected_row()
            .filter(|row| row.kind.is_directory())
            .map(|row| row.key());

        match key {
            Some(key) if self.state.explorer.expanded.insert(key.clone()) => vec![Effect::ProjectTree],
            _ => Vec::new(),
        }
    }
}

/// Pre-selected byte range for rename: the stem for files, the whole name
/// for directories.
fn rename_selection(name: &str, is_dir: bool) -> (usize, usize) {
    if is_dir {
        return (0, name.len());
    }
    match name.rfind('.') {
        Some(pos) if pos > 0 => (0, pos),
        _ => (0, name.len()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/panel/store.rs"]
mod tests;
