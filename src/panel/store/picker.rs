use crate::panel::{Action, Effect};

impl super::Store {
    pub(super) fn reduce_picker_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::PickerDirLoaded { dir, entries } => super::DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.ui.picker.apply_entries(dir, entries),
            },
            Action::PickerSetViewHeight { height } => super::DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.ui.picker.set_view_height(height),
            },
            Action::PickerMoveSelection { delta } => super::DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.ui.picker.move_selection(delta),
            },
            Action::PickerToggleMark => super::DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.ui.picker.toggle_mark(),
            },
            Action::PickerEnter => {
                let picker = &self.state.ui.picker;
                if !picker.visible {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }

                match picker.selected_entry() {
                    // Enter on a directory descends; marks survive the move.
                    Some(entry) if entry.is_dir => {
                        let Some(path) = picker.selected_path() else {
                            return super::DispatchResult {
                                effects: Vec::new(),
                                state_changed: false,
                            };
                        };
                        super::DispatchResult {
                            effects: vec![Effect::LoadPickerDir(path)],
                            state_changed: false,
                        }
                    }
                    // Enter on a file accepts it together with every mark.
                    Some(_) => {
                        let (sources, dest_dir) = picker.accept_targets();
                        self.state.ui.picker.reset();
                        if sources.is_empty() {
                            return super::DispatchResult {
                                effects: Vec::new(),
                                state_changed: true,
                            };
                        }
                        super::DispatchResult {
                            effects: vec![Effect::ImportFiles { sources, dest_dir }],
                            state_changed: true,
                        }
                    }
                    None => super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    },
                }
            }
            Action::PickerCancel => {
                if !self.state.ui.picker.visible {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }
                self.state.ui.picker.reset();
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            _ => unreachable!("non-picker action passed to reduce_picker_action"),
        }
    }
}
