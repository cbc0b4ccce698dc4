use crate::panel::{Action, Effect, InputDialogKind};

impl super::Store {
    pub(super) fn reduce_input_dialog_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::InputDialogAppend(ch) => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }

                dialog.error = None;
                if let Some((start, end)) = dialog.selection.take() {
                    let end = end.min(dialog.value.len());
                    let start = start.min(end);
                    dialog.value.replace_range(start..end, "");
                    dialog.cursor = start;
                }
                if dialog.cursor > dialog.value.len() {
                    dialog.cursor = dialog.value.len();
                }
                dialog.value.insert(dialog.cursor, ch);
                dialog.cursor += ch.len_utf8();
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::InputDialogBackspace => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }

                if let Some((start, end)) = dialog.selection.take() {
                    let end = end.min(dialog.value.len());
                    let start = start.min(end);
                    dialog.error = None;
                    dialog.value.replace_range(start..end, "");
                    dialog.cursor = start;
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: true,
                    };
                }

                if dialog.cursor == 0 {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }

                dialog.error = None;
                let prev = dialog.value[..dialog.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                dialog.value.drain(prev..dialog.cursor);
                dialog.cursor = prev;
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::InputDialogCursorLeft => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }

                if let Some((start, _)) = dialog.selection.take() {
                    dialog.cursor = start.min(dialog.value.len());
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: true,
                    };
                }

                if dialog.cursor == 0 {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }

                let prev = dialog.value[..dialog.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                let changed = prev != dialog.cursor;
                dialog.cursor = prev;
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: changed,
                }
            }
            Action::InputDialogCursorRight => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }

                if let Some((_, end)) = dialog.selection.take() {
                    dialog.cursor = end.min(dialog.value.len());
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: true,
                    };
                }

                if dialog.cursor >= dialog.value.len() {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }

                let next = dialog.value[dialog.cursor..]
                    .chars()
                    .next()
                    .map(|ch| dialog.cursor + ch.len_utf8())
                    .unwrap_or(dialog.value.len());
                let changed = next != dialog.cursor;
                dialog.cursor = next;
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: changed,
                }
            }
            Action::InputDialogAccept => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }

                if dialog.kind.is_none() {
                    dialog.reset();
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: true,
                    };
                }

                let value = dialog.value.trim();
                // Submitting an empty name aborts, same as Esc.
                if value.is_empty() {
                    dialog.reset();
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: true,
                    };
                }
                if value.contains('/') || value.contains('\\') || value == "." || value == ".." {
                    let prev = dialog.error.replace("Invalid name".to_string());
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: prev.as_deref() != dialog.error.as_deref(),
                    };
                }

                let value = value.to_string();
                let kind = dialog.kind.take();
                dialog.reset();

                let Some(kind) = kind else {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: true,
                    };
                };

                let effect = match kind {
                    InputDialogKind::NewFile { parent_dir } => {
                        Effect::CreateFile(parent_dir.join(&value))
                    }
                    InputDialogKind::NewFolder { parent_dir } => {
                        Effect::CreateDir(parent_dir.join(&value))
                    }
                    InputDialogKind::RenameEntry { from } => {
                        let Some(parent) = from.parent() else {
                            return super::DispatchResult {
                                effects: Vec::new(),
                                state_changed: true,
                            };
                        };
                        let to = parent.join(&value);
                        if to == from {
                            return super::DispatchResult {
                                effects: Vec::new(),
                                state_changed: true,
                            };
                        }
                        Effect::RenamePath { from, to }
                    }
                };

                super::DispatchResult {
                    effects: vec![effect],
                    state_changed: true,
                }
            }
            Action::InputDialogCancel => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }
                dialog.reset();
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            _ => unreachable!("non-input-dialog action passed to reduce_input_dialog_action"),
        }
    }
}
