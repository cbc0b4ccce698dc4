use crate::panel::state::ConfirmDialogState;
use crate::panel::{Action, Effect, PendingAction};

impl super::Store {
    pub(super) fn reduce_confirm_dialog_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::ConfirmDialogAccept => {
                let dialog = &mut self.state.ui.confirm_dialog;
                if !dialog.visible {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }

                let pending = dialog.on_confirm.take();
                *dialog = ConfirmDialogState::default();

                let effects = match pending {
                    Some(PendingAction::DeletePath { path }) => vec![Effect::DeletePath(path)],
                    None => Vec::new(),
                };
                super::DispatchResult {
                    effects,
                    state_changed: true,
                }
            }
            Action::ConfirmDialogCancel => {
                let dialog = &mut self.state.ui.confirm_dialog;
                if !dialog.visible {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }
                *dialog = ConfirmDialogState::default();
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            _ => unreachable!("non-confirm-dialog action passed to reduce_confirm_dialog_action"),
        }
    }
}
