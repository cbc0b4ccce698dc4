use crate::panel::Action;

impl super::Store {
    pub(super) fn reduce_explorer_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::ExplorerSetViewHeight { height } => super::DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.explorer.set_view_height(height),
            },
            Action::ExplorerMoveSelection { delta } => super::DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.explorer.move_selection(delta),
            },
            Action::ExplorerSelectFirst => super::DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.explorer.select_first(),
            },
            Action::ExplorerSelectLast => super::DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.explorer.select_last(),
            },
            Action::ExplorerClickRow { row } => super::DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.explorer.select_row(row),
            },
            Action::ExplorerScroll { delta } => super::DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.explorer.scroll_by(delta),
            },
            Action::ExplorerActivate => {
                let (state_changed, effects) = self.state.explorer.activate_selected();
                super::DispatchResult {
                    effects,
                    state_changed,
                }
            }
            Action::ExplorerCollapse => {
                let (state_changed, effects) = self.state.explorer.collapse_selected();
                super::DispatchResult {
                    effects,
                    state_changed,
                }
            }
            Action::ExplorerExpand => {
                let (state_changed, effects) = self.state.explorer.expand_selected();
                super::DispatchResult {
                    effects,
                    state_changed,
                }
            }
            _ => unreachable!("non-explorer action passed to reduce_explorer_action"),
        }
    }
}
