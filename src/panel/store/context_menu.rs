use crate::core::Command;
use crate::panel::state::{ContextMenuEntry, ContextMenuState};
use crate::panel::Action;
use crate::tree::NodeTag;

impl super::Store {
    pub(super) fn reduce_context_menu_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::ContextMenuOpen { anchor } => {
                if self.state.ui.input_dialog.visible
                    || self.state.ui.confirm_dialog.visible
                    || self.state.ui.picker.visible
                {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }

                let Some(row) = self.state.explorer.selected_row() else {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                };
                let items = menu_items(NodeTag::of(row));

                let prev = self.state.ui.context_menu.clone();
                let menu = &mut self.state.ui.context_menu;
                menu.visible = true;
                menu.anchor = anchor;
                menu.selected = 0;
                menu.items = items;
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: *menu != prev,
                }
            }
            Action::ContextMenuClose => {
                if !self.state.ui.context_menu.visible {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }
                self.state.ui.context_menu = ContextMenuState::default();
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::ContextMenuMoveSelection { delta } => {
                let menu = &mut self.state.ui.context_menu;
                if !menu.visible || delta == 0 || menu.items.is_empty() {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }

                // Step one entry per press, wrapping and skipping separators.
                let len = menu.items.len() as isize;
                let step: isize = if delta < 0 { -1 } else { 1 };
                let mut next = menu.selected.min(menu.items.len() - 1) as isize;
                for _ in 0..menu.items.len() {
                    next = (next + step).rem_euclid(len);
                    if menu.items[next as usize].is_selectable() {
                        break;
                    }
                }
                let next = next as usize;
                if !menu.items[next].is_selectable() || next == menu.selected {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }

                menu.selected = next;
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::ContextMenuConfirm => {
                if !self.state.ui.context_menu.visible {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }

                let selected = self.state.ui.context_menu.selected;
                let command = self
                    .state
                    .ui
                    .context_menu
                    .items
                    .get(selected)
                    .and_then(|item| item.command());
                self.state.ui.context_menu = ContextMenuState::default();

                match command {
                    Some(command) => {
                        let mut result = self.dispatch(Action::RunCommand(command));
                        result.state_changed = true;
                        result
                    }
                    None => super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: true,
                    },
                }
            }
            _ => unreachable!("non-context-menu action passed to reduce_context_menu_action"),
        }
    }
}

/// Menu entries for a row, gated by what its position in the tree allows.
fn menu_items(tag: NodeTag) -> Vec<ContextMenuEntry> {
    let mut items = Vec::new();

    if tag == NodeTag::File {
        items.push(ContextMenuEntry::Action(Command::OpenFile));
    }
    if tag.allows_create() || tag == NodeTag::File {
        if !items.is_empty() {
            items.push(ContextMenuEntry::Separator);
        }
        items.push(ContextMenuEntry::Action(Command::CreateFile));
        items.push(ContextMenuEntry::Action(Command::CreateFolder));
        items.push(ContextMenuEntry::Action(Command::ImportFile));
    }
    if tag.allows_rename() || tag.allows_remove() {
        items.push(ContextMenuEntry::Separator);
        if tag.allows_rename() {
            items.push(ContextMenuEntry::Action(Command::Rename));
        }
        if tag.allows_remove() {
            items.push(ContextMenuEntry::Action(Command::Remove));
        }
    }
    if !items.is_empty() {
        items.push(ContextMenuEntry::Separator);
    }
    items.push(ContextMenuEntry::Action(Command::Refresh));

    items
}
