use super::Workbench;
use crate::core::event::{InputEvent, Key};
use crate::core::view::EventResult;
use crate::core::Command;
use crate::panel::Action;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub(super) fn handle_input(workbench: &mut Workbench, event: &InputEvent) -> EventResult {
    match event {
        InputEvent::Key(key_event) => workbench.handle_key_event(key_event),
        InputEvent::Mouse(mouse_event) => workbench.handle_mouse_event(mouse_event),
        InputEvent::Resize(_, _) => EventResult::Consumed,
        _ => EventResult::Ignored,
    }
}

impl Workbench {
    fn handle_key_event(&mut self, key_event: &KeyEvent) -> EventResult {
        if key_event.kind == KeyEventKind::Release {
            return EventResult::Ignored;
        }

        if self.store.state().ui.context_menu.visible {
            match key_event.code {
                KeyCode::Esc => {
                    let _ = self.dispatch_kernel(Action::ContextMenuClose);
                    return EventResult::Consumed;
                }
                KeyCode::Up => {
                    let _ = self.dispatch_kernel(Action::ContextMenuMoveSelection { delta: -1 });
                    return EventResult::Consumed;
                }
                KeyCode::Down => {
                    let _ = self.dispatch_kernel(Action::ContextMenuMoveSelection { delta: 1 });
                    return EventResult::Consumed;
                }
                KeyCode::Enter => {
                    let _ = self.dispatch_kernel(Action::ContextMenuConfirm);
                    return EventResult::Consumed;
                }
                _ => {
                    // Any other key closes the menu and then acts normally.
                    let _ = self.dispatch_kernel(Action::ContextMenuClose);
                }
            }
        }

        if self.store.state().ui.input_dialog.visible {
            match (key_event.code, key_event.modifiers) {
                (KeyCode::Esc, _) => {
                    let _ = self.dispatch_kernel(Action::InputDialogCancel);
                }
                (KeyCode::Enter, _) => {
                    let _ = self.dispatch_kernel(Action::InputDialogAccept);
                }
                (KeyCode::Backspace, _) => {
                    let _ = self.dispatch_kernel(Action::InputDialogBackspace);
                }
                (KeyCode::Left, _) => {
                    let _ = self.dispatch_kernel(Action::InputDialogCursorLeft);
                }
                (KeyCode::Right, _) => {
                    let _ = self.dispatch_kernel(Action::InputDialogCursorRight);
                }
                (KeyCode::Char(ch), mods)
                    if mods.is_empty() || mods == KeyModifiers::SHIFT =>
                {
                    let _ = self.dispatch_kernel(Action::InputDialogAppend(ch));
                }
                _ => return EventResult::Consumed,
            }
            // Dialog is modal; nothing below should see the key.
            return EventResult::Consumed;
        }

        if self.store.state().ui.confirm_dialog.visible {
            match key_event.code {
                KeyCode::Enter => {
                    let _ = self.dispatch_kernel(Action::ConfirmDialogAccept);
                }
                KeyCode::Esc => {
                    let _ = self.dispatch_kernel(Action::ConfirmDialogCancel);
                }
                _ => {}
            }
            return EventResult::Consumed;
        }

        if self.store.state().ui.picker.visible {
            let page = self.store.state().ui.picker.view_height.max(1) as isize;
            match (key_event.code, key_event.modifiers) {
                (KeyCode::Esc, _) => {
                    let _ = self.dispatch_kernel(Action::PickerCancel);
                }
                (KeyCode::Enter, _) => {
                    let _ = self.dispatch_kernel(Action::PickerEnter);
                }
                (KeyCode::Up, _) => {
                    let _ = self.dispatch_kernel(Action::PickerMoveSelection { delta: -1 });
                }
                (KeyCode::Down, _) => {
                    let _ = self.dispatch_kernel(Action::PickerMoveSelection { delta: 1 });
                }
                (KeyCode::PageUp, _) => {
                    let _ = self.dispatch_kernel(Action::PickerMoveSelection { delta: -page });
                }
                (KeyCode::PageDown, _) => {
                    let _ = self.dispatch_kernel(Action::PickerMoveSelection { delta: page });
                }
                (KeyCode::Char(' '), mods) if mods.is_empty() => {
                    let _ = self.dispatch_kernel(Action::PickerToggleMark);
                }
                _ => {}
            }
            return EventResult::Consumed;
        }

        let key = Key::from(*key_event);
        let page = self.store.state().explorer.view_height.max(1) as isize;
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), mods) if mods == KeyModifiers::CONTROL => {
                self.run_command(Command::Quit)
            }
            (KeyCode::Char('q'), mods) if mods.is_empty() => self.run_command(Command::Quit),
            (KeyCode::Up, _) => self.consume(Action::ExplorerMoveSelection { delta: -1 }),
            (KeyCode::Down, _) => self.consume(Action::ExplorerMoveSelection { delta: 1 }),
            (KeyCode::PageUp, _) => self.consume(Action::ExplorerMoveSelection { delta: -page }),
            (KeyCode::PageDown, _) => self.consume(Action::ExplorerMoveSelection { delta: page }),
            (KeyCode::Home, _) => self.consume(Action::ExplorerSelectFirst),
            (KeyCode::End, _) => self.consume(Action::ExplorerSelectLast),
            (KeyCode::Enter, _) => self.consume(Action::ExplorerActivate),
            (KeyCode::Left, _) => self.consume(Action::ExplorerCollapse),
            (KeyCode::Right, _) => self.consume(Action::ExplorerExpand),
            (KeyCode::Char('o'), mods) if mods.is_empty() => self.run_command(Command::OpenFile),
            (KeyCode::Char('r'), mods) if mods.is_empty() => self.run_command(Command::Refresh),
            (KeyCode::Char('n'), mods) if mods.is_empty() => self.run_command(Command::CreateFile),
            (KeyCode::Char('n'), mods) if mods == KeyModifiers::SHIFT => {
                self.run_command(Command::CreateFolder)
            }
            (KeyCode::F(2), _) => self.run_command(Command::Rename),
            (KeyCode::Delete, _) => self.run_command(Command::Remove),
            (KeyCode::Char('i'), mods) if mods.is_empty() => self.run_command(Command::ImportFile),
            (KeyCode::Char('m'), mods) if mods.is_empty() => {
                let anchor = self.menu_anchor();
                self.consume(Action::ContextMenuOpen { anchor })
            }
            _ => EventResult::Ignored,
        }
    }

    fn handle_mouse_event(&mut self, mouse_event: &MouseEvent) -> EventResult {
        // Dialogs are keyboard-driven; swallow mouse input while one is up.
        if self.store.state().ui.input_dialog.visible
            || self.store.state().ui.confirm_dialog.visible
            || self.store.state().ui.picker.visible
        {
            return EventResult::Consumed;
        }

        if self.store.state().ui.context_menu.visible {
            // A click elsewhere dismisses the menu, like any unbound key.
            if matches!(mouse_event.kind, MouseEventKind::Down(_)) {
                let _ = self.dispatch_kernel(Action::ContextMenuClose);
            }
            return EventResult::Consumed;
        }

        let scroll_offset = self.store.state().explorer.scroll_offset;
        let rows_len = self.store.state().explorer.rows.len();
        let hit = self
            .explorer
            .hit_test_row(mouse_event.column, mouse_event.row, scroll_offset)
            .filter(|row| *row < rows_len);

        match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(row) = hit {
                    let _ = self.dispatch_kernel(Action::ExplorerClickRow { row });
                }
                EventResult::Consumed
            }
            MouseEventKind::Down(MouseButton::Right) => {
                if let Some(row) = hit {
                    let _ = self.dispatch_kernel(Action::ExplorerClickRow { row });
                    let anchor = (mouse_event.column, mouse_event.row.saturating_add(1));
                    let _ = self.dispatch_kernel(Action::ContextMenuOpen { anchor });
                }
                EventResult::Consumed
            }
            MouseEventKind::ScrollUp
                if self.explorer.contains(mouse_event.column, mouse_event.row) =>
            {
                self.consume(Action::ExplorerScroll { delta: -3 })
            }
            MouseEventKind::ScrollDown
                if self.explorer.contains(mouse_event.column, mouse_event.row) =>
            {
                self.consume(Action::ExplorerScroll { delta: 3 })
            }
            _ => EventResult::Ignored,
        }
    }

    fn consume(&mut self, action: Action) -> EventResult {
        let _ = self.dispatch_kernel(action);
        EventResult::Consumed
    }

    fn run_command(&mut self, command: Command) -> EventResult {
        let _ = self.dispatch_kernel(Action::RunCommand(command));
        if self.store.state().ui.should_quit {
            return EventResult::Quit;
        }
        EventResult::Consumed
    }

    /// Places the menu just under and right of the selected row.
    fn menu_anchor(&self) -> (u16, u16) {
        let explorer = &self.store.state().explorer;
        let Some(area) = self.explorer.area() else {
            return (0, 0);
        };
        let row = explorer
            .selected
            .unwrap_or(0)
            .saturating_sub(explorer.scroll_offset)
            .min(u16::MAX as usize) as u16;
        (
            area.x.saturating_add(4),
            area.y.saturating_add(row).saturating_add(1),
        )
    }
}
