use std::path::PathBuf;

use crate::config::Settings;
use crate::core::Command;
use crate::runtime::PickerEntry;
use crate::tree::TreeNode;

#[derive(Debug, Clone)]
pub enum Action {
    RunCommand(Command),
    SettingsReloaded {
        settings: Settings,
    },
    TreeProjected {
        rows: Vec<TreeNode>,
    },
    TreeChanged,
    FsOpFailed {
        op: &'static str,
        path: PathBuf,
        error: String,
    },
    ExplorerSetViewHeight {
        height: usize,
    },
    ExplorerMoveSelection {
        delta: isize,
    },
    ExplorerSelectFirst,
    ExplorerSelectLast,
    ExplorerClickRow {
        row: usize,
    },
    ExplorerScroll {
        delta: isize,
    },
    ExplorerActivate,
    ExplorerCollapse,
    ExplorerExpand,
    InputDialogAppend(char),
    InputDialogBackspace,
    InputDialogCursorLeft,
    InputDialogCursorRight,
    InputDialogAccept,
    InputDialogCancel,
    ConfirmDialogAccept,
    ConfirmDialogCancel,
    ContextMenuOpen {
        anchor: (u16, u16),
    },
    ContextMenuClose,
    ContextMenuMoveSelection {
        delta: isize,
    },
    ContextMenuConfirm,
    PickerDirLoaded {
        dir: PathBuf,
        entries: Vec<PickerEntry>,
    },
    PickerSetViewHeight {
        height: usize,
    },
    PickerMoveSelection {
        delta: isize,
    },
    PickerToggleMark,
    PickerEnter,
    PickerCancel,
}
