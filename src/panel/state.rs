use std::path::PathBuf;

use rustc_hash::FxHashSet;

use crate::config::ProjectionConfig;
use crate::core::Command;
use crate::runtime::PickerEntry;
use crate::tree::{NodeKey, NodeTag, TreeNode};

use super::effect::Effect;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputDialogKind {
    NewFile { parent_dir: PathBuf },
    NewFolder { parent_dir: PathBuf },
    RenameEntry { from: PathBuf },
}

#[derive(Debug, Clone, Default)]
pub struct InputDialogState {
    pub visible: bool,
    pub title: String,
    pub value: String,
    /// Byte offset into `value`.
    pub cursor: usize,
    /// Byte range replaced by the next append or backspace. Rename pre-selects
    /// the name stem so typing overwrites it while the extension survives.
    pub selection: Option<(usize, usize)>,
    pub error: Option<String>,
    pub kind: Option<InputDialogKind>,
}

impl InputDialogState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DeletePath { path: PathBuf },
}

#[derive(Debug, Clone, Default)]
pub struct ConfirmDialogState {
    pub visible: bool,
    pub message: String,
    pub on_confirm: Option<PendingAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMenuEntry {
    Action(Command),
    Separator,
}

impl ContextMenuEntry {
    pub fn label(&self) -> &'static str {
        match self {
            ContextMenuEntry::Action(cmd) => cmd.menu_label(),
            ContextMenuEntry::Separator => "",
        }
    }

    pub fn is_selectable(&self) -> bool {
        matches!(self, ContextMenuEntry::Action(_))
    }

    pub fn command(&self) -> Option<Command> {
        match self {
            ContextMenuEntry::Action(cmd) => Some(*cmd),
            ContextMenuEntry::Separator => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContextMenuState {
    pub visible: bool,
    pub anchor: (u16, u16),
    pub selected: usize,
    pub items: Vec<ContextMenuEntry>,
}

/// Modal directory browser backing the import command. Marks survive
/// navigation so files can be collected from several directories.
#[derive(Debug, Clone, Default)]
pub struct ImportPickerState {
    pub visible: bool,
    pub dir: PathBuf,
    pub entries: Vec<PickerEntry>,
    pub selected: usize,
    pub scroll_offset: usize,
    pub view_height: usize,
    pub marked: FxHashSet<PathBuf>,
    pub dest_dir: PathBuf,
    /// Project-path form of `dest_dir`, composed when the picker opens.
    pub dest_label: String,
}

impl ImportPickerState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Replace the listing after an async directory load. A `..` row is
    /// synthesized on top whenever the directory has a parent.
    pub fn apply_entries(&mut self, dir: PathBuf, entries: Vec<PickerEntry>) -> bool {
        if !self.visible {
            return false;
        }

        let mut entries = entries;
        if dir.parent().is_some() {
            entries.insert(
                0,
                PickerEntry {
                    name: "..".to_string(),
                    is_dir: true,
                },
            );
        }

        self.dir = dir;
        self.entries = entries;
        self.selected = 0;
        self.scroll_offset = 0;
        true
    }

    pub fn set_view_height(&mut self, height: usize) -> bool {
        let height = height.max(1);
        if self.view_height == height {
            return false;
        }
        self.view_height = height;
        self.keep_row_visible(self.selected);
        true
    }

    pub fn move_selection(&mut self, delta: isize) -> bool {
        if self.entries.is_empty() || delta == 0 {
            return false;
        }

        let current = self.selected.min(self.entries.len() - 1);
        let next = if delta < 0 {
            current.saturating_sub((-delta) as usize)
        } else {
            (current + delta as usize).min(self.entries.len() - 1)
        };

        if next == self.selected {
            return false;
        }
        self.selected = next;
        self.keep_row_visible(next);
        true
    }

    pub fn selected_entry(&self) -> Option<&PickerEntry> {
        self.entries.get(self.selected)
    }

    /// Absolute path of the selected row; `..` resolves to the parent.
    pub fn selected_path(&self) -> Option<PathBuf> {
        let entry = self.selected_entry()?;
        if entry.name == ".." {
            return self.dir.parent().map(|p| p.to_path_buf());
        }
        Some(self.dir.join(&entry.name))
    }

    /// Toggle the mark on the selected row. Only plain files are markable.
    pub fn toggle_mark(&mut self) -> bool {
        let Some(entry) = self.selected_entry() else {
            return false;
        };
        if entry.is_dir {
            return false;
        }
        let path = self.dir.join(&entry.name);
        if !self.marked.remove(&path) {
            self.marked.insert(path);
        }
        true
    }

    pub fn is_marked(&self, entry: &PickerEntry) -> bool {
        !entry.is_dir && self.marked.contains(&self.dir.join(&entry.name))
    }

    /// Import set on accept: every marked file plus the file under the
    /// cursor, in stable order.
    pub fn accept_targets(&self) -> (Vec<PathBuf>, PathBuf) {
        let mut sources: Vec<PathBuf> = self.marked.iter().cloned().collect();
        if let Some(entry) = self.selected_entry() {
            if !entry.is_dir {
                let path = self.dir.join(&entry.name);
                if !self.marked.contains(&path) {
                    sources.push(path);
                }
            }
        }
        sources.sort();
        (sources, self.dest_dir.clone())
    }

    fn clamp_scroll(&mut self) {
        let max_scroll = self
            .entries
            .len()
            .saturating_sub(self.view_height.max(1));
        self.scroll_offset = self.scroll_offset.min(max_scroll);
    }

    fn keep_row_visible(&mut self, row_index: usize) {
        let view_height = self.view_height.max(1);

        if row_index < self.scroll_offset {
            self.scroll_offset = row_index;
            self.clamp_scroll();
            return;
        }

        if row_index >= self.scroll_offset + view_height {
            self.scroll_offset = row_index.saturating_sub(view_height - 1);
        }

        self.clamp_scroll();
    }
}

#[derive(Debug, Clone)]
pub struct ExplorerState {
    pub rows: Vec<TreeNode>,
    pub expanded: FxHashSet<NodeKey>,
    pub selected: Option<usize>,
    pub view_height: usize,
    pub scroll_offset: usize,
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            expanded: FxHashSet::default(),
            selected: None,
            view_height: 10,
            scroll_offset: 0,
        }
    }
}

impl ExplorerState {
    pub fn selected_row(&self) -> Option<&TreeNode> {
        self.rows.get(self.selected?)
    }

    pub fn set_view_height(&mut self, height: usize) -> bool {
        let height = height.max(1);
        if self.view_height == height {
            return false;
        }
        self.view_height = height;

        if let Some(index) = self.selected {
            self.keep_row_visible(index);
        } else {
            self.clamp_scroll();
        }

        true
    }

    pub fn move_selection(&mut self, delta: isize) -> bool {
        if self.rows.is_empty() || delta == 0 {
            return false;
        }

        let current = match self.selected {
            Some(index) => index.min(self.rows.len() - 1),
            None => {
                let index = if delta < 0 { self.rows.len() - 1 } else { 0 };
                self.selected = Some(index);
                self.keep_row_visible(index);
                return true;
            }
        };

        let next = if delta < 0 {
            current.saturating_sub((-delta) as usize)
        } else {
            (current + delta as usize).min(self.rows.len() - 1)
        };

        if Some(next) == self.selected {
            return false;
        }

        self.selected = Some(next);
        self.keep_row_visible(next);
        true
    }

    pub fn select_first(&mut self) -> bool {
        if self.rows.is_empty() || self.selected == Some(0) {
            return false;
        }
        self.selected = Some(0);
        self.keep_row_visible(0);
        true
    }

    pub fn select_last(&mut self) -> bool {
        if self.rows.is_empty() {
            return false;
        }
        let last = self.rows.len() - 1;
        if self.selected == Some(last) {
            return false;
        }
        self.selected = Some(last);
        self.keep_row_visible(last);
        true
    }

    pub fn select_row(&mut self, row: usize) -> bool {
        if row >= self.rows.len() || self.selected == Some(row) {
            return false;
        }
        self.selected = Some(row);
        self.keep_row_visible(row);
        true
    }

    /// Moves the viewport without touching the selection; the next keyboard
    /// move snaps the selection back into view.
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        let max_scroll = self.rows.len().saturating_sub(self.view_height.max(1));
        let target = if delta < 0 {
            self.scroll_offset.saturating_sub((-delta) as usize)
        } else {
            (self.scroll_offset + delta as usize).min(max_scroll)
        };
        if target == self.scroll_offset {
            return false;
        }
        self.scroll_offset = target;
        true
    }

    /// Enter on a directory toggles it; Enter on a file requests an open.
    pub fn activate_selected(&mut self) -> (bool, Vec<Effect>) {
        let Some(row) = self.selected_row() else {
            return (false, Vec::new());
        };

        if row.kind.is_directory() {
            return self.toggle_expanded(row.key());
        }

        if NodeTag::of(row) != NodeTag::File {
            return (false, Vec::new());
        }
        (false, vec![Effect::OpenFile(row.location.clone())])
    }

    pub fn collapse_selected(&mut self) -> (bool, Vec<Effect>) {
        let Some(row) = self.selected_row() else {
            return (false, Vec::new());
        };
        if !row.kind.is_directory() {
            return (false, Vec::new());
        }

        let key = row.key();
        if !self.expanded.remove(&key) {
            return (false, Vec::new());
        }
        (true, vec![Effect::ProjectTree])
    }

    /// Right expands a collapsed directory; on an already expanded one it
    /// steps into the first child instead.
    pub fn expand_selected(&mut self) -> (bool, Vec<Effect>) {
        let Some(row) = self.selected_row() else {
            return (false, Vec::new());
        };
        if !row.kind.is_directory() {
            return (false, Vec::new());
        }

        let key = row.key();
        if self.expanded.contains(&key) {
            return (self.move_selection(1), Vec::new());
        }
        self.expanded.insert(key);
        (true, vec![Effect::ProjectTree])
    }

    /// Replace the projected rows, carrying the selection over by node key
    /// when the same node is still visible. The first non-empty projection
    /// puts the cursor on the top row.
    pub fn apply_rows(&mut self, rows: Vec<TreeNode>) -> bool {
        let prev_selected = self.selected;
        let prev_key = self.selected_row().map(|row| row.key());

        let rows_changed = self.rows != rows;
        self.rows = rows;

        self.selected = match prev_key {
            Some(key) => match self.rows.iter().position(|row| row.key() == key) {
                Some(index) => Some(index),
                None if self.rows.is_empty() => None,
                None => prev_selected.map(|index| index.min(self.rows.len() - 1)),
            },
            None if self.rows.is_empty() => None,
            None => Some(0),
        };

        if let Some(index) = self.selected {
            self.keep_row_visible(index);
        } else {
            self.clamp_scroll();
        }

        rows_changed || self.selected != prev_selected
    }

    /// Directory that create and import operations target: the selected
    /// directory itself, or the containing directory of a selected file.
    pub fn create_parent_dir(&self) -> Option<PathBuf> {
        let row = self.selected_row()?;
        match NodeTag::of(row) {
            tag if tag.allows_create() => Some(row.location.clone()),
            NodeTag::File => row.location.parent().map(|p| p.to_path_buf()),
            _ => None,
        }
    }

    fn toggle_expanded(&mut self, key: NodeKey) -> (bool, Vec<Effect>) {
        if !self.expanded.remove(&key) {
            self.expanded.insert(key);
        }
        (true, vec![Effect::ProjectTree])
    }

    fn clamp_scroll(&mut self) {
        let max_scroll = self.rows.len().saturating_sub(self.view_height.max(1));
        self.scroll_offset = self.scroll_offset.min(max_scroll);
    }

    fn keep_row_visible(&mut self, row_index: usize) {
        let view_height = self.view_height.max(1);

        if row_index < self.scroll_offset {
            self.scroll_offset = row_index;
            self.clamp_scroll();
            return;
        }

        if row_index >= self.scroll_offset + view_height {
            self.scroll_offset = row_index.saturating_sub(view_height - 1);
        }

        self.clamp_scroll();
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub input_dialog: InputDialogState,
    pub confirm_dialog: ConfirmDialogState,
    pub context_menu: ContextMenuState,
    pub picker: ImportPickerState,
    pub status: Option<String>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PanelState {
    /// `None` until both roots are configured in settings.
    pub config: Option<ProjectionConfig>,
    pub ui: UiState,
    pub explorer: ExplorerState,
}

impl PanelState {
    pub fn new(config: Option<ProjectionConfig>) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/panel/state.rs"]
mod tests;
