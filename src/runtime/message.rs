//! 异步消息定义

use std::path::PathBuf;

use crate::tree::TreeNode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEntry {
    pub name: String,
    pub is_dir: bool,
}

#[derive(Debug)]
pub enum PanelMessage {
    TreeProjected {
        rows: Vec<TreeNode>,
    },
    /// A filesystem mutation landed; the tree should be reprojected.
    TreeChanged,
    PickerDirLoaded {
        dir: PathBuf,
        entries: Vec<PickerEntry>,
    },
    FsOpFailed {
        op: &'static str,
        path: PathBuf,
        error: String,
    },
}
