//! Virtual tree model.
//!
//! Nodes are ephemeral: recomputed on every children query, discarded on
//! refresh. Only the (depth, location) pair identifies a node across
//! queries; ancestry is re-derived from the origin tag, never stored.

use crate::config::ProjectionConfig;
use crate::fs::{DirEntry, FileKind};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

pub mod projector;

pub use projector::{children, project_rows};

/// Which physical root a node was projected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    Project,
    Server,
}

impl Origin {
    /// Base directory the origin's shadow trees hang off.
    pub fn base_dir(self, config: &ProjectionConfig) -> PathBuf {
        match self {
            Origin::Project => config.project_base(),
            Origin::Server => config.server_base(),
        }
    }
}

/// The seven shadow directories expanded under every depth-0 category, in
/// display order.
pub const SHADOW_DIRS: [(&str, Origin); 7] = [
    ("html", Origin::Project),
    ("cdn_js", Origin::Project),
    ("cdn_css", Origin::Project),
    ("cdn_img", Origin::Project),
    ("less", Origin::Project),
    ("controller", Origin::Server),
    ("model", Origin::Server),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Absolute filesystem path.
    pub location: PathBuf,
    pub kind: FileKind,
    /// 0 = category roots, 1 = the seven shadows, >=2 = real subtree.
    pub depth: u16,
    /// Display override; only depth-1 nodes carry one.
    pub label: Option<&'static str>,
    pub origin: Origin,
}

/// Expansion bookkeeping key; the only identity that survives a refresh.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeKey {
    pub depth: u16,
    pub location: PathBuf,
}

impl TreeNode {
    pub fn key(&self) -> NodeKey {
        NodeKey {
            depth: self.depth,
            location: self.location.clone(),
        }
    }

    /// Display title: the label override when present, else the basename.
    pub fn title(&self) -> String {
        if let Some(label) = self.label {
            return label.to_string();
        }
        self.location
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.location.display().to_string())
    }

    /// Human-readable `{shadow}/{rel}` form for prompts, derived from the
    /// origin tag and the location relative to that origin's base.
    pub fn project_path(&self, config: &ProjectionConfig) -> String {
        display_path(config, self.origin, &self.location)
    }
}

/// `{shadow}/{rel}` form of any location under `origin`; falls back to the
/// absolute path when `location` is outside the origin's base.
pub fn display_path(config: &ProjectionConfig, origin: Origin, location: &Path) -> String {
    let base = origin.base_dir(config);
    match location.strip_prefix(&base) {
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => location.display().to_string(),
    }
}

/// Affordance class used to gate context actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeTag {
    /// Plain file: openable, renamable, deletable.
    File,
    /// Symlink or unknown entry; nothing attaches.
    Leaf,
    /// Depth-0 category root.
    CategoryRoot,
    /// One of the seven fixed depth-1 shadows.
    ShadowRoot,
    /// Depth-2 directory: pseudo-category, not renamable or deletable.
    LabelFolder,
    /// Ordinary directory, fully mutable.
    Folder,
}

impl NodeTag {
    pub fn of(node: &TreeNode) -> Self {
        match node.kind {
            FileKind::File => NodeTag::File,
            FileKind::Directory => match node.depth {
                0 => NodeTag::CategoryRoot,
                1 => NodeTag::ShadowRoot,
                2 => NodeTag::LabelFolder,
                _ => NodeTag::Folder,
            },
            FileKind::SymbolicLink | FileKind::Unknown => NodeTag::Leaf,
        }
    }

    pub fn allows_create(self) -> bool {
        matches!(
            self,
            NodeTag::CategoryRoot | NodeTag::ShadowRoot | NodeTag::LabelFolder | NodeTag::Folder
        )
    }

    pub fn allows_rename(self) -> bool {
        matches!(self, NodeTag::File | NodeTag::Folder)
    }

    pub fn allows_remove(self) -> bool {
        matches!(self, NodeTag::File | NodeTag::Folder)
    }
}

/// Per-node display contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeItem {
    pub title: String,
    pub expandable: bool,
    pub opens_file: bool,
    pub tag: NodeTag,
}

pub fn tree_item(node: &TreeNode) -> TreeItem {
    TreeItem {
        title: node.title(),
        expandable: node.kind.is_directory(),
        opens_file: node.kind == FileKind::File,
        tag: NodeTag::of(node),
    }
}

/// Depth-0 ordering. Unequal kinds compare as a constant Greater; the root
/// filter keeps directories only, so in practice ordering is by name.
pub fn category_order(a: &DirEntry, b: &DirEntry) -> Ordering {
    if a.kind == b.kind {
        a.name.cmp(&b.name)
    } else {
        Ordering::Greater
    }
}

/// Deep-listing ordering: directories before files, then ordinal name order.
pub fn listing_order(a: &DirEntry, b: &DirEntry) -> Ordering {
    match (a.kind.is_directory(), b.kind.is_directory()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name.cmp(&b.name),
    }
}
