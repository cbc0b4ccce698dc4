//! Children queries and the visible-row walk.
//!
//! Depth drives everything: the root lists category folders under the html
//! root, depth 0 expands into the seven fixed shadows, depth 1 lists
//! second-level folders, anything deeper is a plain directory listing.

use super::{category_order, listing_order, NodeKey, Origin, TreeNode, SHADOW_DIRS};
use crate::config::ProjectionConfig;
use crate::fs::{self, DirEntry, FileKind, FsResult};
use rustc_hash::FxHashSet;
use std::path::Path;

/// Children of `node`, or the depth-0 categories when `node` is `None`.
pub async fn children(
    config: &ProjectionConfig,
    node: Option<&TreeNode>,
) -> FsResult<Vec<TreeNode>> {
    match node {
        None => root_categories(config).await,
        Some(node) if !node.kind.is_directory() => Ok(Vec::new()),
        Some(node) if node.depth == 0 => Ok(shadow_dirs(config, node)),
        Some(node) if node.depth == 1 => shadow_children(config, node).await,
        Some(node) => deep_children(node).await,
    }
}

async fn root_categories(config: &ProjectionConfig) -> FsResult<Vec<TreeNode>> {
    let html_root = config.html_root();
    let mut entries = fs::read_dir_entries(&html_root).await?;
    entries.retain(|e| e.kind.is_directory());
    if let Some(allow) = &config.allow {
        entries.retain(|e| allow.allows_top(&e.name));
    }
    entries.sort_by(category_order);

    Ok(entries
        .into_iter()
        .map(|e| TreeNode {
            location: html_root.join(&e.name),
            kind: e.kind,
            depth: 0,
            label: None,
            origin: Origin::Project,
        })
        .collect())
}

/// The seven fixed nodes under a category. Purely synthetic: emitted whether
/// or not the directories exist on disk.
fn shadow_dirs(config: &ProjectionConfig, category: &TreeNode) -> Vec<TreeNode> {
    let html_root = config.html_root();
    let rel = category
        .location
        .strip_prefix(&html_root)
        .unwrap_or(Path::new(""))
        .to_path_buf();

    SHADOW_DIRS
        .iter()
        .map(|&(label, origin)| TreeNode {
            location: origin.base_dir(config).join(label).join(&rel),
            kind: FileKind::Directory,
            depth: 1,
            label: Some(label),
            origin,
        })
        .collect()
}

async fn shadow_children(config: &ProjectionConfig, shadow: &TreeNode) -> FsResult<Vec<TreeNode>> {
    let mut entries = fs::read_dir_entries(&shadow.location).await?;
    entries.retain(|e| e.kind.is_directory());
    if let Some(allow) = &config.allow {
        entries.retain(|e| allow.allows_second(&e.name));
    }
    entries.sort_by(listing_order);

    Ok(entries
        .into_iter()
        .map(|e| child_node(shadow, e))
        .collect())
}

async fn deep_children(parent: &TreeNode) -> FsResult<Vec<TreeNode>> {
    let mut entries = fs::read_dir_entries(&parent.location).await?;
    entries.sort_by(listing_order);

    Ok(entries
        .into_iter()
        .map(|e| child_node(parent, e))
        .collect())
}

fn child_node(parent: &TreeNode, entry: DirEntry) -> TreeNode {
    TreeNode {
        location: parent.location.join(&entry.name),
        kind: entry.kind,
        depth: parent.depth + 1,
        label: None,
        origin: parent.origin,
    }
}

/// Flattens the visible tree in preorder, expanding the nodes whose keys
/// appear in `expanded`. A subtree whose listing fails projects as
/// childless with a warn log; the walk itself never fails.
pub async fn project_rows(
    config: &ProjectionConfig,
    expanded: &FxHashSet<NodeKey>,
) -> Vec<TreeNode> {
    let mut rows = Vec::new();
    let mut stack: Vec<TreeNode> = Vec::new();

    match children(config, None).await {
        Ok(mut roots) => {
            roots.reverse();
            stack.extend(roots);
        }
        Err(e) => tracing::warn!(error = %e, "category listing failed"),
    }

    while let Some(node) = stack.pop() {
        let mut kids = Vec::new();
        if node.kind.is_directory() && expanded.contains(&node.key()) {
            match children(config, Some(&node)).await {
                Ok(c) => kids = c,
                Err(e) => {
                    tracing::warn!(path = %node.location.display(), error = %e, "child listing failed");
                }
            }
        }
        rows.push(node);
        kids.reverse();
        stack.extend(kids);
    }

    rows
}
