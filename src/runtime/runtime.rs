use std::io;
use std::path::PathBuf;
use std::sync::mpsc::Sender;

use rustc_hash::FxHashSet;

use super::message::{PanelMessage, PickerEntry};
use crate::config::ProjectionConfig;
use crate::fs;
use crate::tree::{self, NodeKey};

/// Bridges the synchronous UI loop to tokio. Every operation spawns a task
/// and reports back over the channel; nothing here blocks the caller.
pub struct PanelRuntime {
    runtime: tokio::runtime::Runtime,
    tx: Sender<PanelMessage>,
}

impl PanelRuntime {
    pub fn new(tx: Sender<PanelMessage>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self { runtime, tx })
    }

    pub fn project_tree(&self, config: ProjectionConfig, expanded: FxHashSet<NodeKey>) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let rows = tree::project_rows(&config, &expanded).await;
            let _ = tx.send(PanelMessage::TreeProjected { rows });
        });
    }

    pub fn create_dir(&self, path: PathBuf) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            match fs::make_directories(&path).await {
                Ok(()) => {
                    let _ = tx.send(PanelMessage::TreeChanged);
                }
                Err(e) => {
                    tracing::error!(path = %path.display(), error = %e, "create folder failed");
                    let _ = tx.send(PanelMessage::FsOpFailed {
                        op: "createFolder",
                        path,
                        error: e.to_string(),
                    });
                }
            }
        });
    }

    pub fn create_file(&self, path: PathBuf) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            match fs::create_new_file(&path).await {
                Ok(()) => {
                    let _ = tx.send(PanelMessage::TreeChanged);
                }
                Err(e) => {
                    tracing::error!(path = %path.display(), error = %e, "create file failed");
                    let _ = tx.send(PanelMessage::FsOpFailed {
                        op: "createFile",
                        path,
                        error: e.to_string(),
                    });
                }
            }
        });
    }

    pub fn rename_path(&self, from: PathBuf, to: PathBuf) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            // Never clobber an existing entry with a rename.
            if fs::exists(&to).await {
                let error = fs::FsError::AlreadyExists(to.clone());
                let _ = tx.send(PanelMessage::FsOpFailed {
                    op: "rename",
                    path: to,
                    error: error.to_string(),
                });
                return;
            }
            match fs::rename(&from, &to).await {
                Ok(()) => {
                    let _ = tx.send(PanelMessage::TreeChanged);
                }
                Err(e) => {
                    tracing::error!(
                        from = %from.display(),
                        to = %to.display(),
                        error = %e,
                        "rename failed"
                    );
                    let _ = tx.send(PanelMessage::FsOpFailed {
                        op: "rename",
                        path: from,
                        error: e.to_string(),
                    });
                }
            }
        });
    }

    pub fn delete_path(&self, path: PathBuf) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            match fs::remove_recursive(&path).await {
                Ok(()) => {
                    let _ = tx.send(PanelMessage::TreeChanged);
                }
                Err(e) => {
                    tracing::error!(path = %path.display(), error = %e, "delete failed");
                    let _ = tx.send(PanelMessage::FsOpFailed {
                        op: "remove",
                        path,
                        error: e.to_string(),
                    });
                }
            }
        });
    }

    /// Copies each source into `dest_dir` under its own name. Copies run
    /// concurrently; failures are reported per file, and the single refresh
    /// signal goes out only after every copy has settled.
    pub fn import_files(&self, sources: Vec<PathBuf>, dest_dir: PathBuf) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let mut copies = Vec::with_capacity(sources.len());
            for src in sources {
                let Some(name) = src.file_name() else {
                    continue;
                };
                let dst = dest_dir.join(name);
                let tx = tx.clone();
                copies.push(tokio::spawn(async move {
                    if fs::exists(&dst).await {
                        let error = fs::FsError::AlreadyExists(dst.clone());
                        let _ = tx.send(PanelMessage::FsOpFailed {
                            op: "importFile",
                            path: dst,
                            error: error.to_string(),
                        });
                        return;
                    }
                    if let Err(e) = fs::copy_file(&src, &dst).await {
                        tracing::error!(src = %src.display(), error = %e, "import failed");
                        let _ = tx.send(PanelMessage::FsOpFailed {
                            op: "importFile",
                            path: src,
                            error: e.to_string(),
                        });
                    }
                }));
            }
            for copy in copies {
                let _ = copy.await;
            }
            let _ = tx.send(PanelMessage::TreeChanged);
        });
    }

    pub fn load_picker_dir(&self, dir: PathBuf) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            match fs::read_dir_entries(&dir).await {
                Ok(mut entries) => {
                    entries.retain(|entry| !entry.name.starts_with('.'));
                    entries.sort_by(tree::listing_order);
                    let entries = entries
                        .into_iter()
                        .map(|entry| PickerEntry {
                            is_dir: entry.kind.is_directory(),
                            name: entry.name,
                        })
                        .collect();
                    let _ = tx.send(PanelMessage::PickerDirLoaded { dir, entries });
                }
                Err(e) => {
                    tracing::warn!(dir = %dir.display(), error = %e, "picker listing failed");
                    let _ = tx.send(PanelMessage::FsOpFailed {
                        op: "importFile",
                        path: dir,
                        error: e.to_string(),
                    });
                }
            }
        });
    }
}
