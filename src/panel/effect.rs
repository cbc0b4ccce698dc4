use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Re-read the settings file before the projection that follows.
    ReloadSettings,
    /// Recompute the visible tree rows from disk.
    ProjectTree,
    OpenFile(PathBuf),
    CreateDir(PathBuf),
    CreateFile(PathBuf),
    RenamePath {
        from: PathBuf,
        to: PathBuf,
    },
    DeletePath(PathBuf),
    ImportFiles {
        sources: Vec<PathBuf>,
        dest_dir: PathBuf,
    },
    LoadPickerDir(PathBuf),
}
