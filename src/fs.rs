//! Filesystem access shim.
//!
//! Thin async wrappers over `tokio::fs` that translate OS errors into a
//! small typed set and normalize filename encoding on platforms that hand
//! back decomposed Unicode. Listing a directory that cannot be read yields
//! an empty listing, not an error; everything else propagates typed.

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

pub type FsResult<T> = std::result::Result<T, FsError>;

#[derive(Debug)]
pub enum FsError {
    NotFound(PathBuf),
    IsADirectory(PathBuf),
    AlreadyExists(PathBuf),
    PermissionDenied(PathBuf),
    Cancelled,
    Io(io::Error),
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(p) => write!(f, "Not found: {}", p.display()),
            FsError::IsADirectory(p) => write!(f, "Is a directory: {}", p.display()),
            FsError::AlreadyExists(p) => write!(f, "Already exists: {}", p.display()),
            FsError::PermissionDenied(p) => write!(f, "Permission denied: {}", p.display()),
            FsError::Cancelled => write!(f, "Cancelled"),
            FsError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for FsError {}

impl From<io::Error> for FsError {
    fn from(e: io::Error) -> Self {
        FsError::Io(e)
    }
}

impl FsError {
    /// Maps the named OS error kinds; anything else is carried unchanged.
    pub fn from_io(path: &Path, e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            io::ErrorKind::IsADirectory => FsError::IsADirectory(path.to_path_buf()),
            io::ErrorKind::AlreadyExists => FsError::AlreadyExists(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(e),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    File,
    Directory,
    SymbolicLink,
    Unknown,
}

impl FileKind {
    pub fn from_file_type(ft: std::fs::FileType) -> Self {
        if ft.is_dir() {
            FileKind::Directory
        } else if ft.is_file() {
            FileKind::File
        } else if ft.is_symlink() {
            FileKind::SymbolicLink
        } else {
            FileKind::Unknown
        }
    }

    pub fn is_directory(self) -> bool {
        matches!(self, FileKind::Directory)
    }
}

#[derive(Debug, Clone)]
pub struct FileStat {
    pub kind: FileKind,
    pub size: u64,
    pub created: Option<SystemTime>,
    pub modified: Option<SystemTime>,
}

impl FileStat {
    pub fn from_metadata(meta: &std::fs::Metadata) -> Self {
        Self {
            kind: FileKind::from_file_type(meta.file_type()),
            size: meta.len(),
            created: meta.created().ok(),
            modified: meta.modified().ok(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DirEntry {
    pub name: String,
    pub kind: FileKind,
}

/// Lists entry names. An unreadable directory (missing, no permission, not
/// a directory) yields an empty listing so absent shadow directories render
/// as empty rather than failing the query.
pub async fn list_directory(path: &Path) -> Vec<String> {
    let mut dir = match tokio::fs::read_dir(path).await {
        Ok(dir) => dir,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "read_dir degraded to empty");
            return Vec::new();
        }
    };

    let mut names = Vec::new();
    loop {
        match dir.next_entry().await {
            Ok(Some(entry)) => names.push(entry.file_name().to_string_lossy().to_string()),
            Ok(None) => break,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "read_dir stopped early");
                break;
            }
        }
    }

    normalize_filenames(names)
}

/// Listing plus a stat per entry. The listing itself degrades to empty; a
/// failing stat on a listed entry propagates.
pub async fn read_dir_entries(path: &Path) -> FsResult<Vec<DirEntry>> {
    let mut entries = Vec::new();
    for name in list_directory(path).await {
        let child = path.join(&name);
        let st = stat(&child).await?;
        entries.push(DirEntry {
            name,
            kind: st.kind,
        });
    }
    Ok(entries)
}

/// Metadata of the entry at `path`, without following symlinks.
pub async fn stat(path: &Path) -> FsResult<FileStat> {
    match tokio::fs::symlink_metadata(path).await {
        Ok(meta) => Ok(FileStat::from_metadata(&meta)),
        Err(e) => Err(FsError::from_io(path, e)),
    }
}

pub async fn exists(path: &Path) -> bool {
    tokio::fs::symlink_metadata(path).await.is_ok()
}

pub async fn read_file(path: &Path) -> FsResult<Vec<u8>> {
    tokio::fs::read(path)
        .await
        .map_err(|e| FsError::from_io(path, e))
}

/// Create-or-truncate write.
pub async fn write_file(path: &Path, content: &[u8]) -> FsResult<()> {
    tokio::fs::write(path, content)
        .await
        .map_err(|e| FsError::from_io(path, e))
}

/// Creates an empty file, failing with AlreadyExists when one is present.
pub async fn create_new_file(path: &Path) -> FsResult<()> {
    tokio::fs::OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(path)
        .await
        .map(|_| ())
        .map_err(|e| FsError::from_io(path, e))
}

/// Idempotent recursive mkdir.
pub async fn make_directories(path: &Path) -> FsResult<()> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|e| FsError::from_io(path, e))
}

pub async fn remove_recursive(path: &Path) -> FsResult<()> {
    let st = stat(path).await?;
    let res = if st.kind.is_directory() {
        tokio::fs::remove_dir_all(path).await
    } else {
        tokio::fs::remove_file(path).await
    };
    res.map_err(|e| FsError::from_io(path, e))
}

pub async fn rename(from: &Path, to: &Path) -> FsResult<()> {
    tokio::fs::rename(from, to)
        .await
        .map_err(|e| FsError::from_io(from, e))
}

pub async fn copy_file(src: &Path, dst: &Path) -> FsResult<()> {
    tokio::fs::copy(src, dst)
        .await
        .map(|_| ())
        .map_err(|e| FsError::from_io(src, e))
}

/// macOS (HFS+/APFS) may return decomposed Unicode filenames; recompose to
/// NFC there, identity elsewhere.
pub fn normalize_filenames(names: Vec<String>) -> Vec<String> {
    if cfg!(target_os = "macos") {
        compose_nfc(names)
    } else {
        names
    }
}

fn compose_nfc(names: Vec<String>) -> Vec<String> {
    use unicode_normalization::{is_nfc, UnicodeNormalization};

    names
        .into_iter()
        .map(|name| {
            if is_nfc(&name) {
                name
            } else {
                name.nfc().collect()
            }
        })
        .collect()
}
