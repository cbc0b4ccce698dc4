//! Settings file and projection configuration.
//!
//! The settings file keeps the original host-side key names (`wwwPath` for
//! the server root, `wwwProjectPath` for the client project root,
//! `includes` for the allow-list). A `ProjectionConfig` is derived from it
//! per projection and passed explicitly; the projector never caches
//! configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SETTINGS_DIR: &str = ".njwaptree";
const SETTINGS_FILE: &str = "settings.json";
const LOG_DIR: &str = "logs";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Server root (`{wwwPath}/njwap_server/...`).
    pub www_path: Option<String>,
    /// Client project root (`{wwwProjectPath}/njwap/src/...`).
    pub www_project_path: Option<String>,
    /// Optional `"top/second"` allow-list entries.
    pub includes: Option<Vec<String>>,
    /// External editor command; falls back to $VISUAL / $EDITOR / vi.
    pub editor: Option<String>,
}

pub fn get_settings_path() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

pub fn ensure_settings_file() -> std::io::Result<PathBuf> {
    let path = get_settings_path().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine settings directory",
        )
    })?;
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content =
            serde_json::to_string_pretty(&Settings::default()).unwrap_or_else(|_| "{}".to_string());
        std::fs::write(&path, content)?;
    }
    Ok(path)
}

pub fn load_settings_from(path: &Path) -> Option<Settings> {
    let data = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_cache_dir()
        .map(|dir| dir.join(SETTINGS_DIR).join(LOG_DIR))
        .ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "Cannot determine log directory")
        })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// Starting directory for the import file picker.
pub fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("/"))
}

/// Editor command for the open-file hand-off.
pub fn editor_command(settings: &Settings) -> String {
    settings
        .editor
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var("VISUAL").ok().filter(|v| !v.trim().is_empty()))
        .or_else(|| std::env::var("EDITOR").ok().filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| "vi".to_string())
}

fn get_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".cache"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            return Some(PathBuf::from(local));
        }
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

/// Immutable per-query projection parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionConfig {
    pub client_root: PathBuf,
    pub server_root: PathBuf,
    pub allow: Option<AllowList>,
}

impl ProjectionConfig {
    /// Both roots must be configured; otherwise there is nothing to project.
    pub fn from_settings(settings: &Settings) -> Option<Self> {
        let server_root = settings
            .www_path
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())?;
        let client_root = settings
            .www_project_path
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())?;

        Some(Self {
            client_root: PathBuf::from(client_root),
            server_root: PathBuf::from(server_root),
            allow: settings.includes.as_deref().map(AllowList::parse),
        })
    }

    /// `{client_root}/njwap/src`, base of the five client shadow trees.
    pub fn project_base(&self) -> PathBuf {
        self.client_root.join("njwap").join("src")
    }

    /// `{server_root}/njwap_server`, base of the two server shadow trees.
    pub fn server_base(&self) -> PathBuf {
        self.server_root.join("njwap_server")
    }

    /// `{client_root}/njwap/src/html`, the depth-0 category listing root.
    pub fn html_root(&self) -> PathBuf {
        self.project_base().join("html")
    }
}

/// Parsed `"top/second"` allow-list. Top-level names filter depth-0
/// categories; second-level names filter depth-2 children globally (the
/// pairing is not scoped per top-level name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    pairs: Vec<(String, String)>,
}

impl AllowList {
    /// An entry without a separator filters only the top level (its second
    /// half is empty and never matches a real name).
    pub fn parse(entries: &[String]) -> Self {
        let pairs = entries
            .iter()
            .map(|entry| {
                let (top, second) = entry.split_once('/').unwrap_or((entry.as_str(), ""));
                (top.to_string(), second.to_string())
            })
            .collect();
        Self { pairs }
    }

    pub fn allows_top(&self, name: &str) -> bool {
        self.pairs.iter().any(|(top, _)| top == name)
    }

    pub fn allows_second(&self, name: &str) -> bool {
        self.pairs.iter().any(|(_, second)| second == name)
    }
}
