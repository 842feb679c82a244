//! File-backed token store
//!
//! Stores all keys in a single JSON object:
//!
//! ```json
//! {
//!   "token": "eyJhbGciOi...",
//!   "refresh": "eyJhbGciOi...",
//!   "email": "alice@example.com"
//! }
//! ```
//!
//! Every mutation rewrites the whole file through a temporary sibling and a
//! rename, so readers never see a half-written file.

use super::TokenStore;
use crate::error::{GalleryError, GalleryResult};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// JSON file token store with an in-memory copy of its contents
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileTokenStore {
    /// Open (or lazily create) the store at `path`
    pub fn open(path: impl Into<PathBuf>) -> GalleryResult<Self> {
        let path = path.into();
        let entries = Self::read_entries(&path)?;
        debug!("Opened session store {} ({} keys)", path.display(), entries.len());
        Ok(Self { path, entries })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(path: &Path) -> GalleryResult<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| GalleryError::io(format!("reading session file {}", path.display()), e))?;

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|e| GalleryError::storage(path, e))
    }

    /// Persist `entries` to disk, replacing the file atomically
    fn write_entries(&self, entries: &BTreeMap<String, String>) -> GalleryResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| GalleryError::io(format!("creating directory {}", parent.display()), e))?;
        }

        if entries.is_empty() {
            if self.path.exists() {
                fs::remove_file(&self.path).map_err(|e| {
                    GalleryError::io(format!("removing session file {}", self.path.display()), e)
                })?;
            }
            return Ok(());
        }

        let content = serde_json::to_string_pretty(entries)?;
        let tmp = self
            .path
            .with_extension(format!("{}.tmp", uuid::Uuid::new_v4().simple()));

        fs::write(&tmp, content)
            .map_err(|e| GalleryError::io(format!("writing session file {}", tmp.display()), e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&tmp, perms)
                .map_err(|e| GalleryError::io("setting session file permissions", e))?;
        }

        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            GalleryError::io(format!("replacing session file {}", self.path.display()), e)
        })
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> GalleryResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> GalleryResult<()> {
        let mut next = self.entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.write_entries(&next)?;
        self.entries = next;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> GalleryResult<()> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        let mut next = self.entries.clone();
        next.remove(key);
        self.write_entries(&next)?;
        self.entries = next;
        Ok(())
    }
}
