//! Durable key-value storage for session tokens
//!
//! The session manager reads this store once at start-up and writes or
//! deletes keys on every login/logout. Two backends are provided:
//!
//! - [`FileTokenStore`]: JSON file under the state directory, 0600 on Unix
//! - [`MemoryTokenStore`]: process-local map for tests and throwaway sessions

mod file;

pub use file::FileTokenStore;

use crate::error::GalleryResult;
use std::collections::BTreeMap;

/// Keys the session manager uses in the store.
pub mod keys {
    /// Access token
    pub const TOKEN: &str = "token";

    /// Refresh token
    pub const REFRESH: &str = "refresh";

    /// Email of the logged-in user
    pub const EMAIL: &str = "email";

    /// Every key owned by the session manager
    pub const ALL: [&str; 3] = [TOKEN, REFRESH, EMAIL];
}

/// Synchronous keyed string store.
///
/// Each call is atomic from the caller's point of view: a failed `set` or
/// `remove` leaves the previously stored value in place.
pub trait TokenStore: Send {
    /// Read a value, `Ok(None)` when the key is absent
    fn get(&self, key: &str) -> GalleryResult<Option<String>>;

    /// Store a value, overwriting any existing one
    fn set(&mut self, key: &str, value: &str) -> GalleryResult<()>;

    /// Delete a key. Deleting a missing key is not an error.
    fn remove(&mut self, key: &str) -> GalleryResult<()>;

    /// Check whether a key is present
    fn contains(&self, key: &str) -> GalleryResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}

/// In-memory store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    entries: BTreeMap<String, String>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with entries
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> GalleryResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> GalleryResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> GalleryResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

impl<T: TokenStore + ?Sized> TokenStore for Box<T> {
    fn get(&self, key: &str) -> GalleryResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> GalleryResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> GalleryResult<()> {
        (**self).remove(key)
    }
}
