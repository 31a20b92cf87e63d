// wallet-core/src/session/store.rs
//
// Key/value backends for the session: in-memory and JSON file.

use crate::error::{SessionError, WalletResult};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// String key/value storage shared by the wizard screens
pub trait SessionStore {
    fn get(&self, key: &str) -> WalletResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> WalletResult<()>;
    fn remove(&mut self, key: &str) -> WalletResult<()>;
}

// =============================================================================
// MEMORY
// =============================================================================

#[derive(Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Values may be recovery phrases; only the keys are shown.
impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> WalletResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> WalletResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> WalletResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

// =============================================================================
// FILE
// =============================================================================

/// A flat JSON object on disk, rewritten on every change.
///
/// # Security
/// The file holds the recovery phrase in plain text while a wizard is in
/// progress. It is meant for resuming a session on the same machine and is
/// emptied by `Session::clear`.
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl std::fmt::Debug for FileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStore")
            .field("path", &self.path)
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl FileStore {
    /// Open `path`, starting empty when the file does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> WalletResult<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text).map_err(|e| {
                SessionError::Unavailable(format!("{}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(SessionError::Unavailable(format!("{}: {}", path.display(), e)).into())
            }
        };

        tracing::debug!(path = %path.display(), keys = entries.len(), "opened session file");
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `entries` to disk. The in-memory map is only replaced by the
    /// caller once this succeeds.
    fn flush(&self, entries: &BTreeMap<String, String>) -> WalletResult<()> {
        let text = serde_json::to_string_pretty(entries)
            .map_err(|e| SessionError::Unavailable(e.to_string()))?;
        fs::write(&self.path, text)
            .map_err(|e| SessionError::Unavailable(format!("{}: {}", self.path.display(), e)))?;
        Ok(())
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> WalletResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> WalletResult<()> {
        let mut next = self.entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.flush(&next)?;
        self.entries = next;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> WalletResult<()> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        let mut next = self.entries.clone();
        next.remove(key);
        self.flush(&next)?;
        self.entries = next;
        Ok(())
    }
}
