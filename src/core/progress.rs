//! Mastered-word persistence.
//!
//! The mastered set lives under one durable key, `hsk_mastered`, holding a
//! JSON array of word ids. It is loaded once at startup and written after
//! every mastery toggle. Missing or malformed data loads as an empty set.

use std::collections::BTreeSet;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;
use thiserror::Error;

/// Durable key under which the mastered set is stored.
pub const MASTERED_KEY: &str = "hsk_mastered";

#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to persist {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ============================================================================
// MasteredSet
// ============================================================================

/// Word ids the user has marked as mastered.
///
/// Membership does not depend on level or difficulty: a word stays mastered
/// while it is filtered out of view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MasteredSet(BTreeSet<String>);

impl MasteredSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    /// Add when `mastered`, remove otherwise.
    pub fn set(&mut self, id: &str, mastered: bool) {
        if mastered {
            self.0.insert(id.to_string());
        } else {
            self.0.remove(id);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn to_json(&self) -> Result<String, ProgressError> {
        Ok(serde_json::to_string(&self.0)?)
    }

    fn from_json(json: &str) -> Result<Self, ProgressError> {
        let ids: Vec<String> = serde_json::from_str(json)?;
        Ok(ids.into_iter().collect())
    }
}

impl FromIterator<String> for MasteredSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ============================================================================
// Stores
// ============================================================================

/// Durable storage for the mastered set. One writer, one reader.
pub trait ProgressStore: Send {
    /// Restore the saved set. Never fails: absent or corrupt data is empty.
    fn load(&self) -> MasteredSet;

    fn save(&self, set: &MasteredSet) -> Result<(), ProgressError>;
}

/// Stores the mastered set as `<dir>/hsk_mastered.json`.
pub struct FileProgressStore {
    path: PathBuf,
}

impl FileProgressStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(format!("{MASTERED_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn try_load(&self) -> Result<Option<MasteredSet>, ProgressError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(MasteredSet::from_json(&contents)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl ProgressStore for FileProgressStore {
    fn load(&self) -> MasteredSet {
        match self.try_load() {
            Ok(Some(set)) => {
                tracing::info!(
                    count = set.len(),
                    path = %self.path.display(),
                    "Loaded mastered words"
                );
                set
            }
            Ok(None) => {
                tracing::debug!(path = %self.path.display(), "No saved progress, starting empty");
                MasteredSet::new()
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Saved progress unreadable, starting empty"
                );
                MasteredSet::new()
            }
        }
    }

    fn save(&self, set: &MasteredSet) -> Result<(), ProgressError> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;

        let json = set.to_json()?;
        let temp = NamedTempFile::new_in(parent)?;
        {
            let mut writer = BufWriter::new(temp.as_file());
            writer.write_all(json.as_bytes())?;
            writer.flush()?;
        }
        temp.persist(&self.path).map_err(|e| ProgressError::Persist {
            path: self.path.clone(),
            source: e.error,
        })?;

        tracing::debug!(count = set.len(), "Saved mastered words");
        Ok(())
    }
}

/// In-process store, used in tests and when no data directory is usable.
#[derive(Default)]
pub struct MemoryProgressStore {
    saved: Mutex<Option<String>>,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the raw stored value, as if written by an earlier session.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            saved: Mutex::new(Some(raw.into())),
        }
    }

    /// The raw stored value, if any.
    pub fn raw(&self) -> Option<String> {
        self.saved.lock().ok().and_then(|guard| guard.clone())
    }
}

impl ProgressStore for MemoryProgressStore {
    fn load(&self) -> MasteredSet {
        self.raw()
            .and_then(|raw| MasteredSet::from_json(&raw).ok())
            .unwrap_or_default()
    }

    fn save(&self, set: &MasteredSet) -> Result<(), ProgressError> {
        let json = set.to_json()?;
        if let Ok(mut guard) = self.saved.lock() {
            *guard = Some(json);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(ids: &[&str]) -> MasteredSet {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_set_toggle() {
        let mut set = MasteredSet::new();
        set.set("a", true);
        assert!(set.contains("a"));
        set.set("a", false);
        assert!(!set.contains("a"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_file_store_missing_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileProgressStore::new(dir.path());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileProgressStore::new(dir.path());
        let set = set_of(&["h1-01", "h2-05"]);
        store.save(&set).unwrap();
        assert_eq!(store.load(), set);
    }

    #[test]
    fn test_file_store_writes_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileProgressStore::new(dir.path());
        store.save(&set_of(&["b", "a"])).unwrap();
        let raw = fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, r#"["a","b"]"#);
        assert!(store.path().ends_with("hsk_mastered.json"));
    }

    #[test]
    fn test_file_store_malformed_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileProgressStore::new(dir.path());
        fs::write(store.path(), "{not json").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_file_store_wrong_shape_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileProgressStore::new(dir.path());
        fs::write(store.path(), r#"{"masteredWords": ["a"]}"#).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_file_store_creates_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("deeper");
        let store = FileProgressStore::new(&nested);
        store.save(&set_of(&["x"])).unwrap();
        assert!(store.load().contains("x"));
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryProgressStore::new();
        assert!(store.load().is_empty());
        let set = set_of(&["a"]);
        store.save(&set).unwrap();
        assert_eq!(store.load(), set);
        assert_eq!(store.raw().as_deref(), Some(r#"["a"]"#));
    }

    #[test]
    fn test_memory_store_malformed_is_empty() {
        let store = MemoryProgressStore::with_raw("garbage");
        assert!(store.load().is_empty());
    }
}
