#![forbid(unsafe_code)]

//! Durable client preference storage.
//!
//! The browser original kept two namespaced entries in `localStorage`; here
//! the same contract is a [`PrefStore`] trait with a JSON-file
//! implementation for the binary and an in-memory one for tests. The
//! engines that use this store must keep working when storage is
//! unavailable, so every failure is surfaced as a `Result` for the caller
//! to log and swallow.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

/// Namespaced key for the persisted locale code.
pub const LOCALE_KEY: &str = "dhaalan-lang";
/// Namespaced key for the persisted theme name.
pub const THEME_KEY: &str = "dhaalan-theme";

/// Errors raised by a preference store. Callers log these at `warn` and
/// continue with in-memory state; they never propagate past an engine.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("preference storage i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("preference storage is disabled")]
    Disabled,
}

/// Durable string-to-string storage, namespaced by key.
pub trait PrefStore {
    /// Read a stored value. Absent keys and unreadable storage both yield
    /// `None`; the distinction does not matter to the engines.
    fn load(&self, key: &str) -> Option<String>;

    /// Persist a value. Errors are reported so the caller can log them.
    fn save(&self, key: &str, value: &str) -> Result<(), PrefsError>;
}

/// Preferences persisted as a single JSON object in one file.
///
/// Writes are atomic: the new content goes to a temporary file in the same
/// directory, then renames over the target.
#[derive(Debug)]
pub struct FilePrefs {
    path: PathBuf,
}

impl FilePrefs {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PrefsError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl PrefStore for FilePrefs {
    fn load(&self, key: &str) -> Option<String> {
        match self.read_all() {
            Ok(map) => map.get(key).cloned(),
            Err(err) => {
                warn!(key, %err, "could not read preference file");
                None
            }
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        let mut map = self.read_all().unwrap_or_default();
        map.insert(key.to_string(), value.to_string());
        let serialized = serde_json::to_string_pretty(&map)?;

        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(serialized.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| PrefsError::Io(e.error))?;
        Ok(())
    }
}

/// In-memory preferences for tests and for the storage-disabled fallback.
///
/// `MemoryPrefs::failing()` rejects every write, which is how tests
/// exercise the engines' swallow-and-continue behavior.
#[derive(Debug, Default)]
pub struct MemoryPrefs {
    entries: RefCell<BTreeMap<String, String>>,
    fail_saves: bool,
}

impl MemoryPrefs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, as when storage is disabled by
    /// policy.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            entries: RefCell::new(BTreeMap::new()),
            fail_saves: true,
        }
    }

    /// Pre-seed an entry, as if persisted by an earlier session.
    pub fn seed(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl PrefStore for MemoryPrefs {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        if self.fail_saves {
            return Err(PrefsError::Disabled);
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_prefs_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = FilePrefs::new(dir.path().join("prefs.json"));

        assert_eq!(prefs.load(LOCALE_KEY), None);
        prefs.save(LOCALE_KEY, "dv").unwrap();
        prefs.save(THEME_KEY, "dark").unwrap();
        assert_eq!(prefs.load(LOCALE_KEY), Some("dv".to_string()));

        // A fresh handle over the same path sees the persisted entries.
        let reopened = FilePrefs::new(dir.path().join("prefs.json"));
        assert_eq!(reopened.load(THEME_KEY), Some("dark".to_string()));
    }

    #[test]
    fn save_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = FilePrefs::new(dir.path().join("prefs.json"));
        prefs.save(LOCALE_KEY, "en").unwrap();
        prefs.save(THEME_KEY, "light").unwrap();
        prefs.save(LOCALE_KEY, "dv").unwrap();
        assert_eq!(prefs.load(THEME_KEY), Some("light".to_string()));
        assert_eq!(prefs.load(LOCALE_KEY), Some("dv".to_string()));
    }

    #[test]
    fn corrupt_file_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{not json").unwrap();
        let prefs = FilePrefs::new(&path);
        assert_eq!(prefs.load(LOCALE_KEY), None);
        // A save recovers by rewriting the file from scratch.
        prefs.save(LOCALE_KEY, "en").unwrap();
        assert_eq!(prefs.load(LOCALE_KEY), Some("en".to_string()));
    }

    #[test]
    fn memory_prefs_seed_and_save() {
        let prefs = MemoryPrefs::new();
        prefs.seed(THEME_KEY, "dark");
        assert_eq!(prefs.load(THEME_KEY), Some("dark".to_string()));
        prefs.save(THEME_KEY, "light").unwrap();
        assert_eq!(prefs.load(THEME_KEY), Some("light".to_string()));
    }

    #[test]
    fn failing_store_rejects_writes_but_reads_fine() {
        let prefs = MemoryPrefs::failing();
        prefs.seed(LOCALE_KEY, "dv");
        assert!(matches!(
            prefs.save(LOCALE_KEY, "en"),
            Err(PrefsError::Disabled)
        ));
        assert_eq!(prefs.load(LOCALE_KEY), Some("dv".to_string()));
    }
}
