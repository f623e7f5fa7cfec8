//! Persisted user preferences.
//!
//! The compare workflow remembers its last base and new paths plus the
//! display ordering, so a follow-up run can omit `--base`. Preferences
//! live as JSON in the platform config directory and failures to load
//! fall back to defaults silently.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Saved preferences for the compare workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefs {
    /// Base path of the last comparison.
    #[serde(default)]
    pub last_base: Option<PathBuf>,
    /// New input files of the last comparison.
    #[serde(default)]
    pub last_new: Vec<PathBuf>,
    /// Whether first-seen order was kept (as opposed to sorted output).
    #[serde(default = "default_keep_order")]
    pub keep_order: bool,
    /// Whether output listings were sorted.
    #[serde(default)]
    pub sort_output: bool,
}

fn default_keep_order() -> bool {
    true
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            last_base: None,
            last_new: Vec::new(),
            keep_order: true,
            sort_output: false,
        }
    }
}

impl Prefs {
    /// Load preferences from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let prefs = serde_json::from_str(&content)?;
        Ok(prefs)
    }

    /// Save preferences to a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Handle to the preferences file location.
///
/// The application uses the platform config directory; callers that must
/// not touch it (tests, embedding) point the store elsewhere with
/// [`PrefsStore::at`].
#[derive(Debug, Clone)]
pub struct PrefsStore {
    path: Option<PathBuf>,
}

impl PrefsStore {
    /// Store at the default platform-specific path. When no home
    /// directory can be determined the store is inert: loads yield
    /// defaults and saves fail.
    #[must_use]
    pub fn default_location() -> Self {
        let path = ProjectDirs::from("com", "phonedupe", "phonedupe")
            .map(|dirs| dirs.config_dir().join("prefs.json"));
        if path.is_none() {
            log::debug!("no config directory available, preferences disabled");
        }
        Self { path }
    }

    /// Store at an explicit file path.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Load preferences, falling back to defaults on any failure.
    #[must_use]
    pub fn load(&self) -> Prefs {
        let Some(path) = &self.path else {
            return Prefs::default();
        };
        match Prefs::load_from(path) {
            Ok(prefs) => prefs,
            Err(e) => {
                log::debug!("failed to load preferences, using defaults: {e:#}");
                Prefs::default()
            }
        }
    }

    /// Save preferences to the store's path.
    ///
    /// # Errors
    ///
    /// Returns an error if the store has no path or the file cannot be
    /// written.
    pub fn save(&self, prefs: &Prefs) -> Result<()> {
        let path = self
            .path
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("no preferences path available"))?;
        prefs.save_to(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_prefs_default() {
        let prefs = Prefs::default();
        assert!(prefs.last_base.is_none());
        assert!(prefs.keep_order);
        assert!(!prefs.sort_output);
    }

    #[test]
    fn test_prefs_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");

        let prefs = Prefs {
            last_base: Some(PathBuf::from("/data/base.txt")),
            last_new: vec![PathBuf::from("/data/new1.txt"), PathBuf::from("/data/new2.txt")],
            keep_order: true,
            sort_output: true,
        };
        prefs.save_to(&path).unwrap();

        let loaded = Prefs::load_from(&path).unwrap();
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn test_prefs_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let loaded = Prefs::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, Prefs::default());
    }

    #[test]
    fn test_prefs_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"last_base": "/data/base.txt"}"#).unwrap();

        let loaded = Prefs::load_from(&path).unwrap();
        assert_eq!(loaded.last_base, Some(PathBuf::from("/data/base.txt")));
        assert!(loaded.keep_order);
    }

    #[test]
    fn test_prefs_corrupt_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(Prefs::load_from(&path).is_err());
    }

    #[test]
    fn test_store_at_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = PrefsStore::at(dir.path().join("prefs.json"));

        let mut prefs = store.load();
        assert_eq!(prefs, Prefs::default());

        prefs.last_base = Some(PathBuf::from("/data/base.txt"));
        store.save(&prefs).unwrap();
        assert_eq!(store.load(), prefs);
    }

    #[test]
    fn test_store_load_falls_back_on_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{ not json").unwrap();

        let store = PrefsStore::at(path);
        assert_eq!(store.load(), Prefs::default());
    }
}
