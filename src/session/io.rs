//! I/O operations for comparison sessions.

use crate::session::data::{CompareSession, SESSION_VERSION};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Envelope for session files to include integrity checks.
#[derive(Debug, Serialize, Deserialize)]
struct SessionEnvelope {
    /// SHA256 checksum of the serialized session data.
    checksum: String,
    /// The actual session data.
    session: CompareSession,
}

fn checksum_of(session_json: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(session_json.as_bytes());
    format!("{:x}", hasher.finalize())
}

impl CompareSession {
    /// Save the session to a file with an integrity checksum.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        let mut file = File::create(path)
            .with_context(|| format!("failed to create session file: {}", path.display()))?;
        file.write_all(json.as_bytes())
            .with_context(|| format!("failed to write session to: {}", path.display()))?;
        Ok(())
    }

    /// Serialize the session to a JSON envelope with an integrity checksum.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        let session_json =
            serde_json::to_string(&self).context("failed to serialize session for checksum")?;

        let envelope = SessionEnvelope {
            checksum: checksum_of(&session_json),
            session: self.clone(),
        };

        serde_json::to_string_pretty(&envelope).context("failed to serialize session envelope")
    }

    /// Load a session from a file and verify its integrity.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, the checksum
    /// does not match, or the format version is unsupported.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read session file: {}", path.display()))?;

        let envelope: SessionEnvelope = serde_json::from_str(&content).context(
            "failed to parse session envelope; the file might be corrupted or in an old format",
        )?;

        // Must use the same serialization settings as to_json (compact)
        let session_json = serde_json::to_string(&envelope.session)
            .context("failed to re-serialize session for integrity check")?;

        if checksum_of(&session_json) != envelope.checksum {
            anyhow::bail!("session integrity check failed: checksum mismatch");
        }

        let session = envelope.session;
        if session.version != SESSION_VERSION {
            anyhow::bail!(
                "unsupported session version: {} (current version is {})",
                session.version,
                SESSION_VERSION
            );
        }

        if !session.base_path.exists() {
            log::warn!(
                "base path referenced in session no longer exists: {}",
                session.base_path.display()
            );
        }

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numbers::{compare, dedupe_lines, OrderMode};
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn sample_session() -> CompareSession {
        let (base, _) = dedupe_lines(&["415-555-0123"], OrderMode::Insertion);
        let (new, _) = dedupe_lines(&["415-555-0123", "212-555-0100"], OrderMode::Insertion);
        let comparison = compare(&base, &new);
        CompareSession::new(
            PathBuf::from("/tmp/base.txt"),
            vec![PathBuf::from("/tmp/new.txt")],
            OrderMode::Insertion,
            base,
            new,
            comparison,
        )
    }

    #[test]
    fn test_session_to_json() {
        let json = sample_session().to_json().unwrap();
        assert!(json.contains("\"checksum\":"));
        assert!(json.contains("\"session\":"));
        assert!(json.contains("\"version\":"));
        assert!(json.contains("+14155550123"));
    }

    #[test]
    fn test_session_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        let session = sample_session();
        session.save(&path).unwrap();

        let loaded = CompareSession::load(&path).unwrap();
        assert_eq!(loaded, session);
    }

    #[test]
    fn test_session_load_corrupted_checksum() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        sample_session().save(&path).unwrap();

        let mut content = std::fs::read_to_string(&path).unwrap();
        content = content.replace("\"checksum\": \"", "\"checksum\": \"bad");
        std::fs::write(&path, content).unwrap();

        let result = CompareSession::load(&path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("integrity check failed"));
    }

    #[test]
    fn test_session_load_invalid_version() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut session = sample_session();
        session.version = 999;
        session.save(&path).unwrap();

        let result = CompareSession::load(&path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("unsupported session version"));
    }

    #[test]
    fn test_session_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid.json");
        std::fs::write(&path, "{ invalid json }").unwrap();

        let result = CompareSession::load(&path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("failed to parse session envelope"));
    }
}
