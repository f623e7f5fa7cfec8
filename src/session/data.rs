//! Data structures for comparison sessions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::numbers::{Comparison, NumberSet, OrderMode};

/// Current version of the session file format.
pub const SESSION_VERSION: u32 = 1;

/// A saved base-versus-new comparison.
///
/// Produced fresh by each `compare` run; never mutated afterwards. The
/// next comparison supersedes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareSession {
    /// Format version.
    pub version: u32,
    /// When the comparison ran.
    pub created_at: DateTime<Utc>,
    /// Base path (file or directory of text files).
    pub base_path: PathBuf,
    /// New input files, in the order they were flattened.
    pub new_paths: Vec<PathBuf>,
    /// Ordering used for the collections.
    pub order: OrderMode,
    /// Deduplicated base collection.
    pub base: NumberSet,
    /// Deduplicated new collection.
    pub new: NumberSet,
    /// Partition of new against base.
    pub comparison: Comparison,
}

impl CompareSession {
    /// Create a session with the current timestamp and default version.
    #[must_use]
    pub fn new(
        base_path: PathBuf,
        new_paths: Vec<PathBuf>,
        order: OrderMode,
        base: NumberSet,
        new: NumberSet,
        comparison: Comparison,
    ) -> Self {
        Self {
            version: SESSION_VERSION,
            created_at: Utc::now(),
            base_path,
            new_paths,
            order,
            base,
            new,
            comparison,
        }
    }
}
