//! Session module for persisting comparison results.
//!
//! A comparison session is an explicit, immutable value: the paths that
//! were compared, the order mode, the deduplicated collections, and the
//! resulting partition. Saving one lets `phonedupe load` re-emit or
//! re-export results without re-reading the inputs.
//!
//! # Features
//!
//! * **Persistence**: Sessions are stored as human-readable JSON.
//! * **Integrity**: Each file is wrapped in an envelope with a SHA256 checksum.
//! * **Versioning**: The format is versioned for future schema changes.
//!
//! # Architecture
//!
//! * [`data`]: Serializable session model.
//! * [`io`]: Saving, loading, and verifying session files.

pub mod data;
pub mod io;

pub use data::{CompareSession, SESSION_VERSION};
