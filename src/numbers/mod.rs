//! Core phone number logic.
//!
//! This module provides the three pieces everything else builds on:
//! - Normalization of raw text to canonical NANP numbers ([`normalize`])
//! - Deduplication of line batches into ordered collections ([`dedupe_lines`])
//! - Base-versus-new comparison of collections ([`compare`])
//!
//! All three are pure: values in, values out, no shared state.

pub mod compare;
pub mod dedupe;
pub mod normalize;

// Re-export main types
pub use compare::{compare, Comparison};
pub use dedupe::{dedupe_lines, DedupeStats, NumberSet, OrderMode};
pub use normalize::{normalize, normalize_opt, PhoneNumber, RejectReason};
