//! PhoneDupe - NANP Phone Number Deduplicator
//!
//! A cross-platform Rust CLI application for validating and normalizing
//! North American phone numbers to E.164 (+1XXXXXXXXXX), deduplicating
//! them across input files, and comparing new imports against a known
//! base collection.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod numbers;
pub mod output;
pub mod session;
pub mod sources;

pub use app::run_app;
