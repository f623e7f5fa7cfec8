//! JSON output formatters for scripting and automation.
//!
//! # Output Schema
//!
//! Dedupe report:
//!
//! ```json
//! {
//!   "numbers": ["+14155550123"],
//!   "stats": {
//!     "total_lines": 3,
//!     "valid": 2,
//!     "unique": 1,
//!     "rejections": { "WrongDigitCount": 1 }
//!   },
//!   "exit_code": 0,
//!   "exit_code_name": "PD000"
//! }
//! ```
//!
//! Compare report:
//!
//! ```json
//! {
//!   "base_unique": 10,
//!   "new_unique": 4,
//!   "duplicates": ["+14155550123"],
//!   "new_uniques": ["+12125550100"],
//!   "exit_code": 0,
//!   "exit_code_name": "PD000"
//! }
//! ```

use std::io::Write;

use serde::Serialize;

use crate::error::ExitCode;
use crate::numbers::{Comparison, DedupeStats, NumberSet};

/// JSON report for a dedupe run.
#[derive(Debug, Serialize)]
pub struct JsonDedupeReport<'a> {
    /// Deduplicated canonical numbers, in output order.
    pub numbers: &'a NumberSet,
    /// Run counters.
    pub stats: &'a DedupeStats,
    /// The exit code number.
    pub exit_code: i32,
    /// The machine-readable exit code name (e.g., "PD000").
    pub exit_code_name: String,
}

impl<'a> JsonDedupeReport<'a> {
    /// Create a new dedupe report.
    #[must_use]
    pub fn new(numbers: &'a NumberSet, stats: &'a DedupeStats, exit_code: ExitCode) -> Self {
        Self {
            numbers,
            stats,
            exit_code: exit_code.as_i32(),
            exit_code_name: exit_code.code_prefix().to_string(),
        }
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write pretty-printed JSON to the given writer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to<W: Write>(&self, mut writer: W) -> anyhow::Result<()> {
        let json = self.to_json_pretty()?;
        writeln!(writer, "{json}")?;
        Ok(())
    }
}

/// JSON report for a base-versus-new comparison.
#[derive(Debug, Serialize)]
pub struct JsonCompareReport<'a> {
    /// Unique numbers in the base collection.
    pub base_unique: usize,
    /// Unique numbers in the new collection.
    pub new_unique: usize,
    /// Numbers of new also present in base, in new's order.
    pub duplicates: &'a NumberSet,
    /// Numbers of new absent from base, in new's order.
    pub new_uniques: &'a NumberSet,
    /// The exit code number.
    pub exit_code: i32,
    /// The machine-readable exit code name (e.g., "PD000").
    pub exit_code_name: String,
}

impl<'a> JsonCompareReport<'a> {
    /// Create a new compare report.
    #[must_use]
    pub fn new(
        base: &'a NumberSet,
        new: &'a NumberSet,
        comparison: &'a Comparison,
        exit_code: ExitCode,
    ) -> Self {
        Self {
            base_unique: base.len(),
            new_unique: new.len(),
            duplicates: &comparison.duplicates,
            new_uniques: &comparison.new_uniques,
            exit_code: exit_code.as_i32(),
            exit_code_name: exit_code.code_prefix().to_string(),
        }
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write pretty-printed JSON to the given writer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to<W: Write>(&self, mut writer: W) -> anyhow::Result<()> {
        let json = self.to_json_pretty()?;
        writeln!(writer, "{json}")?;
        Ok(())
    }
}
