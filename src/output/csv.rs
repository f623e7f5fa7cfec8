//! CSV output formatters.
//!
//! Two shapes are produced:
//!
//! - Dedupe runs emit a single `number` column, one row per unique number.
//! - Comparisons emit the report schema `number,in_base,in_new,status`
//!   over base ∪ new in first-seen order, where `status` is one of
//!   `duplicate`, `new_unique`, or `base_only`. Membership flags are
//!   written as `1`/`0`.

use std::io;

use serde::Serialize;
use thiserror::Error;

use crate::numbers::{NumberSet, PhoneNumber};

/// Errors that can occur during CSV output generation.
#[derive(Debug, Error)]
pub enum CsvOutputError {
    /// I/O error during writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error during CSV serialization.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// A single row in the dedupe CSV output.
#[derive(Debug, Serialize)]
struct NumberRow<'a> {
    /// Canonical number
    number: &'a str,
}

/// CSV output for a deduplicated collection.
pub struct CsvNumbersOutput<'a> {
    numbers: &'a NumberSet,
}

impl<'a> CsvNumbersOutput<'a> {
    /// Create a new CSV output formatter.
    #[must_use]
    pub fn new(numbers: &'a NumberSet) -> Self {
        Self { numbers }
    }

    /// Write the CSV output to the given writer.
    ///
    /// # Errors
    ///
    /// Returns `CsvOutputError` if writing or serialization fails.
    pub fn write_to<W: io::Write>(&self, writer: W) -> Result<(), CsvOutputError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for number in self.numbers {
            csv_writer.serialize(NumberRow {
                number: number.as_str(),
            })?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Generate CSV output as a string.
    ///
    /// # Errors
    ///
    /// Returns `CsvOutputError` if serialization fails.
    pub fn to_string(&self) -> Result<String, CsvOutputError> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}

/// A single row in the comparison CSV report.
#[derive(Debug, Serialize)]
struct CompareRow<'a> {
    /// Canonical number
    number: &'a str,
    /// 1 when the number exists in the base collection
    in_base: u8,
    /// 1 when the number exists in the new collection
    in_new: u8,
    /// duplicate, new_unique, or base_only
    status: &'static str,
}

/// CSV report over base ∪ new.
pub struct CsvCompareReport<'a> {
    base: &'a NumberSet,
    new: &'a NumberSet,
}

impl<'a> CsvCompareReport<'a> {
    /// Create a new comparison CSV report.
    #[must_use]
    pub fn new(base: &'a NumberSet, new: &'a NumberSet) -> Self {
        Self { base, new }
    }

    fn status_of(&self, number: &PhoneNumber) -> (u8, u8, &'static str) {
        let in_base = self.base.contains(number);
        let in_new = self.new.contains(number);
        let status = match (in_base, in_new) {
            (true, true) => "duplicate",
            (false, true) => "new_unique",
            _ => "base_only",
        };
        (u8::from(in_base), u8::from(in_new), status)
    }

    /// Write the report to the given writer.
    ///
    /// Rows cover base ∪ new in first-seen order: every base entry, then
    /// the new entries not already listed.
    ///
    /// # Errors
    ///
    /// Returns `CsvOutputError` if writing or serialization fails.
    pub fn write_to<W: io::Write>(&self, writer: W) -> Result<(), CsvOutputError> {
        let all = self.base.merge(self.new);
        let mut csv_writer = csv::Writer::from_writer(writer);
        for number in &all {
            let (in_base, in_new, status) = self.status_of(number);
            csv_writer.serialize(CompareRow {
                number: number.as_str(),
                in_base,
                in_new,
                status,
            })?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Generate the report as a string.
    ///
    /// # Errors
    ///
    /// Returns `CsvOutputError` if serialization fails.
    pub fn to_string(&self) -> Result<String, CsvOutputError> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}
