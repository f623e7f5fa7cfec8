//! Output formatters for dedupe and compare results.
//!
//! - Plain text: one canonical number per line, plus colored summaries
//! - JSON for automation and scripting
//! - CSV for spreadsheet import
//!
//! # Example
//!
//! ```
//! use phonedupe::numbers::{dedupe_lines, OrderMode};
//! use phonedupe::output::TextOutput;
//!
//! let (numbers, _) = dedupe_lines(&["415-555-0123"], OrderMode::Insertion);
//! let text = TextOutput::new(&numbers).to_string();
//! assert_eq!(text, "+14155550123\n");
//! ```

pub mod csv;
pub mod json;
pub mod text;

// Re-export main types
pub use csv::{CsvCompareReport, CsvNumbersOutput};
pub use json::{JsonCompareReport, JsonDedupeReport};
pub use text::{compare_summary, dedupe_summary, CompareTextOutput, TextOutput};
