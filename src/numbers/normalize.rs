//! NANP phone number normalization.
//!
//! # Overview
//!
//! This module turns free-form textual phone numbers into canonical E.164
//! form (`+1` followed by ten digits) or rejects them. Normalization is a
//! pure function of its input line, so callers may process batches in any
//! order, including in parallel.
//!
//! # Pipeline
//!
//! 1. Trim surrounding whitespace; empty input is rejected.
//! 2. Truncate at the first extension marker: `ext` or a standalone `x`
//!    (case-insensitive, at word boundaries) or a `#` character. The
//!    extension itself is discarded, never validated.
//! 3. Extract digits, keeping a `+` only when it leads the string.
//! 4. Classify the digit sequence: `+1` plus ten digits, eleven digits
//!    starting with `1`, or a bare ten digits.
//! 5. Validate the ten-digit body against NANP structure: area code and
//!    central office code start with 2-9, and the office code must not be
//!    an N11 service code.
//!
//! # Example
//!
//! ```
//! use phonedupe::numbers::normalize;
//!
//! let number = normalize("(415) 555-0123").unwrap();
//! assert_eq!(number.as_str(), "+14155550123");
//!
//! assert!(normalize("911").is_err());
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Extension markers such as `ext 45`, `x 45`, or `#45`.
///
/// `ext` and `x` only match as standalone tokens; an attached suffix like
/// `0123x45` is left alone and fails shape classification instead.
static EXTENSION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bext\b|\bx\b|#").expect("extension marker pattern"));

/// Why a raw line failed to normalize.
///
/// The public contract to collaborators is boolean (accepted or rejected);
/// the taxonomy exists so each validation rule is testable on its own and
/// rejection counts can be reported per reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Error, Serialize, Deserialize)]
pub enum RejectReason {
    /// Input was empty or whitespace-only.
    #[error("empty or whitespace-only input")]
    Empty,
    /// Digit sequence does not match any accepted shape.
    #[error("not a recognized NANP shape")]
    MalformedShape,
    /// Digit count matches no accepted shape.
    #[error("wrong number of digits")]
    WrongDigitCount,
    /// Area code starts with 0 or 1.
    #[error("area code must start with 2-9")]
    InvalidAreaCode,
    /// Central office code starts with 0 or 1.
    #[error("central office code must start with 2-9")]
    InvalidOfficeCode,
    /// Central office code is N11, reserved for service numbers.
    #[error("central office code is a reserved N11 service code")]
    N11Reserved,
}

/// A canonical NANP number: the literal `+1` followed by ten ASCII digits.
///
/// Values can only be constructed through [`normalize`], so a
/// `PhoneNumber` is always well-formed. Comparison, ordering, and hashing
/// are by exact string equality; ascending lexical order coincides with
/// ascending numeric order because the shape is fixed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// The canonical string, e.g. `+14155550123`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the number, returning the canonical string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for PhoneNumber {
    type Err = RejectReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = RejectReason;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        normalize(&s)
    }
}

impl From<PhoneNumber> for String {
    fn from(number: PhoneNumber) -> Self {
        number.0
    }
}

/// Normalize a raw line to a canonical NANP number, or explain why not.
///
/// Pure and deterministic; never touches shared state.
///
/// # Errors
///
/// Returns a [`RejectReason`] when the line is not a valid NANP number.
pub fn normalize(raw: &str) -> Result<PhoneNumber, RejectReason> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RejectReason::Empty);
    }

    let head = match EXTENSION_MARKER.find(trimmed) {
        Some(m) => &trimmed[..m.start()],
        None => trimmed,
    };

    let digits = extract_digits(head);
    let body = classify_shape(&digits)?;
    validate_nanp_body(body)?;

    let mut canonical = String::with_capacity(12);
    canonical.push_str("+1");
    canonical.push_str(body);
    Ok(PhoneNumber(canonical))
}

/// Boolean-contract variant of [`normalize`] for callers that only care
/// whether a line was accepted.
#[must_use]
pub fn normalize_opt(raw: &str) -> Option<PhoneNumber> {
    normalize(raw).ok()
}

/// Keep ASCII digits, preserving a `+` only in leading position.
fn extract_digits(s: &str) -> String {
    let (prefix, rest) = match s.strip_prefix('+') {
        Some(rest) => ("+", rest),
        None => ("", s),
    };
    let mut digits = String::with_capacity(s.len());
    digits.push_str(prefix);
    digits.extend(rest.chars().filter(char::is_ascii_digit));
    digits
}

/// Classify the digit sequence into one of the three accepted shapes and
/// return the ten-digit candidate body.
fn classify_shape(digits: &str) -> Result<&str, RejectReason> {
    if let Some(rest) = digits.strip_prefix('+') {
        let body = rest
            .strip_prefix('1')
            .ok_or(RejectReason::MalformedShape)?;
        if body.len() != 10 {
            return Err(RejectReason::WrongDigitCount);
        }
        return Ok(body);
    }

    match digits.len() {
        11 => digits
            .strip_prefix('1')
            .ok_or(RejectReason::MalformedShape),
        10 => Ok(digits),
        _ => Err(RejectReason::WrongDigitCount),
    }
}

/// Validate a ten-digit body against NANP structural rules.
fn validate_nanp_body(body: &str) -> Result<(), RejectReason> {
    debug_assert_eq!(body.len(), 10);
    let b = body.as_bytes();

    if matches!(b[0], b'0' | b'1') {
        return Err(RejectReason::InvalidAreaCode);
    }
    if matches!(b[3], b'0' | b'1') {
        return Err(RejectReason::InvalidOfficeCode);
    }
    // N11 office codes (411, 911, ...) are service numbers
    if b[4] == b'1' && b[5] == b'1' {
        return Err(RejectReason::N11Reserved);
    }
    Ok(())
}
