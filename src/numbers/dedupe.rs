//! Deduplication of raw line streams into canonical collections.
//!
//! # Overview
//!
//! [`dedupe_lines`] applies the normalizer to every input line and keeps
//! each accepted number once. Rejected lines are silently filtered; they
//! never fail the run, only show up in the [`DedupeStats`] counters.
//!
//! Normalization runs in parallel with rayon. The ordered collect acts as
//! the stable re-sequencing step, so "first occurrence" is always defined
//! by the caller-supplied line order, exactly as in a sequential pass.
//!
//! # Example
//!
//! ```
//! use phonedupe::numbers::{dedupe_lines, OrderMode};
//!
//! let lines = ["(415) 555-0123", "415-555-0123", "not a number"];
//! let (numbers, stats) = dedupe_lines(&lines, OrderMode::Insertion);
//!
//! assert_eq!(numbers.len(), 1);
//! assert_eq!(stats.total_lines, 3);
//! assert_eq!(stats.valid, 2);
//! ```

use std::collections::{BTreeMap, HashSet};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::numbers::normalize::{normalize, PhoneNumber, RejectReason};

/// Ordering of a deduplicated collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderMode {
    /// First occurrence wins position.
    #[default]
    Insertion,
    /// Ascending canonical order (numeric, given the fixed shape).
    Sorted,
}

/// An ordered collection of canonical numbers with set semantics: no
/// value appears twice.
///
/// Built by [`dedupe_lines`] (or collected from already-canonical
/// numbers) and immutable from the caller's point of view; a fresh set is
/// produced per run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<PhoneNumber>", from = "Vec<PhoneNumber>")]
pub struct NumberSet {
    numbers: Vec<PhoneNumber>,
    index: HashSet<PhoneNumber>,
}

impl NumberSet {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a number unless it is already present.
    ///
    /// Returns `true` if the number was newly inserted.
    pub fn insert(&mut self, number: PhoneNumber) -> bool {
        if self.index.contains(&number) {
            return false;
        }
        self.index.insert(number.clone());
        self.numbers.push(number);
        true
    }

    /// Exact-match membership test.
    #[must_use]
    pub fn contains(&self, number: &PhoneNumber) -> bool {
        self.index.contains(number)
    }

    /// Number of unique entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Check if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Iterate in the collection's order.
    pub fn iter(&self) -> std::slice::Iter<'_, PhoneNumber> {
        self.numbers.iter()
    }

    /// The entries as an ordered slice.
    #[must_use]
    pub fn as_slice(&self) -> &[PhoneNumber] {
        &self.numbers
    }

    /// A copy of this collection in ascending canonical order.
    #[must_use]
    pub fn sorted(&self) -> Self {
        let mut numbers = self.numbers.clone();
        numbers.sort_unstable();
        Self {
            numbers,
            index: self.index.clone(),
        }
    }

    /// Union with `other`, keeping this collection's entries first and
    /// appending entries of `other` that are not already present.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        for number in other {
            merged.insert(number.clone());
        }
        merged
    }

    /// Consume the collection, returning the ordered entries.
    #[must_use]
    pub fn into_vec(self) -> Vec<PhoneNumber> {
        self.numbers
    }
}

impl From<Vec<PhoneNumber>> for NumberSet {
    fn from(numbers: Vec<PhoneNumber>) -> Self {
        numbers.into_iter().collect()
    }
}

impl From<NumberSet> for Vec<PhoneNumber> {
    fn from(set: NumberSet) -> Self {
        set.numbers
    }
}

impl FromIterator<PhoneNumber> for NumberSet {
    fn from_iter<I: IntoIterator<Item = PhoneNumber>>(iter: I) -> Self {
        let mut set = Self::new();
        for number in iter {
            set.insert(number);
        }
        set
    }
}

impl<'a> IntoIterator for &'a NumberSet {
    type Item = &'a PhoneNumber;
    type IntoIter = std::slice::Iter<'a, PhoneNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.numbers.iter()
    }
}

impl IntoIterator for NumberSet {
    type Item = PhoneNumber;
    type IntoIter = std::vec::IntoIter<PhoneNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.numbers.into_iter()
    }
}

/// Counters from a deduplication run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DedupeStats {
    /// Lines consumed, accepted or not.
    pub total_lines: usize,
    /// Lines that normalized to a canonical number.
    pub valid: usize,
    /// Unique canonical numbers after deduplication.
    pub unique: usize,
    /// Rejected lines, broken down by reason.
    pub rejections: BTreeMap<RejectReason, usize>,
}

impl DedupeStats {
    /// Total number of rejected lines.
    #[must_use]
    pub fn rejected(&self) -> usize {
        self.rejections.values().sum()
    }
}

/// Deduplicate a batch of raw lines.
///
/// Every line goes through the normalizer; accepted numbers are kept once
/// in first-seen order, or in ascending order when `order` is
/// [`OrderMode::Sorted`]. This never fails: an empty or fully-invalid
/// batch just produces an empty collection.
pub fn dedupe_lines<S>(lines: &[S], order: OrderMode) -> (NumberSet, DedupeStats)
where
    S: AsRef<str> + Sync,
{
    let results: Vec<Result<PhoneNumber, RejectReason>> = lines
        .par_iter()
        .map(|line| normalize(line.as_ref()))
        .collect();

    let mut set = NumberSet::new();
    let mut stats = DedupeStats {
        total_lines: lines.len(),
        ..DedupeStats::default()
    };

    for result in results {
        match result {
            Ok(number) => {
                stats.valid += 1;
                set.insert(number);
            }
            Err(reason) => {
                *stats.rejections.entry(reason).or_insert(0) += 1;
            }
        }
    }
    stats.unique = set.len();

    let set = match order {
        OrderMode::Insertion => set,
        OrderMode::Sorted => set.sorted(),
    };
    (set, stats)
}
