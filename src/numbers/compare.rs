//! Base-versus-new comparison of canonical collections.
//!
//! # Overview
//!
//! [`compare`] partitions an already-deduplicated "new" collection against
//! a "base" collection: numbers also present in base are duplicates,
//! numbers absent from base are new-uniques. Both outputs keep the new
//! collection's own order; base is only consulted for membership.
//!
//! # Example
//!
//! ```
//! use phonedupe::numbers::{compare, dedupe_lines, OrderMode};
//!
//! let (base, _) = dedupe_lines(&["415-555-0123"], OrderMode::Insertion);
//! let (new, _) = dedupe_lines(&["415-555-0123", "212-555-0100"], OrderMode::Insertion);
//!
//! let result = compare(&base, &new);
//! assert_eq!(result.duplicates.len(), 1);
//! assert_eq!(result.new_uniques.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::numbers::dedupe::NumberSet;

/// Partition of a new collection against a base collection.
///
/// Invariant: `duplicates` and `new_uniques` are disjoint and together
/// reconstruct the new collection in its original order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    /// Numbers of the new collection that also exist in base.
    pub duplicates: NumberSet,
    /// Numbers of the new collection absent from base.
    pub new_uniques: NumberSet,
}

impl Comparison {
    /// The updated base: base ∪ new-uniques, with the uniques appended
    /// after the base entries. Duplicate-free by construction.
    #[must_use]
    pub fn merged(&self, base: &NumberSet) -> NumberSet {
        base.merge(&self.new_uniques)
    }
}

/// Partition `new` into duplicates and new-uniques relative to `base`.
///
/// Total function: either side may be empty and the partition degenerates
/// accordingly.
#[must_use]
pub fn compare(base: &NumberSet, new: &NumberSet) -> Comparison {
    let mut duplicates = NumberSet::new();
    let mut new_uniques = NumberSet::new();

    for number in new {
        if base.contains(number) {
            duplicates.insert(number.clone());
        } else {
            new_uniques.insert(number.clone());
        }
    }

    Comparison {
        duplicates,
        new_uniques,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numbers::dedupe::{dedupe_lines, OrderMode};
    use crate::numbers::normalize::PhoneNumber;

    fn set_of(lines: &[&str]) -> NumberSet {
        dedupe_lines(lines, OrderMode::Insertion).0
    }

    fn strings(set: &NumberSet) -> Vec<&str> {
        set.iter().map(PhoneNumber::as_str).collect()
    }

    #[test]
    fn test_compare_partitions_new_in_order() {
        let base = set_of(&["415-555-0123", "212-555-0100"]);
        let new = set_of(&["914-555-0100", "415-555-0123", "646-555-0100"]);

        let result = compare(&base, &new);
        assert_eq!(strings(&result.duplicates), ["+14155550123"]);
        assert_eq!(
            strings(&result.new_uniques),
            ["+19145550100", "+16465550100"]
        );
    }

    #[test]
    fn test_compare_empty_base_makes_everything_unique() {
        let base = NumberSet::new();
        let new = set_of(&["415-555-0123", "212-555-0100"]);

        let result = compare(&base, &new);
        assert!(result.duplicates.is_empty());
        assert_eq!(result.new_uniques, new);
    }

    #[test]
    fn test_compare_empty_new_yields_empty_partition() {
        let base = set_of(&["415-555-0123"]);
        let result = compare(&base, &NumberSet::new());
        assert!(result.duplicates.is_empty());
        assert!(result.new_uniques.is_empty());
    }

    #[test]
    fn test_compare_base_order_is_irrelevant() {
        let base_a = set_of(&["415-555-0123", "212-555-0100"]);
        let base_b = set_of(&["212-555-0100", "415-555-0123"]);
        let new = set_of(&["212-555-0100", "914-555-0100"]);

        assert_eq!(compare(&base_a, &new), compare(&base_b, &new));
    }

    #[test]
    fn test_partition_reconstructs_new() {
        let base = set_of(&["415-555-0123", "212-555-0100"]);
        let new = set_of(&["212-555-0100", "914-555-0100", "415-555-0123"]);

        let result = compare(&base, &new);
        let mut reconstructed: Vec<&PhoneNumber> = Vec::new();
        let mut dup_iter = result.duplicates.iter().peekable();
        let mut unique_iter = result.new_uniques.iter().peekable();
        for number in &new {
            if dup_iter.peek() == Some(&number) {
                reconstructed.push(dup_iter.next().unwrap());
            } else {
                assert_eq!(unique_iter.peek(), Some(&number));
                reconstructed.push(unique_iter.next().unwrap());
            }
        }
        assert_eq!(reconstructed.len(), new.len());
        assert!(dup_iter.next().is_none());
        assert!(unique_iter.next().is_none());
    }

    #[test]
    fn test_merged_appends_uniques_after_base() {
        let base = set_of(&["415-555-0123"]);
        let new = set_of(&["415-555-0123", "212-555-0100"]);

        let merged = compare(&base, &new).merged(&base);
        assert_eq!(strings(&merged), ["+14155550123", "+12125550100"]);
    }
}
