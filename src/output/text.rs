//! Plain-text output and colored terminal summaries.

use std::io;

use yansi::Paint;

use crate::numbers::{Comparison, DedupeStats, NumberSet};

/// Writes a collection one canonical number per line.
pub struct TextOutput<'a> {
    numbers: &'a NumberSet,
}

impl<'a> TextOutput<'a> {
    /// Create a new text output formatter.
    #[must_use]
    pub fn new(numbers: &'a NumberSet) -> Self {
        Self { numbers }
    }

    /// Write the lines to the given writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        for number in self.numbers {
            writeln!(writer, "{number}")?;
        }
        Ok(())
    }
}

impl std::fmt::Display for TextOutput<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for number in self.numbers {
            writeln!(f, "{number}")?;
        }
        Ok(())
    }
}

/// Writes a comparison as two labeled sections, in the partition's order.
pub struct CompareTextOutput<'a> {
    comparison: &'a Comparison,
}

impl<'a> CompareTextOutput<'a> {
    /// Create a new comparison text formatter.
    #[must_use]
    pub fn new(comparison: &'a Comparison) -> Self {
        Self { comparison }
    }

    /// Write both sections to the given writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(
            writer,
            "duplicates ({}):",
            self.comparison.duplicates.len()
        )?;
        for number in &self.comparison.duplicates {
            writeln!(writer, "  {number}")?;
        }
        writeln!(
            writer,
            "new uniques ({}):",
            self.comparison.new_uniques.len()
        )?;
        for number in &self.comparison.new_uniques {
            writeln!(writer, "  {number}")?;
        }
        Ok(())
    }
}

/// Colored one-run summary for a dedupe batch.
#[must_use]
pub fn dedupe_summary(stats: &DedupeStats) -> String {
    let mut out = String::new();
    out.push_str(&format!("Total lines:    {}\n", stats.total_lines.bold()));
    out.push_str(&format!("Valid numbers:  {}\n", stats.valid.green().bold()));
    out.push_str(&format!("Unique numbers: {}\n", stats.unique.green().bold()));

    let rejected = stats.rejected();
    if rejected == 0 {
        out.push_str(&format!("Rejected:       {}\n", rejected.bold()));
    } else {
        let breakdown = stats
            .rejections
            .iter()
            .map(|(reason, count)| format!("{reason}: {count}"))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "Rejected:       {} ({breakdown})\n",
            rejected.yellow().bold()
        ));
    }
    out
}

/// Colored summary of a base-versus-new comparison.
#[must_use]
pub fn compare_summary(base: &NumberSet, new: &NumberSet, comparison: &Comparison) -> String {
    format!(
        "Base unique:    {}\nNew unique:     {}\nDuplicates:     {}\nOnly in new:    {}\n",
        base.len().bold(),
        new.len().bold(),
        comparison.duplicates.len().yellow().bold(),
        comparison.new_uniques.len().green().bold(),
    )
}
