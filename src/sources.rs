//! Line sources and sinks.
//!
//! Reading is lossy: input files are decoded as UTF-8 with invalid bytes
//! replaced, because number lists come from exports of varying quality and
//! a stray byte must not abort a batch. Anything that does not normalize
//! is filtered downstream anyway.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::numbers::NumberSet;

/// Read all lines of a file, decoding lossily.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read input file: {}", path.display()))?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.lines().map(str::to_owned).collect())
}

/// Lines gathered from several sources, flattened in source order.
#[derive(Debug, Default)]
pub struct GatheredLines {
    /// All lines, in the order the readable sources were given.
    pub lines: Vec<String>,
    /// Number of sources read successfully.
    pub read_files: usize,
    /// Number of sources that could not be read.
    pub failed_files: usize,
}

/// Read several files into one ordered line stream.
///
/// Unreadable files are logged and counted, not fatal, so a batch spanning
/// many exports degrades instead of aborting. Callers decide whether a
/// partial read is acceptable.
#[must_use]
pub fn gather_lines(paths: &[PathBuf]) -> GatheredLines {
    let mut gathered = GatheredLines::default();
    for path in paths {
        match read_lines(path) {
            Ok(mut lines) => {
                log::debug!("read {} lines from {}", lines.len(), path.display());
                gathered.lines.append(&mut lines);
                gathered.read_files += 1;
            }
            Err(err) => {
                log::warn!("skipping unreadable input: {err:#}");
                gathered.failed_files += 1;
            }
        }
    }
    gathered
}

/// Resolve a base path into the list of files that make up the base
/// collection.
///
/// A file is used as-is. A directory contributes every `*.txt` file
/// directly inside it, in name order so repeated runs see the same stream.
///
/// # Errors
///
/// Returns an error if the path does not exist or the directory cannot be
/// listed.
pub fn base_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        bail!("base path not found: {}", path.display());
    }

    let entries = fs::read_dir(path)
        .with_context(|| format!("failed to list base directory: {}", path.display()))?;
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("failed to list base directory: {}", path.display()))?;
        let entry_path = entry.path();
        let is_txt = entry_path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
        if entry_path.is_file() && is_txt {
            files.push(entry_path);
        }
    }
    files.sort();
    Ok(files)
}

/// Write a collection to a file, one canonical number per line.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_numbers(path: &Path, numbers: &NumberSet) -> Result<()> {
    let mut content = String::with_capacity(numbers.len() * 13);
    for number in numbers {
        content.push_str(number.as_str());
        content.push('\n');
    }
    fs::write(path, content)
        .with_context(|| format!("failed to write output file: {}", path.display()))?;
    log::info!("wrote {} numbers to {}", numbers.len(), path.display());
    Ok(())
}

/// Default output path for a deduplicated input: `<stem>.deduped.txt`
/// alongside the input file.
#[must_use]
pub fn derive_output_path(input: &Path) -> PathBuf {
    match input.file_stem() {
        Some(stem) => {
            let mut name = stem.to_os_string();
            name.push(".deduped.txt");
            input.with_file_name(name)
        }
        None => input.with_extension("deduped.txt"),
    }
}
