//! Application driver: wires CLI arguments to the core operations.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cli::{Cli, Commands, CompareArgs, DedupeArgs, LoadArgs, OutputFormat};
use crate::config::PrefsStore;
use crate::error::ExitCode;
use crate::numbers::{compare, dedupe_lines, Comparison, NumberSet, OrderMode};
use crate::output::{
    compare_summary, dedupe_summary, CompareTextOutput, CsvCompareReport, CsvNumbersOutput,
    JsonCompareReport, JsonDedupeReport, TextOutput,
};
use crate::session::CompareSession;
use crate::{logging, sources};

/// Run the application with parsed CLI arguments.
///
/// # Errors
///
/// Returns an error for failures the run could not recover from, such as
/// no readable inputs or an unwritable output file.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);
    if cli.no_color {
        yansi::disable();
    }

    match cli.command {
        Commands::Dedupe(args) => run_dedupe(&args),
        Commands::Compare(args) => run_compare(&args, &PrefsStore::default_location()),
        Commands::Load(args) => run_load(&args),
    }
}

/// The `dedupe` subcommand: flatten inputs, dedupe, write the result.
pub fn run_dedupe(args: &DedupeArgs) -> Result<ExitCode> {
    let gathered = sources::gather_lines(&args.inputs);
    if gathered.read_files == 0 {
        anyhow::bail!("none of the input files could be read");
    }

    let (numbers, stats) = dedupe_lines(&gathered.lines, order_mode(args.sort));
    log::info!(
        "{} lines in, {} valid, {} unique",
        stats.total_lines,
        stats.valid,
        stats.unique
    );

    let exit_code = exit_code_for(stats.valid, gathered.failed_files);
    match args.format {
        OutputFormat::Text => {
            match args.output.as_deref() {
                Some(path) if path == Path::new("-") => {
                    TextOutput::new(&numbers).write_to(io::stdout().lock())?;
                }
                Some(path) => sources::write_numbers(path, &numbers)?,
                None => {
                    let path = sources::derive_output_path(&args.inputs[0]);
                    sources::write_numbers(&path, &numbers)?;
                }
            }
            if args.stats {
                print!("{}", dedupe_summary(&stats));
            }
        }
        OutputFormat::Json => {
            JsonDedupeReport::new(&numbers, &stats, exit_code).write_to(sink(&args.output)?)?;
        }
        OutputFormat::Csv => {
            CsvNumbersOutput::new(&numbers).write_to(sink(&args.output)?)?;
        }
    }

    Ok(exit_code)
}

/// The `compare` subcommand: dedupe base and new, partition, export.
///
/// Preferences go through the given store, so callers control where the
/// last-used paths are remembered.
pub fn run_compare(args: &CompareArgs, prefs_store: &PrefsStore) -> Result<ExitCode> {
    let mut prefs = prefs_store.load();
    let base_path = args
        .base
        .clone()
        .or_else(|| prefs.last_base.clone())
        .context("no base path given and none saved in preferences; pass --base")?;

    let base_list = sources::base_files(&base_path)?;
    if base_list.is_empty() {
        log::warn!(
            "base directory contains no .txt files: {}",
            base_path.display()
        );
    }
    let base_gathered = sources::gather_lines(&base_list);

    let new_gathered = sources::gather_lines(&args.new);
    if new_gathered.read_files == 0 {
        anyhow::bail!("none of the new input files could be read");
    }

    let order = order_mode(args.sort);
    let (base_set, base_stats) = dedupe_lines(&base_gathered.lines, order);
    let (new_set, new_stats) = dedupe_lines(&new_gathered.lines, order);
    let comparison = compare(&base_set, &new_set);

    log::info!(
        "base: {} unique of {} valid; new: {} unique of {} valid",
        base_stats.unique,
        base_stats.valid,
        new_stats.unique,
        new_stats.valid
    );

    if let Some(path) = &args.duplicates_out {
        sources::write_numbers(path, &comparison.duplicates)?;
    }
    if let Some(path) = &args.uniques_out {
        sources::write_numbers(path, &comparison.new_uniques)?;
    }
    if let Some(path) = &args.merged_out {
        sources::write_numbers(path, &comparison.merged(&base_set))?;
    }
    if let Some(path) = &args.save_session {
        let session = CompareSession::new(
            base_path.clone(),
            args.new.clone(),
            order,
            base_set.clone(),
            new_set.clone(),
            comparison.clone(),
        );
        session.save(path)?;
        log::info!("saved session to {}", path.display());
    }

    let failed_files = base_gathered.failed_files + new_gathered.failed_files;
    let exit_code = exit_code_for(new_stats.valid, failed_files);
    emit_comparison(args.format, &base_set, &new_set, &comparison, exit_code)?;

    prefs.last_base = Some(base_path);
    prefs.last_new = args.new.clone();
    prefs.keep_order = !args.sort;
    prefs.sort_output = args.sort;
    if let Err(e) = prefs_store.save(&prefs) {
        log::debug!("failed to save preferences: {e:#}");
    }

    Ok(exit_code)
}

/// The `load` subcommand: re-emit a saved comparison session.
pub fn run_load(args: &LoadArgs) -> Result<ExitCode> {
    let session = CompareSession::load(&args.path)?;
    log::info!(
        "loaded comparison of {} against {} new file(s), created {}",
        session.base_path.display(),
        session.new_paths.len(),
        session.created_at
    );

    emit_comparison(
        args.format,
        &session.base,
        &session.new,
        &session.comparison,
        ExitCode::Success,
    )?;
    Ok(ExitCode::Success)
}

/// Write a comparison report to stdout in the requested format.
fn emit_comparison(
    format: OutputFormat,
    base: &NumberSet,
    new: &NumberSet,
    comparison: &Comparison,
    exit_code: ExitCode,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let stdout = io::stdout().lock();
            CompareTextOutput::new(comparison).write_to(stdout)?;
            print!("{}", compare_summary(base, new, comparison));
        }
        OutputFormat::Json => {
            JsonCompareReport::new(base, new, comparison, exit_code)
                .write_to(io::stdout().lock())?;
        }
        OutputFormat::Csv => {
            CsvCompareReport::new(base, new).write_to(io::stdout().lock())?;
        }
    }
    Ok(())
}

fn order_mode(sort: bool) -> OrderMode {
    if sort {
        OrderMode::Sorted
    } else {
        OrderMode::Insertion
    }
}

/// A writer for machine-readable formats: the given file, or stdout when
/// the path is absent or `-`.
fn sink(path: &Option<PathBuf>) -> Result<Box<dyn io::Write>> {
    match path.as_deref() {
        Some(p) if p != Path::new("-") => {
            let file = File::create(p)
                .with_context(|| format!("failed to create output file: {}", p.display()))?;
            Ok(Box::new(file))
        }
        _ => Ok(Box::new(io::stdout().lock())),
    }
}

fn exit_code_for(valid: usize, failed_files: usize) -> ExitCode {
    if valid == 0 {
        ExitCode::NoValidNumbers
    } else if failed_files > 0 {
        ExitCode::PartialSuccess
    } else {
        ExitCode::Success
    }
}
