//! Command-line interface definitions.
//!
//! All CLI arguments, subcommands, and options using the clap derive API,
//! with global options (verbosity, color) and one subcommand per
//! operation.
//!
//! # Example
//!
//! ```bash
//! # Dedupe one or more number lists into a single output file
//! phonedupe dedupe contacts.txt leads.txt -o combined.txt --stats
//!
//! # Compare new imports against a base list (file or folder of .txt)
//! phonedupe compare --base base.txt new1.txt new2.txt --uniques-out fresh.txt
//!
//! # Re-emit a saved comparison as JSON
//! phonedupe load session.json --format json
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// NANP phone number normalizer and deduplicator.
///
/// phonedupe validates free-form phone number lines, canonicalizes them
/// to E.164 (+1XXXXXXXXXX), removes duplicates, and compares new imports
/// against a known base collection.
#[derive(Debug, Parser)]
#[command(name = "phonedupe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Report fatal errors as JSON on stderr
    #[arg(long, global = true)]
    pub json_errors: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Normalize and deduplicate number lists
    Dedupe(DedupeArgs),
    /// Compare new number lists against a base collection
    Compare(CompareArgs),
    /// Re-emit a previously saved comparison session
    Load(LoadArgs),
}

/// Arguments for the dedupe subcommand.
#[derive(Debug, Args)]
pub struct DedupeArgs {
    /// Input files, flattened into one stream in the given order
    #[arg(value_name = "FILE", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output file for text format (`-` for stdout)
    ///
    /// Defaults to `<first input>.deduped.txt`.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Sort the output instead of keeping first-seen order
    #[arg(long)]
    pub sort: bool,

    /// Print a summary of line counts and rejections
    #[arg(long)]
    pub stats: bool,

    /// Output format; all formats honor -o (`-` or omitted writes stdout
    /// for json/csv, text derives a file name)
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the compare subcommand.
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Base collection: a text file or a directory of .txt files
    ///
    /// Falls back to the last used base from saved preferences.
    #[arg(short, long, value_name = "PATH")]
    pub base: Option<PathBuf>,

    /// New input files, flattened into one stream in the given order
    #[arg(value_name = "FILE", required = true)]
    pub new: Vec<PathBuf>,

    /// Sort output listings instead of keeping first-seen order
    #[arg(long)]
    pub sort: bool,

    /// Output format for the report written to stdout
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the duplicate numbers to a file, one per line
    #[arg(long, value_name = "PATH")]
    pub duplicates_out: Option<PathBuf>,

    /// Write the numbers only present in the new inputs to a file
    #[arg(long, value_name = "PATH")]
    pub uniques_out: Option<PathBuf>,

    /// Write the merged collection (base plus new uniques) to a file
    #[arg(long, value_name = "PATH")]
    pub merged_out: Option<PathBuf>,

    /// Save the comparison to a session file
    #[arg(long, value_name = "PATH")]
    pub save_session: Option<PathBuf>,
}

/// Arguments for the load subcommand.
#[derive(Debug, Args)]
pub struct LoadArgs {
    /// Session file to load
    #[arg(value_name = "SESSION_FILE")]
    pub path: PathBuf,

    /// Output format for the report written to stdout
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one number per line
    Text,
    /// JSON output for scripting
    Json,
    /// CSV output for spreadsheets
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_help() {
        // --help causes an early exit, which is an error in try_parse_from
        let result = Cli::try_parse_from(["phonedupe", "--help"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_dedupe_basic() {
        let cli = Cli::try_parse_from(["phonedupe", "dedupe", "numbers.txt"]).unwrap();
        assert_eq!(cli.verbose, 0);
        match cli.command {
            Commands::Dedupe(args) => {
                assert_eq!(args.inputs, vec![PathBuf::from("numbers.txt")]);
                assert_eq!(args.output, None);
                assert_eq!(args.format, OutputFormat::Text);
                assert!(!args.sort);
                assert!(!args.stats);
            }
            _ => panic!("Expected Dedupe command"),
        }
    }

    #[test]
    fn test_cli_parse_dedupe_with_options() {
        let cli = Cli::try_parse_from([
            "phonedupe",
            "-v",
            "dedupe",
            "a.txt",
            "b.txt",
            "-o",
            "out.txt",
            "--sort",
            "--stats",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Dedupe(args) => {
                assert_eq!(args.inputs.len(), 2);
                assert_eq!(args.output, Some(PathBuf::from("out.txt")));
                assert!(args.sort);
                assert!(args.stats);
                assert_eq!(args.format, OutputFormat::Json);
            }
            _ => panic!("Expected Dedupe command"),
        }
    }

    #[test]
    fn test_cli_dedupe_requires_input() {
        let result = Cli::try_parse_from(["phonedupe", "dedupe"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_compare() {
        let cli = Cli::try_parse_from([
            "phonedupe",
            "compare",
            "--base",
            "base.txt",
            "new1.txt",
            "new2.txt",
            "--duplicates-out",
            "dups.txt",
            "--uniques-out",
            "fresh.txt",
            "--merged-out",
            "merged.txt",
            "--save-session",
            "session.json",
        ])
        .unwrap();

        match cli.command {
            Commands::Compare(args) => {
                assert_eq!(args.base, Some(PathBuf::from("base.txt")));
                assert_eq!(
                    args.new,
                    vec![PathBuf::from("new1.txt"), PathBuf::from("new2.txt")]
                );
                assert_eq!(args.duplicates_out, Some(PathBuf::from("dups.txt")));
                assert_eq!(args.uniques_out, Some(PathBuf::from("fresh.txt")));
                assert_eq!(args.merged_out, Some(PathBuf::from("merged.txt")));
                assert_eq!(args.save_session, Some(PathBuf::from("session.json")));
            }
            _ => panic!("Expected Compare command"),
        }
    }

    #[test]
    fn test_cli_compare_base_is_optional() {
        // Falls back to saved preferences at run time
        let cli = Cli::try_parse_from(["phonedupe", "compare", "new.txt"]).unwrap();
        match cli.command {
            Commands::Compare(args) => {
                assert_eq!(args.base, None);
                assert_eq!(args.new, vec![PathBuf::from("new.txt")]);
            }
            _ => panic!("Expected Compare command"),
        }
    }

    #[test]
    fn test_cli_compare_requires_new_files() {
        let result = Cli::try_parse_from(["phonedupe", "compare", "--base", "base.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_load() {
        let cli =
            Cli::try_parse_from(["phonedupe", "load", "session.json", "--format", "csv"]).unwrap();
        match cli.command {
            Commands::Load(args) => {
                assert_eq!(args.path, PathBuf::from("session.json"));
                assert_eq!(args.format, OutputFormat::Csv);
            }
            _ => panic!("Expected Load command"),
        }
    }

    #[test]
    fn test_cli_quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["phonedupe", "-v", "-q", "dedupe", "a.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_quiet() {
        let cli = Cli::try_parse_from(["phonedupe", "-q", "dedupe", "a.txt"]).unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_invalid_subcommand() {
        let result = Cli::try_parse_from(["phonedupe", "invalid", "a.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_version_flag() {
        // clap exits on --version
        let result = Cli::try_parse_from(["phonedupe", "--version"]);
        assert!(result.is_err());
    }
}
