//! Structured error handling and exit codes.

use serde::Serialize;

/// Exit codes for the phonedupe application.
///
/// - 0: Success (run completed, valid numbers produced)
/// - 1: General error (unexpected failure)
/// - 2: No valid numbers (inputs were readable but nothing normalized)
/// - 3: Partial success (some inputs unreadable, run completed with the rest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitCode {
    /// Success: processing completed and produced valid numbers.
    Success = 0,
    /// General error: an unexpected error occurred.
    GeneralError = 1,
    /// No valid numbers: inputs were read but nothing normalized.
    NoValidNumbers = 2,
    /// Partial success: some input files could not be read.
    PartialSuccess = 3,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "PD000",
            Self::GeneralError => "PD001",
            Self::NoValidNumbers => "PD002",
            Self::PartialSuccess => "PD003",
        }
    }
}

/// Structured error information for JSON output.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "PD001")
    pub code: String,
    /// The exit code number
    pub exit_code: i32,
    /// Human-readable error message
    pub message: String,
}

impl StructuredError {
    /// Create a new structured error from an anyhow error and an exit code.
    #[must_use]
    pub fn new(err: &anyhow::Error, exit_code: ExitCode) -> Self {
        Self {
            code: exit_code.code_prefix().to_string(),
            exit_code: exit_code.as_i32(),
            message: format!("{err:#}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::NoValidNumbers.as_i32(), 2);
        assert_eq!(ExitCode::PartialSuccess.as_i32(), 3);
    }

    #[test]
    fn test_code_prefixes() {
        assert_eq!(ExitCode::Success.code_prefix(), "PD000");
        assert_eq!(ExitCode::PartialSuccess.code_prefix(), "PD003");
    }

    #[test]
    fn test_structured_error() {
        let err = anyhow::anyhow!("base path not found");
        let structured = StructuredError::new(&err, ExitCode::GeneralError);
        assert_eq!(structured.code, "PD001");
        assert_eq!(structured.exit_code, 1);
        assert!(structured.message.contains("base path not found"));
    }
}
