//! Error types for the termprint CLI.

use termprint_core::PrintError;
use thiserror::Error;

/// Errors that can occur while building or printing a report.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// IO error reading the report.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Report file is not valid YAML for the report format.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Writing the output failed.
    #[error("Print failed: {0}")]
    Print(#[from] PrintError),

    /// A report value has an unsupported shape.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Error message
        message: String,
    },

    /// Nothing was given to print.
    #[error("Nothing to print: pass --title, --file or LINES")]
    EmptyReport,
}

impl CliError {
    /// Returns true if the reader closed the output early.
    #[must_use]
    pub(crate) fn is_broken_pipe(&self) -> bool {
        match self {
            Self::Print(e) => e.is_broken_pipe(),
            Self::Io(e) => e.kind() == std::io::ErrorKind::BrokenPipe,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_display() {
        let err = CliError::InvalidValue {
            field: "pairs".to_string(),
            message: "expected a scalar".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for 'pairs': expected a scalar");

        assert!(CliError::EmptyReport.to_string().contains("Nothing to print"));
    }

    #[test]
    fn test_cli_error_from_print_error() {
        let print = PrintError::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        let err: CliError = print.into();
        assert!(matches!(err, CliError::Print(_)));
        assert!(err.is_broken_pipe());
    }

    #[test]
    fn test_cli_error_from_yaml() {
        let yaml_err = serde_yaml_ng::from_str::<Vec<String>>("{").unwrap_err();
        let err: CliError = yaml_err.into();
        assert!(err.to_string().starts_with("YAML error"));
        assert!(!err.is_broken_pipe());
    }
}
