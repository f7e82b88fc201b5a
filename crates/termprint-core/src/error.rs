//! Error types for termprint-core.

use thiserror::Error;

/// Errors that can occur while emitting rendered output.
///
/// Rendering itself is infallible; only writing to the sink can fail.
#[derive(Debug, Error)]
pub enum PrintError {
    /// IO error from the output sink.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PrintError {
    /// Returns true if the sink was closed by the reader (e.g. `| head`).
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Self::Io(e) => e.kind() == std::io::ErrorKind::BrokenPipe,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_error_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PrintError = io_err.into();
        assert!(matches!(err, PrintError::Io(_)));
        assert!(err.to_string().contains("IO error"));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_print_error_broken_pipe() {
        let err = PrintError::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert!(err.is_broken_pipe());

        let err = PrintError::from(std::io::Error::from(std::io::ErrorKind::Other));
        assert!(!err.is_broken_pipe());
    }

    #[test]
    fn test_print_error_source() {
        use std::error::Error as _;
        let err = PrintError::from(std::io::Error::other("boom"));
        assert!(err.source().is_some());
    }
}
