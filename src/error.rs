//! Unified error hierarchy for liftparse
//!
//! The parser itself is total and never fails; errors only arise at the
//! edges, when reading input, exporting results or loading configuration.

use thiserror::Error;

use crate::export::ExportError;

/// Top-level error type for all liftparse operations
#[derive(Debug, Error)]
pub enum LiftParseError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Export errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for liftparse operations
pub type Result<T> = std::result::Result<T, LiftParseError>;

impl LiftParseError {
    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            LiftParseError::Io(e) => format!("Could not read or write a file: {e}"),
            LiftParseError::Configuration(reason) => {
                format!("Configuration problem: {reason}. Check your config file.")
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let err = LiftParseError::Configuration("bad toml".to_string());
        assert!(err.user_message().contains("Configuration problem"));

        let err = LiftParseError::Internal("oops".to_string());
        assert_eq!(err.user_message(), "Internal error: oops");
    }

    #[test]
    fn test_export_error_conversion() {
        let err: LiftParseError = ExportError::UnsupportedFormat("xml".to_string()).into();
        assert!(matches!(err, LiftParseError::Export(_)));
        assert!(err.to_string().contains("xml"));
    }
}
