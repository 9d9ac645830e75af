//! Error types for Portfolio Studio

use thiserror::Error;

/// Main error type for Portfolio Studio operations.
///
/// Navigation itself never fails: unknown view ids are defined no-ops.
/// Errors only arise at the I/O edges (theme preference, contact call).
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Contact form fields failed validation
    #[error("Invalid contact message: {0}")]
    InvalidContact(String),

    /// Contact submission transport failure
    #[error("Submission error: {0}")]
    Submission(#[from] reqwest::Error),

    /// Contact endpoint answered with a non-success status
    #[error("Submission rejected with status {0}")]
    SubmissionRejected(u16),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::InvalidContact("email is required".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid contact message: email is required"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PortfolioError = io_err.into();
        assert!(matches!(err, PortfolioError::Io(_)));
    }
}
