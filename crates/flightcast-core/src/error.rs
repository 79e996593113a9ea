//! Error types for flightcast.

use thiserror::Error;

/// Main error type for flightcast operations.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from underlying system calls.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport failure, non-2xx status, or malformed response body.
    #[error("fetch error: {message}")]
    Fetch { message: String },

    /// Invalid configuration value.
    #[error("config error: {message}")]
    Config { message: String },
}

impl Error {
    /// Build a fetch error from anything displayable.
    pub fn fetch(message: impl std::fmt::Display) -> Self {
        Error::Fetch {
            message: message.to_string(),
        }
    }

    /// Returns true if this error is a fetch failure.
    ///
    /// Fetch failures are recovered locally with a fallback prediction;
    /// they never terminate the process.
    pub fn is_fetch(&self) -> bool {
        matches!(self, Error::Fetch { .. })
    }
}

/// Convenience result type for flightcast operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_fetch() {
        let err = Error::Fetch {
            message: "connection refused".into(),
        };
        assert_eq!(err.to_string(), "fetch error: connection refused");
    }

    #[test]
    fn error_display_config() {
        let err = Error::Config {
            message: "empty base URL".into(),
        };
        assert_eq!(err.to_string(), "config error: empty base URL");
    }

    #[test]
    fn fetch_helper_builds_fetch_variant() {
        let err = Error::fetch("HTTP 503");
        assert!(err.is_fetch());
        assert_eq!(err.to_string(), "fetch error: HTTP 503");
    }

    #[test]
    fn io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_fetch());
    }
}
