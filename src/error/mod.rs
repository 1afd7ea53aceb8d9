//! Error types for nextline.

use std::fmt;

/// Errors that can occur while reading lines.
#[derive(Debug)]
pub enum LineError {
    /// An I/O error occurred while reading from the source.
    ///
    /// The residual bytes of the source are discarded when this is reported,
    /// and the source is terminal afterwards.
    Io(std::io::Error),

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl LineError {
    /// Returns the underlying I/O error kind, if this is an I/O error.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            LineError::Io(e) => Some(e.kind()),
            _ => None,
        }
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::Io(e) => write!(f, "io error: {}", e),
            LineError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for LineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LineError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LineError {
    fn from(e: std::io::Error) -> Self {
        LineError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: LineError = io_err.into();
        assert!(matches!(err, LineError::Io(_)));
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_display() {
        let err = LineError::InvalidConfig {
            message: "chunk size must be non-zero",
        };
        assert_eq!(err.to_string(), "invalid config: chunk size must be non-zero");
        assert!(err.io_kind().is_none());
        assert!(err.source().is_none());
    }
}
