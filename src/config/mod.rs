//! Configuration for line reading.
//!
//! - [`ReaderConfig`] - Size of each raw read from the source
//!
//! # Build-time override
//!
//! [`DEFAULT_CHUNK_SIZE`] is 42 bytes unless the crate is compiled with the
//! `NEXTLINE_CHUNK_SIZE` environment variable set:
//!
//! ```text
//! NEXTLINE_CHUNK_SIZE=4096 cargo build
//! ```
//!
//! The value must be a positive decimal integer; anything else fails the build.
//!
//! # Example
//!
//! ```
//! use nextline::ReaderConfig;
//!
//! // Read one byte at a time
//! let config = ReaderConfig::new(1)?;
//! assert_eq!(config.chunk_size(), 1);
//!
//! # Ok::<(), nextline::LineError>(())
//! ```

use crate::error::LineError;

/// Chunk size used when no build-time override is present.
pub const FALLBACK_CHUNK_SIZE: usize = 42;

/// Default number of bytes requested from the source per read.
pub const DEFAULT_CHUNK_SIZE: usize = parse_chunk_size(option_env!("NEXTLINE_CHUNK_SIZE"));

/// Parses a build-time chunk size override.
///
/// Evaluated in const context, so a malformed value is a compile error.
const fn parse_chunk_size(value: Option<&str>) -> usize {
    let digits = match value {
        Some(v) => v.as_bytes(),
        None => return FALLBACK_CHUNK_SIZE,
    };

    if digits.is_empty() {
        panic!("NEXTLINE_CHUNK_SIZE must not be empty");
    }

    let mut size: usize = 0;
    let mut i = 0;
    while i < digits.len() {
        let d = digits[i];
        if !d.is_ascii_digit() {
            panic!("NEXTLINE_CHUNK_SIZE must be a decimal integer");
        }
        size = match size.checked_mul(10) {
            Some(v) => v,
            None => panic!("NEXTLINE_CHUNK_SIZE overflows usize"),
        };
        size = match size.checked_add((d - b'0') as usize) {
            Some(v) => v,
            None => panic!("NEXTLINE_CHUNK_SIZE overflows usize"),
        };
        i += 1;
    }

    if size == 0 {
        panic!("NEXTLINE_CHUNK_SIZE must be positive");
    }
    size
}

/// Configuration for a line reader.
///
/// The chunk size bounds every raw read from the source. It does not bound
/// line length: the residual buffer grows independently until a newline or
/// end-of-input is seen.
///
/// # Example
///
/// ```
/// use nextline::{ReaderConfig, DEFAULT_CHUNK_SIZE};
///
/// let config = ReaderConfig::default();
/// assert_eq!(config.chunk_size(), DEFAULT_CHUNK_SIZE);
///
/// let config = ReaderConfig::default().with_chunk_size(4096);
/// assert_eq!(config.chunk_size(), 4096);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReaderConfig {
    /// Maximum bytes requested per read.
    chunk_size: usize,
}

impl ReaderConfig {
    /// Creates a new configuration with the given chunk size.
    ///
    /// # Errors
    ///
    /// Returns [`LineError::InvalidConfig`] if `chunk_size` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use nextline::ReaderConfig;
    ///
    /// assert!(ReaderConfig::new(0).is_err());
    /// assert_eq!(ReaderConfig::new(4)?.chunk_size(), 4);
    /// # Ok::<(), nextline::LineError>(())
    /// ```
    pub fn new(chunk_size: usize) -> Result<Self, LineError> {
        if chunk_size == 0 {
            return Err(LineError::InvalidConfig {
                message: "chunk size must be non-zero",
            });
        }

        Ok(Self { chunk_size })
    }

    /// Sets the chunk size.
    ///
    /// Not validated; call [`validate`](Self::validate) or let the reader
    /// constructor reject it.
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Returns the chunk size.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), LineError> {
        Self::new(self.chunk_size).map(|_| ())
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}
