//! Synchronous line reader over a single source.
//!
//! # Example
//!
//! ```no_run
//! use nextline::{LineReader, LineError};
//! use std::fs::File;
//!
//! let file = File::open("notes.txt")?;
//! let mut reader = LineReader::new(file);
//!
//! while let Some(line) = reader.next_line()? {
//!     print!("{}", String::from_utf8_lossy(line.as_bytes()));
//! }
//! # Ok::<(), LineError>(())
//! ```

use std::io::Read;

use crate::config::ReaderConfig;
use crate::error::LineError;
use crate::line::Line;

use super::state::{ReadPhase, ReadState};

/// Reads a source one line at a time.
///
/// Each call to [`next_line`](Self::next_line) returns at most one line,
/// reading chunks of at most [`ReaderConfig::chunk_size`] bytes until a newline
/// turns up. Bytes past the newline stay buffered for the next call.
///
/// `LineReader` is also an [`Iterator`] over `Result<Line, LineError>`.
///
/// # Example
///
/// ```
/// use nextline::{LineReader, ReaderConfig};
///
/// let config = ReaderConfig::new(4)?;
/// let mut reader = LineReader::with_config(&b"abc\ndef\n"[..], config)?;
///
/// assert_eq!(reader.next_line()?.unwrap().as_bytes(), b"abc\n");
/// assert_eq!(reader.next_line()?.unwrap().as_bytes(), b"def\n");
/// assert!(reader.next_line()?.is_none());
/// # Ok::<(), nextline::LineError>(())
/// ```
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    config: ReaderConfig,
    state: ReadState,
}

impl<R: Read> LineReader<R> {
    /// Creates a reader with the default configuration.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            config: ReaderConfig::default(),
            state: ReadState::new(),
        }
    }

    /// Creates a reader with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LineError::InvalidConfig`] if the chunk size is zero.
    pub fn with_config(reader: R, config: ReaderConfig) -> Result<Self, LineError> {
        config.validate()?;
        Ok(Self {
            reader,
            config,
            state: ReadState::new(),
        })
    }

    /// Returns the next line.
    ///
    /// - `Ok(Some(line))` - the next line, newline included, or the final
    ///   unterminated bytes of the source
    /// - `Ok(None)` - end-of-input; every later call returns `Ok(None)` too
    /// - `Err(_)` - the source failed; buffered bytes are discarded and every
    ///   later call returns `Ok(None)`
    pub fn next_line(&mut self) -> Result<Option<Line>, LineError> {
        self.state.next_from(&mut self.reader, self.config.chunk_size())
    }
}

impl<R> LineReader<R> {
    /// Returns the configuration.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Returns the current phase of the reader.
    pub fn phase(&self) -> ReadPhase {
        self.state.phase()
    }

    /// Bytes read from the source but not yet returned.
    pub fn buffered(&self) -> &[u8] {
        self.state.buffered()
    }

    /// Gets a reference to the underlying source.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Gets a mutable reference to the underlying source.
    ///
    /// Reading from it directly skips past bytes the line reader has not seen.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Unwraps the source. Buffered bytes are lost.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = Result<Line, LineError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

impl<R: Read> std::iter::FusedIterator for LineReader<R> {}

/// Creates a [`LineReader`] with the default configuration.
///
/// # Example
///
/// ```
/// use nextline::lines_from;
///
/// let lines: Vec<_> = lines_from(&b"a\nb"[..]).collect::<Result<_, _>>()?;
/// assert_eq!(lines.len(), 2);
/// assert!(!lines[1].is_terminated());
/// # Ok::<(), nextline::LineError>(())
/// ```
pub fn lines_from<R: Read>(reader: R) -> LineReader<R> {
    LineReader::new(reader)
}
