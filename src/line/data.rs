//! The Line type - one line of a byte stream.

use bytes::Bytes;
use std::fmt;

/// The newline byte that terminates a line.
pub(crate) const NEWLINE: u8 = b'\n';

/// A line read from a byte stream.
///
/// `data` holds the bytes up to and including the terminating newline. The
/// last line of a stream that does not end in a newline is returned as-is,
/// without a newline appended.
///
/// # Example
///
/// ```
/// use nextline::Line;
/// use bytes::Bytes;
///
/// let line = Line {
///     data: Bytes::from_static(b"hello\n"),
///     offset: 0,
/// };
///
/// assert!(line.is_terminated());
/// assert_eq!(line.content(), b"hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line {
    /// The line bytes, including the trailing newline if present.
    pub data: Bytes,

    /// Offset of the first byte of the line in the source stream.
    pub offset: u64,
}

impl Line {
    /// Creates a line starting at offset 0.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self::with_offset(data, 0)
    }

    /// Creates a line starting at `offset`.
    pub fn with_offset(data: impl Into<Bytes>, offset: u64) -> Self {
        Self {
            data: data.into(),
            offset,
        }
    }

    /// Returns the length of the line in bytes, newline included.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the line has no bytes.
    ///
    /// Readers never hand out empty lines.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true if the line ends with a newline.
    ///
    /// Only the final line of a stream can be unterminated.
    pub fn is_terminated(&self) -> bool {
        self.data.last() == Some(&NEWLINE)
    }

    /// Returns the line bytes, newline included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns the line bytes without the trailing newline.
    pub fn content(&self) -> &[u8] {
        match self.data.split_last() {
            Some((&NEWLINE, rest)) => rest,
            _ => &self.data[..],
        }
    }

    /// Returns the end offset (exclusive).
    pub fn end(&self) -> u64 {
        self.offset + self.data.len() as u64
    }

    /// Returns the line as a range of stream offsets.
    pub fn range(&self) -> std::ops::Range<u64> {
        self.offset..self.end()
    }

    /// Consumes the line and returns the underlying bytes.
    pub fn into_bytes(self) -> Bytes {
        self.data
    }
}

impl AsRef<[u8]> for Line {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<Line> for Bytes {
    fn from(line: Line) -> Self {
        line.data
    }
}

impl From<Line> for Vec<u8> {
    fn from(line: Line) -> Self {
        line.data.to_vec()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({} bytes @ {}", self.len(), self.offset)?;
        if !self.is_terminated() {
            write!(f, ", unterminated")?;
        }
        write!(f, ")")
    }
}
