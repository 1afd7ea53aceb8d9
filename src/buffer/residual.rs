//! Residual byte buffer held between line reads.

use bytes::{Bytes, BytesMut};

use crate::line::NEWLINE;

/// Bytes read from a source but not yet returned as a line.
///
/// Grows as needed; the chunk size of the reader only affects how many bytes
/// arrive per `extend` call. `scanned` records how much of the buffer is known
/// to hold no newline, so long lines read in small chunks are not rescanned
/// from the start on every read.
#[derive(Debug, Default)]
pub struct Residual {
    buf: BytesMut,
    scanned: usize,
}

impl Residual {
    /// Appends freshly read bytes.
    pub fn extend(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    /// Position of the first newline, if any.
    fn find_newline(&self) -> Option<usize> {
        self.buf[self.scanned..]
            .iter()
            .position(|&b| b == NEWLINE)
            .map(|i| self.scanned + i)
    }

    /// Returns true if a complete line is buffered.
    pub fn has_line(&self) -> bool {
        self.find_newline().is_some()
    }

    /// Splits off the first complete line, newline included.
    pub fn take_line(&mut self) -> Option<Bytes> {
        match self.find_newline() {
            Some(pos) => {
                self.scanned = 0;
                Some(self.buf.split_to(pos + 1).freeze())
            }
            None => {
                self.scanned = self.buf.len();
                None
            }
        }
    }

    /// Takes every buffered byte, leaving the buffer empty.
    ///
    /// Returns `None` when there is nothing buffered.
    pub fn take_all(&mut self) -> Option<Bytes> {
        self.scanned = 0;
        if self.buf.is_empty() {
            return None;
        }
        Some(self.buf.split().freeze())
    }

    /// Drops all buffered bytes and releases the allocation.
    pub fn discard(&mut self) {
        self.buf = BytesMut::new();
        self.scanned = 0;
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}
