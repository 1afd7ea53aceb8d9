//! Per-source read state - the engine behind every reader.
//!
//! [`ReadState`] owns the residual bytes of one source and knows nothing about
//! where bytes come from. Callers feed it with [`absorb`](ReadState::absorb),
//! ask for lines with [`take_line`](ReadState::take_line) and close it with
//! [`finish`](ReadState::finish) at end-of-input or [`fail`](ReadState::fail)
//! on a read error. The sync readers drive it through
//! [`next_from`](ReadState::next_from); the async stream drives it from
//! `poll_next`.
//!
//! # Example
//!
//! ```
//! use nextline::{ReadPhase, ReadState};
//!
//! let mut state = ReadState::new();
//! state.absorb(b"one\ntw");
//! assert_eq!(state.phase(), ReadPhase::Ready);
//!
//! let line = state.take_line().unwrap();
//! assert_eq!(line.as_bytes(), b"one\n");
//! assert_eq!(state.phase(), ReadPhase::Buffering);
//!
//! state.absorb(b"o");
//! let last = state.finish().unwrap();
//! assert_eq!(last.as_bytes(), b"two");
//! assert_eq!(state.phase(), ReadPhase::Done);
//! ```

use std::io::{ErrorKind, Read};

use crate::buffer::{Residual, Scratch};
use crate::error::LineError;
use crate::line::Line;

/// Observable phase of a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadPhase {
    /// Nothing buffered; more input may follow.
    Empty,
    /// Bytes buffered, but no complete line yet.
    Buffering,
    /// At least one complete line is buffered.
    Ready,
    /// End-of-input reached and everything delivered, or a read failed.
    /// Terminal.
    Done,
}

/// Residual bytes and delivery progress of one source.
#[derive(Debug, Default)]
pub struct ReadState {
    residual: Residual,
    /// Stream offset of the first residual byte.
    delivered: u64,
    done: bool,
}

impl ReadState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> ReadPhase {
        if self.done {
            ReadPhase::Done
        } else if self.residual.is_empty() {
            ReadPhase::Empty
        } else if self.residual.has_line() {
            ReadPhase::Ready
        } else {
            ReadPhase::Buffering
        }
    }

    /// Returns true once the state is terminal.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Bytes read but not yet handed out.
    pub fn buffered(&self) -> &[u8] {
        self.residual.as_bytes()
    }

    /// Total bytes handed out so far.
    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    /// Appends bytes read from the source.
    ///
    /// Ignored once the state is done.
    pub fn absorb(&mut self, data: &[u8]) {
        if self.done {
            return;
        }
        self.residual.extend(data);
    }

    /// Hands out the first complete buffered line, if any.
    pub fn take_line(&mut self) -> Option<Line> {
        if self.done {
            return None;
        }
        let data = self.residual.take_line()?;
        Some(self.emit(data))
    }

    /// Marks end-of-input.
    ///
    /// Returns the next buffered line if one is complete, otherwise the
    /// remaining partial bytes as a final unterminated line. The state only
    /// becomes done once the residual is empty, so every buffered line is
    /// still delivered by repeated calls.
    pub fn finish(&mut self) -> Option<Line> {
        if self.done {
            return None;
        }
        if let Some(line) = self.take_line() {
            return Some(line);
        }
        self.done = true;
        log::debug!("end of input after {} bytes", self.delivered + self.residual.len() as u64);
        let data = self.residual.take_all()?;
        Some(self.emit(data))
    }

    /// Discards buffered bytes after a read error. Terminal.
    pub fn fail(&mut self) {
        if !self.residual.is_empty() {
            log::warn!(
                "discarding {} buffered bytes after read error",
                self.residual.len()
            );
        }
        self.residual.discard();
        self.done = true;
    }

    fn emit(&mut self, data: bytes::Bytes) -> Line {
        let line = Line::with_offset(data, self.delivered);
        self.delivered = line.end();
        log::trace!("line of {} bytes @ {}", line.len(), line.offset);
        line
    }

    /// Produces the next line, reading from `reader` in chunks of at most
    /// `chunk_size` bytes until a newline, end-of-input or an error is seen.
    ///
    /// A read error discards the residual and makes the state terminal; the
    /// error is returned once and later calls return `Ok(None)`. Interrupted
    /// reads are retried.
    ///
    /// `chunk_size` must be non-zero; an empty read buffer would look like
    /// end-of-input.
    pub fn next_from<R: Read + ?Sized>(
        &mut self,
        reader: &mut R,
        chunk_size: usize,
    ) -> Result<Option<Line>, LineError> {
        if let Some(line) = self.take_line() {
            return Ok(Some(line));
        }
        if self.done {
            return Ok(None);
        }
        debug_assert!(chunk_size > 0);

        let mut chunk = Scratch::take(chunk_size);
        loop {
            match reader.read(&mut chunk) {
                Ok(0) => return Ok(self.finish()),
                Ok(n) => {
                    log::trace!("read {} bytes", n);
                    self.absorb(&chunk[..n]);
                    if let Some(line) = self.take_line() {
                        return Ok(Some(line));
                    }
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    log::warn!("read failed: {}", e);
                    self.fail();
                    return Err(e.into());
                }
            }
        }
    }
}
