//! Async stream adapter for line reading.
//!
//! # Example
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use nextline::{lines_async, ReaderConfig};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead + Unpin>(reader: R) -> Result<(), nextline::LineError> {
//!     let mut stream = lines_async(reader, ReaderConfig::default())?;
//!
//!     while let Some(line) = stream.next().await {
//!         let line = line?;
//!         println!("line: {} bytes", line.len());
//!     }
//!     Ok(())
//! }
//! ```

use std::io::ErrorKind;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use futures_core::stream::FusedStream;
use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::config::ReaderConfig;
use crate::error::LineError;
use crate::line::Line;
use crate::reader::{ReadPhase, ReadState};

pin_project! {
    /// A stream that yields lines from an async reader.
    ///
    /// Same contract as [`LineReader`](crate::LineReader): lines in source
    /// order, newline included, the final unterminated bytes as a last line,
    /// and a read error reported once before the stream ends.
    pub struct LineStream<R> {
        #[pin]
        reader: R,
        chunk: Vec<u8>,
        state: ReadState,
    }
}

impl<R: AsyncRead> LineStream<R> {
    /// Creates a new line stream from an async reader.
    ///
    /// # Errors
    ///
    /// Returns [`LineError::InvalidConfig`] if the chunk size is zero.
    pub fn new(reader: R, config: ReaderConfig) -> Result<Self, LineError> {
        config.validate()?;
        Ok(Self {
            reader,
            chunk: vec![0u8; config.chunk_size()],
            state: ReadState::new(),
        })
    }
}

impl<R> LineStream<R> {
    /// Returns the current phase of the stream.
    pub fn phase(&self) -> ReadPhase {
        self.state.phase()
    }

    /// Bytes read from the source but not yet returned.
    pub fn buffered(&self) -> &[u8] {
        self.state.buffered()
    }

    /// Unwraps the source. Buffered bytes are lost.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: AsyncRead> Stream for LineStream<R> {
    type Item = Result<Line, LineError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if let Some(line) = this.state.take_line() {
            return Poll::Ready(Some(Ok(line)));
        }
        if this.state.is_done() {
            return Poll::Ready(None);
        }

        loop {
            match this.reader.as_mut().poll_read(cx, &mut this.chunk[..]) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Err(e)) if e.kind() == ErrorKind::Interrupted => continue,
                Poll::Ready(Err(e)) => {
                    log::warn!("read failed: {}", e);
                    this.state.fail();
                    return Poll::Ready(Some(Err(LineError::Io(e))));
                }
                Poll::Ready(Ok(0)) => return Poll::Ready(this.state.finish().map(Ok)),
                Poll::Ready(Ok(n)) => {
                    log::trace!("read {} bytes", n);
                    this.state.absorb(&this.chunk[..n]);
                    if let Some(line) = this.state.take_line() {
                        return Poll::Ready(Some(Ok(line)));
                    }
                }
            }
        }
    }
}

impl<R: AsyncRead> FusedStream for LineStream<R> {
    fn is_terminated(&self) -> bool {
        self.state.is_done()
    }
}

/// Creates a line stream from an async reader.
///
/// Uses `futures_io::AsyncRead` for runtime-agnostic async I/O.
///
/// # Runtime Compatibility
///
/// For tokio users, you can use `tokio_util::compat` to convert
/// `tokio::io::AsyncRead` to `futures_io::AsyncRead`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use nextline::{lines_async, ReaderConfig};
///
/// let tokio_reader = tokio::fs::File::open("file").await?;
/// let stream = lines_async(tokio_reader.compat(), ReaderConfig::default())?;
/// ```
///
/// # Errors
///
/// Returns [`LineError::InvalidConfig`] if the chunk size is zero.
pub fn lines_async<R: AsyncRead>(reader: R, config: ReaderConfig) -> Result<LineStream<R>, LineError> {
    LineStream::new(reader, config)
}
