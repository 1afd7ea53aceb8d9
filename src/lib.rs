//! nextline
//!
//! Line-at-a-time reading from any byte stream.
//!
//! `nextline` reads a source in fixed-size chunks, keeps whatever follows the
//! last newline in a residual buffer, and hands lines back one per call. It is
//! the classic `get_next_line` contract with the hidden static state replaced
//! by values the caller owns.
//!
//! The crate intentionally:
//! - does NOT open or close descriptors
//! - does NOT decode text (lines are bytes)
//! - does NOT seek or rewind
//!
//! # Sync
//!
//! ```no_run
//! use std::fs::File;
//! use nextline::{LineReader, LineError};
//!
//! fn main() -> Result<(), LineError> {
//!     let file = File::open("data.txt")?;
//!     let mut reader = LineReader::new(file);
//!
//!     while let Some(line) = reader.next_line()? {
//!         println!("line {} bytes @ {}", line.len(), line.offset);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Many descriptors
//!
//! ```no_run
//! use std::fs::File;
//! use nextline::{LineRegistry, LineError};
//!
//! fn main() -> Result<(), LineError> {
//!     let mut a = File::open("a.txt")?;
//!     let mut b = File::open("b.txt")?;
//!     let mut registry = LineRegistry::new();
//!
//!     // one residual buffer per descriptor, owned by the registry
//!     let first_a = registry.next_line_fd(&mut a)?;
//!     let first_b = registry.next_line_fd(&mut b)?;
//!     println!("{:?} {:?}", first_a, first_b);
//!     Ok(())
//! }
//! ```
//!
//! # Async (feature = "async-io")
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
//!         println!("line {}", line.len());
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod line;
mod reader;

mod buffer; // internal (residual + thread-local scratch reuse)

#[cfg(feature = "async-io")]
mod async_stream;

//
// Public surface
//

pub use config::{DEFAULT_CHUNK_SIZE, FALLBACK_CHUNK_SIZE, ReaderConfig};
pub use error::LineError;
pub use line::Line;
pub use reader::{LineReader, LineRegistry, ReadPhase, ReadState, lines_from};

#[cfg(feature = "async-io")]
pub use async_stream::{LineStream, lines_async};
