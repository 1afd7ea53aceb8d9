//! Async streaming support for line reading.
//!
//! This module reads lines through the `futures-io::AsyncRead` trait, making
//! it runtime-agnostic and compatible with tokio, async-std, smol, and other
//! async runtimes.
//!
//! - [`lines_async`] - Creates an async stream of lines from an async reader
//!
//! This module requires the `async-io` feature to be enabled.

mod stream;

pub use stream::{LineStream, lines_async};
