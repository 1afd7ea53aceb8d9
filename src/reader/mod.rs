//! Line readers over byte streams.
//!
//! - [`LineReader`] - Reads lines from a single [`std::io::Read`] source
//! - [`LineRegistry`] - Per-descriptor read state for callers juggling
//!   several sources, keyed by descriptor identity
//! - [`ReadState`] - The I/O-free engine both are built on

mod lines;
mod registry;
mod state;

pub use lines::{LineReader, lines_from};
pub use registry::LineRegistry;
pub use state::{ReadPhase, ReadState};
