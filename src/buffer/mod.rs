//! Internal buffer management.
//!
//! - [`Scratch`] - Transient read buffer of `chunk_size` bytes, recycled
//!   through a thread-local pool so a call does not allocate per read
//! - [`Residual`] - Bytes read but not yet handed out as a line
//!
//! This is an implementation detail and not part of the public API.

mod pool;
mod residual;

pub(crate) use pool::Scratch;
pub(crate) use residual::Residual;
