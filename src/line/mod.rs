//! Line types.
//!
//! - [`Line`] - One line handed out by a reader, with its stream offset

mod data;

pub use data::Line;
pub(crate) use data::NEWLINE;
