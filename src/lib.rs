//! Zeroes a random half of a file's bytes and writes the result back under
//! the same path.
//!
//! The pipeline runs four stages in order: [`path::resolve`],
//! [`loader::load`], [`corruptor::corrupt`] and [`writer::rewrite`].
//!
//! This is destructive. The original file is deleted before the corrupted
//! buffer is written, so a failed write leaves nothing behind.

pub mod corruptor;
pub mod error;
pub mod loader;
pub mod path;
pub mod pipeline;
pub mod writer;

pub use error::{BalanceError, Result};
pub use pipeline::{run, Report};
