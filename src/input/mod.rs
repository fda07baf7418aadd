//! Bounded incremental file reading.

mod reader;

pub use reader::{Limits, read_full, read_limited};
