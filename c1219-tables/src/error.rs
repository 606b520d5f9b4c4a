//! Error types shared with `c1219-core`

pub use c1219_core::error::{C1219Error, C1219Result};
