//! Transport layer for ANSI C12.19 table access
//!
//! This crate provides the PSEM table services a table codec needs (full and
//! offset reads and writes) as an async trait, plus an in-memory meter image
//! used by tests and simulators.

pub mod chunked;
pub mod error;
pub mod memory;
pub mod psem;

pub use chunked::read_chunked;
pub use error::{C1219Error, C1219Result};
pub use memory::{InjectedFailure, MemorySettings, MemoryTransport, PsemRequest};
pub use psem::{PsemTransport, RESPONSE_OVERHEAD, check_response};
