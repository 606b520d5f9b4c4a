//! Table session for ANSI C12.19 meters
//!
//! This crate ties the table codec to a PSEM transport. It owns the cached
//! state of every table, refreshes dimension tables before the tables they
//! size, drives chunked event log loads and writes the writable subsets of
//! the RIB tables.

pub mod config;
pub mod error;
pub mod session;
pub mod state;

pub use config::SessionConfig;
pub use error::{C1219Error, C1219Result};
pub use session::{LogSelection, RibSchedule, TableSession};
pub use state::TableState;
