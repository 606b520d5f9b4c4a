//! HAN event logs
//!
//! A log table is an 11-byte header followed by a fixed number of entry
//! slots. Entry size depends on the HAN log control table; the meaning of the
//! argument bytes depends on the event id.

pub mod argument;
pub mod entry;
pub mod header;
pub mod kinds;
pub mod layout;
pub mod loader;
pub mod log;

pub use argument::{EventArgument, FailureReason, LoadControlStatus, NetworkState, decode_argument};
pub use entry::HanLogEntry;
pub use header::LogHeader;
pub use kinds::{HanEventKind, describe, downstream, upstream};
pub use layout::EntryLayout;
pub use loader::{LogLoadState, LogLoader, ReadChunk};
pub use log::HanEventLog;
