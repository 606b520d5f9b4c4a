//! ANSI C12.19 HAN, RIB and RFLAN table definitions
//!
//! This crate provides:
//! - Record types nested inside tables (billing periods, block prices, rate labels)
//! - Dimension tables and the [`DimensionSnapshot`] taken from them
//! - Variable-length RIB schedule tables sized by those snapshots
//! - Fixed-length RFLAN neighbor and meter key tables
//! - HAN upstream and downstream event logs with chunked loading
//! - A table number registry with size dispatch
//!
//! Parsing and serialization are stateless. Reading a dimension table before
//! sizing a dependent one is the caller's job; see the `c1219-session` crate.

pub mod context;
pub mod dimension;
pub mod error;
pub mod event_log;
pub mod fixed;
pub mod records;
pub mod registry;
pub mod schedule;
pub mod table;

pub use context::{COUNT_NOT_POPULATED, DimensionSnapshot, RibCounts, populated};
pub use dimension::{HanLogControl, HanRibLimits, LogDimensions, LogDirection};
pub use error::{C1219Error, C1219Result};
pub use event_log::{
    EntryLayout, EventArgument, HanEventKind, HanEventLog, HanLogEntry, LogHeader, LogLoadState,
    LogLoader, ReadChunk,
};
pub use fixed::{MeterKeyTable, RfLanNeighborTable};
pub use records::{
    BillingPeriod, BlockPeriod, BlockPriceEntry, NextBlockPeriod, NextBlockPrices,
    PublishPriceData, RateLabel, Record, RfLanNeighbor, RibConfig,
};
pub use registry::{TableContext, TableId, required_size};
pub use schedule::{ActiveRibSchedule, NextRibSchedule};
pub use table::Table;
