//! RIB schedule tables
//!
//! Both tables are variable length. Their size and their parse order are
//! driven by the same [`RibCounts`](crate::context::RibCounts), taken from a
//! freshly read [`HanRibLimits`](crate::dimension::HanRibLimits).

pub mod active;
pub mod next;

pub use active::ActiveRibSchedule;
pub use next::NextRibSchedule;

/// Width of the schedule identifier field
pub const SCHEDULE_ID_SIZE: usize = 30;

/// Offset of the writable configuration register in both schedule tables
pub const CONFIG_OFFSET: u32 = 0;
