//! Dimension tables
//!
//! These tables hold the counts that size other tables. They must be read
//! before any dependent table is sized.

pub mod han_log_control;
pub mod rib_limits;

pub use han_log_control::{HanLogControl, LogDirection, LogDimensions};
pub use rib_limits::HanRibLimits;
