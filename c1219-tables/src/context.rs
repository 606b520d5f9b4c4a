//! Dimension snapshots
//!
//! Variable tables never hold a handle to their dimension table. Callers read
//! the dimension table, take a [`DimensionSnapshot`] of its counts and pass
//! that value to the pure sizing and parsing functions.

use serde::{Deserialize, Serialize};

/// Count value reserved to mean "not populated"
pub const COUNT_NOT_POPULATED: u8 = 0xFF;

/// Number of array elements a dimension count stands for
///
/// `0` and anything from `255` up mean the dependent array is absent.
pub fn populated(count: u8) -> usize {
    if count == 0 || count >= COUNT_NOT_POPULATED {
        0
    } else {
        count as usize
    }
}

/// One set of RIB schedule counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RibCounts {
    pub billing_periods: u8,
    pub block_periods: u8,
    pub blocks: u8,
}

impl RibCounts {
    pub fn new(billing_periods: u8, block_periods: u8, blocks: u8) -> Self {
        Self {
            billing_periods,
            block_periods,
            blocks,
        }
    }

    pub fn billing_period_count(&self) -> usize {
        populated(self.billing_periods)
    }

    pub fn block_period_count(&self) -> usize {
        populated(self.block_periods)
    }

    pub fn block_count(&self) -> usize {
        populated(self.blocks)
    }

    /// True when any count carries the "not populated" marker
    pub fn has_sentinel(&self) -> bool {
        [self.billing_periods, self.block_periods, self.blocks]
            .iter()
            .any(|&c| c >= COUNT_NOT_POPULATED)
    }
}

/// Counts copied out of a freshly read RIB limits table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DimensionSnapshot {
    pub active: RibCounts,
    pub next: RibCounts,
}

impl DimensionSnapshot {
    pub fn new(active: RibCounts, next: RibCounts) -> Self {
        Self { active, next }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_populated() {
        assert_eq!(populated(0), 0);
        assert_eq!(populated(1), 1);
        assert_eq!(populated(254), 254);
        assert_eq!(populated(255), 0);
    }

    #[test]
    fn test_sentinel_detection() {
        assert!(!RibCounts::new(1, 2, 3).has_sentinel());
        assert!(RibCounts::new(1, 255, 3).has_sentinel());
        assert_eq!(RibCounts::new(1, 255, 3).block_period_count(), 0);
    }
}
