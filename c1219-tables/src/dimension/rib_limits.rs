//! RIB limits table (2439)
//!
//! | offset | field | access |
//! |---|---|---|
//! | 0 | active billing periods, block periods, blocks | read only |
//! | 3 | reserved (128 bytes) | read only |
//! | 131 | next billing periods, block periods, blocks | read/write |

use crate::context::{DimensionSnapshot, RibCounts};
use crate::error::C1219Result;
use crate::table::Table;
use c1219_core::{TableReader, TableWriter};
use serde::{Deserialize, Serialize};

/// Counts that size the active and next RIB schedule tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HanRibLimits {
    pub active: RibCounts,
    #[serde(with = "serde_bytes")]
    reserved: Vec<u8>,
    pub next: RibCounts,
}

impl HanRibLimits {
    pub const RESERVED_SIZE: usize = 128;
    pub const SIZE: usize = 3 + Self::RESERVED_SIZE + 3;
    /// Offset of the writable next counts
    pub const NEXT_COUNTS_OFFSET: u32 = (3 + Self::RESERVED_SIZE) as u32;
    pub const NEXT_COUNTS_SIZE: usize = 3;

    pub fn new(active: RibCounts, next: RibCounts) -> Self {
        Self {
            active,
            reserved: vec![0; Self::RESERVED_SIZE],
            next,
        }
    }

    pub fn reserved(&self) -> &[u8] {
        &self.reserved
    }

    pub fn snapshot(&self) -> DimensionSnapshot {
        DimensionSnapshot::new(self.active, self.next)
    }

    pub fn set_next(&mut self, next: RibCounts) {
        self.next = next;
    }

    /// The only bytes ever written back, placed at [`Self::NEXT_COUNTS_OFFSET`]
    pub fn next_counts_bytes(&self) -> [u8; Self::NEXT_COUNTS_SIZE] {
        [
            self.next.billing_periods,
            self.next.block_periods,
            self.next.blocks,
        ]
    }
}

impl Default for HanRibLimits {
    fn default() -> Self {
        Self::new(RibCounts::default(), RibCounts::default())
    }
}

fn read_counts(reader: &mut TableReader<'_>) -> C1219Result<RibCounts> {
    Ok(RibCounts {
        billing_periods: reader.read_u8()?,
        block_periods: reader.read_u8()?,
        blocks: reader.read_u8()?,
    })
}

fn write_counts(writer: &mut TableWriter, counts: &RibCounts) {
    writer.write_u8(counts.billing_periods);
    writer.write_u8(counts.block_periods);
    writer.write_u8(counts.blocks);
}

impl Table for HanRibLimits {
    const TABLE_ID: u16 = 2439;
    type Dimensions = ();

    fn required_size(_: &()) -> usize {
        Self::SIZE
    }

    fn parse_fields(reader: &mut TableReader<'_>, _: &()) -> C1219Result<Self> {
        let active = read_counts(reader)?;
        let reserved = reader.read_bytes(Self::RESERVED_SIZE)?;
        let next = read_counts(reader)?;
        Ok(Self {
            active,
            reserved,
            next,
        })
    }

    fn write_fields(&self, writer: &mut TableWriter, _: &()) -> C1219Result<()> {
        write_counts(writer, &self.active);
        writer.write_bytes(&self.reserved);
        write_counts(writer, &self.next);
        Ok(())
    }
}
