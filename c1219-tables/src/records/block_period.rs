//! Block period record and the per-block arrays of a pending schedule
//!
//! Layout of a block period:
//!
//! | field | width |
//! |---|---|
//! | start | 4 |
//! | duration | 3 |
//! | standing charge | 4 |
//! | block prices | blocks x 10 |
//! | block event ids | blocks x 4 |
//!
//! The two arrays follow each other; they are not interleaved.

use super::{BlockPriceEntry, NextBlockPeriod, Record, ensure_len, parse_array, write_array};
use crate::error::C1219Result;
use c1219_core::{MeterTime, TableReader, TableWriter, U24};
use serde::{Deserialize, Serialize};

/// Size of one block event id
const EVENT_ID_SIZE: usize = 4;

/// A block pricing period with its per-block prices and event ids
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockPeriod {
    pub start: MeterTime,
    /// Length in minutes
    pub duration: U24,
    /// Fixed charge per period, implied decimal point
    pub standing_charge: u32,
    pub prices: Vec<BlockPriceEntry>,
    pub event_ids: Vec<u32>,
}

impl BlockPeriod {
    /// Header fields shared with [`NextBlockPeriod`]
    pub fn header(&self) -> NextBlockPeriod {
        NextBlockPeriod {
            start: self.start,
            duration: self.duration,
            standing_charge: self.standing_charge,
        }
    }
}

impl Record for BlockPeriod {
    /// Populated block count
    type Context = usize;

    fn size(blocks: usize) -> usize {
        NextBlockPeriod::SIZE + NextBlockPrices::size(blocks)
    }

    fn parse(reader: &mut TableReader<'_>, blocks: usize) -> C1219Result<Self> {
        let header = NextBlockPeriod::parse(reader, ())?;
        let arrays = NextBlockPrices::parse(reader, blocks)?;
        Ok(Self {
            start: header.start,
            duration: header.duration,
            standing_charge: header.standing_charge,
            prices: arrays.prices,
            event_ids: arrays.event_ids,
        })
    }

    fn write(&self, writer: &mut TableWriter, blocks: usize) -> C1219Result<()> {
        self.header().write(writer, ())?;
        write_block_arrays(writer, &self.prices, &self.event_ids, blocks)
    }
}

/// Per-block prices and event ids of one pending block period
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NextBlockPrices {
    pub prices: Vec<BlockPriceEntry>,
    pub event_ids: Vec<u32>,
}

impl Record for NextBlockPrices {
    type Context = usize;

    fn size(blocks: usize) -> usize {
        blocks * (BlockPriceEntry::SIZE + EVENT_ID_SIZE)
    }

    fn parse(reader: &mut TableReader<'_>, blocks: usize) -> C1219Result<Self> {
        let prices = parse_array(reader, blocks, ())?;
        let mut event_ids = Vec::with_capacity(blocks);
        for _ in 0..blocks {
            event_ids.push(reader.read_u32()?);
        }
        Ok(Self { prices, event_ids })
    }

    fn write(&self, writer: &mut TableWriter, blocks: usize) -> C1219Result<()> {
        write_block_arrays(writer, &self.prices, &self.event_ids, blocks)
    }
}

fn write_block_arrays(
    writer: &mut TableWriter,
    prices: &[BlockPriceEntry],
    event_ids: &[u32],
    blocks: usize,
) -> C1219Result<()> {
    ensure_len(event_ids.len(), blocks, "block event ids")?;
    write_array(writer, prices, blocks, (), "block prices")?;
    for id in event_ids {
        writer.write_u32(*id);
    }
    Ok(())
}
