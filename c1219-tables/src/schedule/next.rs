//! Next (pending) RIB schedule table (2441)
//!
//! Sized by the *next* counts of the limits table. Block period headers and
//! their per-block arrays are stored as two parallel lists:
//!
//! 1. configuration register (2)
//! 2. schedule id (30)
//! 3. publish price data (8 + blocks x 13)
//! 4. multiplier, divisor (3 + 3)
//! 5. billing periods (billing periods x 7)
//! 6. block period headers (block periods x 11)
//! 7. block prices (block periods x blocks x 14)

use super::SCHEDULE_ID_SIZE;
use crate::context::DimensionSnapshot;
use crate::error::C1219Result;
use crate::records::{
    BillingPeriod, BlockPeriod, NextBlockPeriod, NextBlockPrices, PublishPriceData, Record,
    RibConfig, parse_array, write_array,
};
use crate::table::Table;
use c1219_core::{TableReader, TableWriter, U24};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NextRibSchedule {
    pub config: RibConfig,
    pub schedule_id: String,
    pub publish_price: PublishPriceData,
    pub multiplier: U24,
    pub divisor: U24,
    pub billing_periods: Vec<BillingPeriod>,
    pub block_periods: Vec<NextBlockPeriod>,
    pub block_prices: Vec<NextBlockPrices>,
}

impl NextRibSchedule {
    pub const HEADER_SIZE: usize = RibConfig::SIZE + SCHEDULE_ID_SIZE;

    /// Join a block period header with its per-block arrays
    pub fn block_period(&self, index: usize) -> Option<BlockPeriod> {
        let header = self.block_periods.get(index)?;
        let arrays = self.block_prices.get(index)?;
        Some(BlockPeriod {
            start: header.start,
            duration: header.duration,
            standing_charge: header.standing_charge,
            prices: arrays.prices.clone(),
            event_ids: arrays.event_ids.clone(),
        })
    }

    /// Split a full block period into the two parallel lists
    pub fn push_block_period(&mut self, period: BlockPeriod) {
        self.block_periods.push(period.header());
        self.block_prices.push(NextBlockPrices {
            prices: period.prices,
            event_ids: period.event_ids,
        });
    }
}

impl Table for NextRibSchedule {
    const TABLE_ID: u16 = 2441;
    type Dimensions = DimensionSnapshot;

    fn required_size(dimensions: &DimensionSnapshot) -> usize {
        let counts = dimensions.next;
        let blocks = counts.block_count();
        let block_periods = counts.block_period_count();
        Self::HEADER_SIZE
            + PublishPriceData::size(blocks)
            + 2 * U24::WIDTH
            + counts.billing_period_count() * BillingPeriod::SIZE
            + block_periods * NextBlockPeriod::SIZE
            + block_periods * NextBlockPrices::size(blocks)
    }

    fn parse_fields(
        reader: &mut TableReader<'_>,
        dimensions: &DimensionSnapshot,
    ) -> C1219Result<Self> {
        let counts = dimensions.next;
        let blocks = counts.block_count();
        let block_periods = counts.block_period_count();
        Ok(Self {
            config: RibConfig::parse(reader, ())?,
            schedule_id: reader.read_string(SCHEDULE_ID_SIZE)?,
            publish_price: PublishPriceData::parse(reader, blocks)?,
            multiplier: reader.read_u24()?,
            divisor: reader.read_u24()?,
            billing_periods: parse_array(reader, counts.billing_period_count(), ())?,
            block_periods: parse_array(reader, block_periods, ())?,
            block_prices: parse_array(reader, block_periods, blocks)?,
        })
    }

    fn write_fields(
        &self,
        writer: &mut TableWriter,
        dimensions: &DimensionSnapshot,
    ) -> C1219Result<()> {
        let counts = dimensions.next;
        let blocks = counts.block_count();
        let block_periods = counts.block_period_count();
        self.config.write(writer, ())?;
        writer.write_string(&self.schedule_id, SCHEDULE_ID_SIZE)?;
        self.publish_price.write(writer, blocks)?;
        writer.write_u24(self.multiplier);
        writer.write_u24(self.divisor);
        write_array(
            writer,
            &self.billing_periods,
            counts.billing_period_count(),
            (),
            "next billing periods",
        )?;
        write_array(
            writer,
            &self.block_periods,
            block_periods,
            (),
            "next block periods",
        )?;
        write_array(
            writer,
            &self.block_prices,
            block_periods,
            blocks,
            "next block prices",
        )
    }
}
