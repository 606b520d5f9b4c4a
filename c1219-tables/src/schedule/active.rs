//! Active RIB schedule table (2440)
//!
//! Field order:
//!
//! 1. configuration register (2)
//! 2. schedule id (30)
//! 3. current time (4)
//! 4. block period consumption (6)
//! 5. billing period consumption (6)
//! 6. active block period (11 + blocks x 14)
//! 7. active billing period (7)
//! 8. publish price data (8 + blocks x 13)
//! 9. multiplier, divisor (3 + 3)
//! 10. billing periods (billing periods x 7)
//! 11. block periods (block periods x (11 + blocks x 14))

use super::SCHEDULE_ID_SIZE;
use crate::context::DimensionSnapshot;
use crate::error::C1219Result;
use crate::records::{
    BillingPeriod, BlockPeriod, BlockPriceEntry, PublishPriceData, Record, RibConfig,
    parse_array, write_array,
};
use crate::table::Table;
use c1219_core::{MeterTime, TableReader, TableWriter, U24, U48};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActiveRibSchedule {
    pub config: RibConfig,
    pub schedule_id: String,
    pub current_time: MeterTime,
    pub block_period_consumption: U48,
    pub billing_period_consumption: U48,
    pub active_block_period: BlockPeriod,
    pub active_billing_period: BillingPeriod,
    pub publish_price: PublishPriceData,
    pub multiplier: U24,
    pub divisor: U24,
    pub billing_periods: Vec<BillingPeriod>,
    pub block_periods: Vec<BlockPeriod>,
}

impl ActiveRibSchedule {
    /// Bytes before the active block period
    pub const HEADER_SIZE: usize =
        RibConfig::SIZE + SCHEDULE_ID_SIZE + MeterTime::WIDTH + 2 * U48::WIDTH;

    /// Render a block price with the published trailing digits and currency
    pub fn format_block_price(&self, entry: &BlockPriceEntry) -> String {
        entry.format_price(
            self.publish_price.trailing_digits(),
            self.publish_price.currency(),
        )
    }

    /// Render a block threshold scaled by the table multiplier and divisor
    pub fn format_block_threshold(&self, entry: &BlockPriceEntry) -> String {
        entry.format_threshold(
            self.multiplier.get(),
            self.divisor.get(),
            self.publish_price.unit().units(),
        )
    }
}

impl Table for ActiveRibSchedule {
    const TABLE_ID: u16 = 2440;
    type Dimensions = DimensionSnapshot;

    fn required_size(dimensions: &DimensionSnapshot) -> usize {
        let counts = dimensions.active;
        let blocks = counts.block_count();
        Self::HEADER_SIZE
            + BlockPeriod::size(blocks)
            + BillingPeriod::SIZE
            + PublishPriceData::size(blocks)
            + 2 * U24::WIDTH
            + counts.billing_period_count() * BillingPeriod::SIZE
            + counts.block_period_count() * BlockPeriod::size(blocks)
    }

    fn parse_fields(
        reader: &mut TableReader<'_>,
        dimensions: &DimensionSnapshot,
    ) -> C1219Result<Self> {
        let counts = dimensions.active;
        let blocks = counts.block_count();
        Ok(Self {
            config: RibConfig::parse(reader, ())?,
            schedule_id: reader.read_string(SCHEDULE_ID_SIZE)?,
            current_time: MeterTime::read(reader)?,
            block_period_consumption: reader.read_u48()?,
            billing_period_consumption: reader.read_u48()?,
            active_block_period: BlockPeriod::parse(reader, blocks)?,
            active_billing_period: BillingPeriod::parse(reader, ())?,
            publish_price: PublishPriceData::parse(reader, blocks)?,
            multiplier: reader.read_u24()?,
            divisor: reader.read_u24()?,
            billing_periods: parse_array(reader, counts.billing_period_count(), ())?,
            block_periods: parse_array(reader, counts.block_period_count(), blocks)?,
        })
    }

    fn write_fields(
        &self,
        writer: &mut TableWriter,
        dimensions: &DimensionSnapshot,
    ) -> C1219Result<()> {
        let counts = dimensions.active;
        let blocks = counts.block_count();
        self.config.write(writer, ())?;
        writer.write_string(&self.schedule_id, SCHEDULE_ID_SIZE)?;
        self.current_time.write(writer);
        writer.write_u48(self.block_period_consumption);
        writer.write_u48(self.billing_period_consumption);
        self.active_block_period.write(writer, blocks)?;
        self.active_billing_period.write(writer, ())?;
        self.publish_price.write(writer, blocks)?;
        writer.write_u24(self.multiplier);
        writer.write_u24(self.divisor);
        write_array(
            writer,
            &self.billing_periods,
            counts.billing_period_count(),
            (),
            "billing periods",
        )?;
        write_array(
            writer,
            &self.block_periods,
            counts.block_period_count(),
            blocks,
            "block periods",
        )
    }
}
