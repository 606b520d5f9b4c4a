//! Block price entry (price `u32` + threshold `UINT48`)

use super::Record;
use crate::error::C1219Result;
use c1219_core::{CurrencyCode, TableReader, TableWriter, U48, format_price, format_threshold};
use serde::{Deserialize, Serialize};

/// Price of one consumption block and the threshold that ends it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockPriceEntry {
    /// Price with implied decimal point, `u32::MAX` when unused
    pub price: u32,
    /// Upper consumption bound of the block, `U48::MAX` when unused
    pub threshold: U48,
}

impl BlockPriceEntry {
    pub const SIZE: usize = 4 + U48::WIDTH;

    pub fn not_used() -> Self {
        Self {
            price: u32::MAX,
            threshold: U48::MAX,
        }
    }

    pub fn price_is_used(&self) -> bool {
        self.price != u32::MAX
    }

    pub fn threshold_is_used(&self) -> bool {
        !self.threshold.is_not_used()
    }

    pub fn format_price(&self, trailing_digits: u8, currency: CurrencyCode) -> String {
        format_price(self.price, trailing_digits, currency)
    }

    pub fn format_threshold(&self, multiplier: u32, divisor: u32, units: &str) -> String {
        format_threshold(self.threshold, multiplier, divisor, units)
    }
}

impl Record for BlockPriceEntry {
    type Context = ();

    fn size(_: ()) -> usize {
        Self::SIZE
    }

    fn parse(reader: &mut TableReader<'_>, _: ()) -> C1219Result<Self> {
        Ok(Self {
            price: reader.read_u32()?,
            threshold: reader.read_u48()?,
        })
    }

    fn write(&self, writer: &mut TableWriter, _: ()) -> C1219Result<()> {
        writer.write_u32(self.price);
        writer.write_u48(self.threshold);
        Ok(())
    }
}
