//! Record types nested inside RIB and RFLAN tables
//!
//! Every record pairs a `parse` with a `write` that emits the same fields in
//! the same order, and a `size` that both of them agree with.

pub mod billing_period;
pub mod block_period;
pub mod block_price;
pub mod next_block_period;
pub mod publish_price;
pub mod rflan_neighbor;
pub mod rib_config;

#[cfg(test)]
mod proptests;

pub use billing_period::BillingPeriod;
pub use block_period::{BlockPeriod, NextBlockPrices};
pub use block_price::BlockPriceEntry;
pub use next_block_period::NextBlockPeriod;
pub use publish_price::{PublishPriceData, RateLabel};
pub use rflan_neighbor::RfLanNeighbor;
pub use rib_config::RibConfig;

use crate::error::{C1219Error, C1219Result};
use c1219_core::{TableReader, TableWriter};

/// A record with a parse/write pair driven by a context value
///
/// `Context` is `()` for fixed-shape records and the populated block count
/// for records carrying per-block arrays.
pub trait Record: Sized {
    type Context: Copy;

    /// Bytes occupied on the wire for the given context
    fn size(context: Self::Context) -> usize;

    fn parse(reader: &mut TableReader<'_>, context: Self::Context) -> C1219Result<Self>;

    fn write(&self, writer: &mut TableWriter, context: Self::Context) -> C1219Result<()>;
}

/// Parse `count` consecutive records
pub fn parse_array<R: Record>(
    reader: &mut TableReader<'_>,
    count: usize,
    context: R::Context,
) -> C1219Result<Vec<R>> {
    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        items.push(R::parse(reader, context)?);
    }
    Ok(items)
}

/// Write `items`, which must hold exactly `count` records
pub fn write_array<R: Record>(
    writer: &mut TableWriter,
    items: &[R],
    count: usize,
    context: R::Context,
    what: &str,
) -> C1219Result<()> {
    ensure_len(items.len(), count, what)?;
    for item in items {
        item.write(writer, context)?;
    }
    Ok(())
}

pub(crate) fn ensure_len(actual: usize, expected: usize, what: &str) -> C1219Result<()> {
    if actual != expected {
        return Err(C1219Error::InvalidData(format!(
            "{} holds {} entries, dimension requires {}",
            what, actual, expected
        )));
    }
    Ok(())
}
