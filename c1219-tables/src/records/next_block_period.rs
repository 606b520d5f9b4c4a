//! Header of a pending block period (11 bytes)

use super::Record;
use crate::error::C1219Result;
use c1219_core::{MeterTime, TableReader, TableWriter, U24};
use serde::{Deserialize, Serialize};

/// Start, duration and standing charge of a block period
///
/// The pending schedule keeps these apart from the per-block arrays, which
/// live in [`NextBlockPrices`](super::NextBlockPrices).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NextBlockPeriod {
    pub start: MeterTime,
    /// Length in minutes
    pub duration: U24,
    pub standing_charge: u32,
}

impl NextBlockPeriod {
    pub const SIZE: usize = MeterTime::WIDTH + U24::WIDTH + 4;
}

impl Record for NextBlockPeriod {
    type Context = ();

    fn size(_: ()) -> usize {
        Self::SIZE
    }

    fn parse(reader: &mut TableReader<'_>, _: ()) -> C1219Result<Self> {
        Ok(Self {
            start: MeterTime::read(reader)?,
            duration: reader.read_u24()?,
            standing_charge: reader.read_u32()?,
        })
    }

    fn write(&self, writer: &mut TableWriter, _: ()) -> C1219Result<()> {
        self.start.write(writer);
        writer.write_u24(self.duration);
        writer.write_u32(self.standing_charge);
        Ok(())
    }
}
