//! Meter key table (2048)
//!
//! The feature register is 64 bits wide. Most masks live in the low 32 bits,
//! but [`MeterKeyTable::VARH_REC_MASK`] is above them, so the register is never
//! narrowed to `u32`.

use crate::error::C1219Result;
use crate::table::Table;
use c1219_core::{TableReader, TableWriter, bitfield};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MeterKeyTable {
    pub revision: u8,
    /// Raw feature register
    pub feature_bits: u64,
    /// Raw option register
    pub option_bits: u32,
}

impl MeterKeyTable {
    pub const SIZE: usize = 1 + 8 + 4;

    pub const DEMAND_MASK: u64 = 0x0000_0001;
    pub const TOU_MASK: u64 = 0x0000_0002;
    pub const LOAD_PROFILE_MASK: u64 = 0x0000_0004;
    pub const POWER_QUALITY_MASK: u64 = 0x0000_0008;
    pub const HAN_MASK: u64 = 0x0000_0010;
    pub const RFLAN_MASK: u64 = 0x0000_0020;
    pub const DISCONNECT_MASK: u64 = 0x0000_0040;
    pub const VARH_REC_MASK: u64 = 0x0000_0001_0000_0000;

    pub fn has_feature(&self, mask: u64) -> bool {
        bitfield::is_set(self.feature_bits, mask)
    }

    pub fn set_feature(&mut self, mask: u64, enabled: bool) {
        self.feature_bits = bitfield::assign(self.feature_bits, mask, enabled);
    }

    pub fn demand(&self) -> bool {
        self.has_feature(Self::DEMAND_MASK)
    }

    pub fn time_of_use(&self) -> bool {
        self.has_feature(Self::TOU_MASK)
    }

    pub fn load_profile(&self) -> bool {
        self.has_feature(Self::LOAD_PROFILE_MASK)
    }

    pub fn power_quality(&self) -> bool {
        self.has_feature(Self::POWER_QUALITY_MASK)
    }

    pub fn han(&self) -> bool {
        self.has_feature(Self::HAN_MASK)
    }

    pub fn rflan(&self) -> bool {
        self.has_feature(Self::RFLAN_MASK)
    }

    pub fn disconnect(&self) -> bool {
        self.has_feature(Self::DISCONNECT_MASK)
    }

    pub fn varh_recording(&self) -> bool {
        self.has_feature(Self::VARH_REC_MASK)
    }
}

impl Table for MeterKeyTable {
    const TABLE_ID: u16 = 2048;
    type Dimensions = ();

    fn required_size(_: &()) -> usize {
        Self::SIZE
    }

    fn parse_fields(reader: &mut TableReader<'_>, _: &()) -> C1219Result<Self> {
        Ok(Self {
            revision: reader.read_u8()?,
            feature_bits: reader.read_u64()?,
            option_bits: reader.read_u32()?,
        })
    }

    fn write_fields(&self, writer: &mut TableWriter, _: &()) -> C1219Result<()> {
        writer.write_u8(self.revision);
        writer.write_u64(self.feature_bits);
        writer.write_u32(self.option_bits);
        Ok(())
    }
}
