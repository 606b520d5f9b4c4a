//! RIB configuration flag register

use super::Record;
use crate::error::C1219Result;
use c1219_core::{TableReader, TableWriter, bitfield};
use serde::{Deserialize, Serialize};

/// 16-bit configuration register of a RIB schedule
///
/// Only bit 0 is defined; the whole register is stored so reserved bits are
/// written back exactly as read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RibConfig(pub u16);

impl RibConfig {
    pub const SIZE: usize = 2;
    pub const BLOCK_PRICING_ENABLED: u16 = 0x0001;

    pub fn raw(self) -> u16 {
        self.0
    }

    pub fn block_pricing_enabled(self) -> bool {
        bitfield::is_set(self.0, Self::BLOCK_PRICING_ENABLED)
    }

    pub fn set_block_pricing_enabled(&mut self, enabled: bool) {
        self.0 = bitfield::assign(self.0, Self::BLOCK_PRICING_ENABLED, enabled);
    }
}

impl Record for RibConfig {
    type Context = ();

    fn size(_: ()) -> usize {
        Self::SIZE
    }

    fn parse(reader: &mut TableReader<'_>, _: ()) -> C1219Result<Self> {
        Ok(Self(reader.read_u16()?))
    }

    fn write(&self, writer: &mut TableWriter, _: ()) -> C1219Result<()> {
        writer.write_u16(self.0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_bits_preserved() {
        let mut config = RibConfig(0xA5A4);
        assert!(!config.block_pricing_enabled());
        config.set_block_pricing_enabled(true);
        assert_eq!(config.raw(), 0xA5A5);
        config.set_block_pricing_enabled(false);
        assert_eq!(config.raw(), 0xA5A4);
    }
}
