//! RFLAN neighbor entry (19 bytes)

use super::Record;
use crate::error::C1219Result;
use c1219_core::{MeterTime, TableReader, TableWriter, bitfield};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RfLanNeighbor {
    pub mac_address: u64,
    /// Received signal strength in dBm
    pub rssi: i8,
    pub link_quality: u8,
    pub hop_count: u8,
    /// Raw neighbor flags
    pub flags: u16,
    pub last_heard: MeterTime,
    pub transmit_failures: u16,
}

impl RfLanNeighbor {
    pub const SIZE: usize = 8 + 1 + 1 + 1 + 2 + MeterTime::WIDTH + 2;

    pub const PARENT_MASK: u16 = 0x0001;
    pub const SYNCHRONIZED_MASK: u16 = 0x0002;

    pub fn is_parent(&self) -> bool {
        bitfield::is_set(self.flags, Self::PARENT_MASK)
    }

    pub fn is_synchronized(&self) -> bool {
        bitfield::is_set(self.flags, Self::SYNCHRONIZED_MASK)
    }

    /// An all-zero MAC marks an empty slot
    pub fn is_empty_slot(&self) -> bool {
        self.mac_address == 0
    }
}

impl Record for RfLanNeighbor {
    type Context = ();

    fn size(_: ()) -> usize {
        Self::SIZE
    }

    fn parse(reader: &mut TableReader<'_>, _: ()) -> C1219Result<Self> {
        Ok(Self {
            mac_address: reader.read_u64()?,
            rssi: reader.read_i8()?,
            link_quality: reader.read_u8()?,
            hop_count: reader.read_u8()?,
            flags: reader.read_u16()?,
            last_heard: MeterTime::read(reader)?,
            transmit_failures: reader.read_u16()?,
        })
    }

    fn write(&self, writer: &mut TableWriter, _: ()) -> C1219Result<()> {
        writer.write_u64(self.mac_address);
        writer.write_i8(self.rssi);
        writer.write_u8(self.link_quality);
        writer.write_u8(self.hop_count);
        writer.write_u16(self.flags);
        self.last_heard.write(writer);
        writer.write_u16(self.transmit_failures);
        Ok(())
    }
}
