//! RFLAN neighbor table (2078)

use crate::error::{C1219Error, C1219Result};
use crate::records::{Record, RfLanNeighbor, parse_array};
use crate::table::Table;
use c1219_core::{TableReader, TableWriter};
use serde::{Deserialize, Serialize};

/// Neighbor slots of the RF mesh radio
///
/// The table always carries [`Self::MAX_NEIGHBORS`] slots; only the first
/// `count` of them are meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RfLanNeighborTable {
    slots: Vec<RfLanNeighbor>,
    count: u8,
}

impl RfLanNeighborTable {
    pub const MAX_NEIGHBORS: usize = 32;

    pub fn new(neighbors: Vec<RfLanNeighbor>) -> C1219Result<Self> {
        if neighbors.len() > Self::MAX_NEIGHBORS {
            return Err(C1219Error::ValueOutOfRange {
                what: "RFLAN neighbors",
                value: neighbors.len() as u64,
                max: Self::MAX_NEIGHBORS as u64,
            });
        }
        let count = neighbors.len() as u8;
        let mut slots = neighbors;
        slots.resize(Self::MAX_NEIGHBORS, RfLanNeighbor::default());
        Ok(Self { slots, count })
    }

    /// Populated neighbors
    pub fn neighbors(&self) -> &[RfLanNeighbor] {
        let count = (self.count as usize).min(Self::MAX_NEIGHBORS);
        &self.slots[..count]
    }

    /// The current routing parent, if any
    pub fn parent(&self) -> Option<&RfLanNeighbor> {
        self.neighbors().iter().find(|n| n.is_parent())
    }

    /// Raw count byte; values above the slot count are kept as read
    pub fn count(&self) -> u8 {
        self.count
    }
}

impl Table for RfLanNeighborTable {
    const TABLE_ID: u16 = 2078;
    type Dimensions = ();

    fn required_size(_: &()) -> usize {
        1 + Self::MAX_NEIGHBORS * RfLanNeighbor::SIZE
    }

    fn parse_fields(reader: &mut TableReader<'_>, _: &()) -> C1219Result<Self> {
        let count = reader.read_u8()?;
        let slots = parse_array(reader, Self::MAX_NEIGHBORS, ())?;
        Ok(Self { slots, count })
    }

    fn write_fields(&self, writer: &mut TableWriter, _: &()) -> C1219Result<()> {
        writer.write_u8(self.count);
        for slot in &self.slots {
            slot.write(writer, ())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use c1219_core::{ByteOrder, MeterTime};

    #[test]
    fn test_round_trip() {
        let parent = RfLanNeighbor {
            mac_address: 0x0007_8100_0000_1234,
            rssi: -71,
            link_quality: 200,
            hop_count: 1,
            flags: 0x8003,
            last_heard: MeterTime(800_000_000),
            transmit_failures: 3,
        };
        let table = RfLanNeighborTable::new(vec![parent]).unwrap();
        let bytes = table.to_bytes(ByteOrder::BigEndian, &()).unwrap();
        assert_eq!(bytes.len(), 1 + 32 * 19);
        assert_eq!(bytes[0], 1);

        let parsed = RfLanNeighborTable::parse(&bytes, ByteOrder::BigEndian, &()).unwrap();
        assert_eq!(parsed.neighbors(), &[parent]);
        assert_eq!(parsed.parent().unwrap().rssi, -71);
        assert!(parsed.parent().unwrap().is_synchronized());
    }

    #[test]
    fn test_too_many_neighbors() {
        assert!(RfLanNeighborTable::new(vec![RfLanNeighbor::default(); 33]).is_err());
    }
}
