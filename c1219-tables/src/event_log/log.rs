//! Upstream (2159) and downstream (2160) HAN event log tables

use super::entry::HanLogEntry;
use super::header::LogHeader;
use crate::dimension::{LogDimensions, LogDirection};
use crate::error::{C1219Error, C1219Result};
use crate::table::Table;
use c1219_core::{TableReader, TableWriter};
use serde::{Deserialize, Serialize};

/// A parsed HAN event log
///
/// `entries` holds the valid entries oldest first, regardless of how the
/// meter orders its slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HanEventLog {
    pub direction: LogDirection,
    pub header: LogHeader,
    pub entries: Vec<HanLogEntry>,
}

impl HanEventLog {
    pub fn new(direction: LogDirection, header: LogHeader, entries: Vec<HanLogEntry>) -> Self {
        Self {
            direction,
            header,
            entries,
        }
    }

    /// Byte offset of a slot inside the log table
    pub fn slot_offset(dimensions: &LogDimensions, slot: u16) -> usize {
        LogHeader::SIZE + slot as usize * dimensions.layout.entry_size()
    }

    /// Entries the meter has not yet marked as read, oldest first
    pub fn unread(&self) -> &[HanLogEntry] {
        let unread = (self.header.unread_entries as usize).min(self.entries.len());
        &self.entries[self.entries.len() - unread..]
    }

    pub fn newest(&self) -> Option<&HanLogEntry> {
        self.entries.last()
    }
}

impl Table for HanEventLog {
    /// Upstream number; the downstream log reports 2160 through [`Table::table_id`]
    const TABLE_ID: u16 = 2159;
    type Dimensions = LogDimensions;

    fn table_id(dimensions: &LogDimensions) -> u16 {
        dimensions.direction().table_id()
    }

    fn required_size(dimensions: &LogDimensions) -> usize {
        Self::slot_offset(dimensions, dimensions.max_entries)
    }

    fn parse_fields(reader: &mut TableReader<'_>, dimensions: &LogDimensions) -> C1219Result<Self> {
        let header = LogHeader::parse(reader)?;
        let entry_size = dimensions.layout.entry_size();
        let slots = reader.read_slice(dimensions.max_entries as usize * entry_size)?;

        let order = header.chronological_slots(header.valid_entries, dimensions.max_entries);
        let mut entries = Vec::with_capacity(order.len());
        for slot in order {
            let start = slot as usize * entry_size;
            let mut entry_reader =
                TableReader::with_order(&slots[start..start + entry_size], reader.byte_order());
            entries.push(HanLogEntry::parse(&mut entry_reader, &dimensions.layout)?);
        }
        Ok(Self::new(dimensions.direction(), header, entries))
    }

    fn write_fields(&self, writer: &mut TableWriter, dimensions: &LogDimensions) -> C1219Result<()> {
        let count = u16::try_from(self.entries.len()).unwrap_or(u16::MAX);
        let order = self
            .header
            .chronological_slots(count, dimensions.max_entries);
        if order.len() != self.entries.len() {
            return Err(C1219Error::InvalidData(format!(
                "{} entries do not fit a log of {} valid entries in {} slots",
                self.entries.len(),
                self.header.valid_entries,
                dimensions.max_entries
            )));
        }

        let mut by_slot: Vec<Option<&HanLogEntry>> = vec![None; dimensions.max_entries as usize];
        for (slot, entry) in order.into_iter().zip(&self.entries) {
            by_slot[slot as usize] = Some(entry);
        }

        self.header.write(writer);
        let entry_size = dimensions.layout.entry_size();
        for slot in by_slot {
            match slot {
                Some(entry) => entry.write(writer, &dimensions.layout)?,
                None => writer.write_zeros(entry_size),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_log::kinds::downstream;
    use crate::event_log::{EntryLayout, EventArgument};
    use c1219_core::{ByteOrder, TimeFormat};

    fn dims(max_entries: u16) -> LogDimensions {
        LogDimensions {
            layout: EntryLayout {
                direction: LogDirection::Downstream,
                time_format: TimeFormat::None,
                event_number: false,
                sequence_number: true,
                argument_length: 4,
            },
            max_entries,
        }
    }

    fn entry(sequence: u16, message_id: u32) -> HanLogEntry {
        let mut entry = HanLogEntry::create(LogDirection::Downstream, downstream::MESSAGE_CANCELLED);
        entry.sequence_number = Some(sequence);
        entry.argument_data = message_id.to_be_bytes().to_vec();
        entry.decode_argument(ByteOrder::BigEndian);
        entry
    }

    #[test]
    fn test_size() {
        // 11 header + 4 x (2 + 8 + 4)
        assert_eq!(HanEventLog::required_size(&dims(4)), 11 + 4 * 14);
        assert_eq!(HanEventLog::required_size(&dims(0)), 11);
        assert_eq!(HanEventLog::table_id(&dims(4)), 2160);
    }

    #[test]
    fn test_circular_round_trip() {
        let header = LogHeader {
            list_status: LogHeader::CIRCULAR_FLAG | LogHeader::OVERFLOW_FLAG,
            valid_entries: 4,
            last_entry_index: 1,
            last_sequence_number: 13,
            unread_entries: 2,
        };
        let log = HanEventLog::new(
            LogDirection::Downstream,
            header,
            (10..14).map(|seq| entry(seq, seq as u32 * 100)).collect(),
        );

        let bytes = log.to_bytes(ByteOrder::BigEndian, &dims(4)).unwrap();
        // Newest entry sits in slot 1, oldest in slot 2
        let slot1 = HanEventLog::slot_offset(&dims(4), 1);
        assert_eq!(&bytes[slot1..slot1 + 2], &[0x00, 13]);
        let slot2 = HanEventLog::slot_offset(&dims(4), 2);
        assert_eq!(&bytes[slot2..slot2 + 2], &[0x00, 10]);

        let parsed = HanEventLog::parse(&bytes, ByteOrder::BigEndian, &dims(4)).unwrap();
        assert_eq!(parsed, log);
        assert_eq!(parsed.unread().len(), 2);
        assert_eq!(parsed.unread()[0].sequence_number, Some(12));
        assert_eq!(
            parsed.newest().unwrap().argument(),
            &EventArgument::MessageCancelled { message_id: 1300 }
        );
    }

    #[test]
    fn test_empty_slots_are_zero_filled() {
        let header = LogHeader {
            valid_entries: 1,
            ..Default::default()
        };
        let log = HanEventLog::new(LogDirection::Downstream, header, vec![entry(1, 7)]);
        let bytes = log.to_bytes(ByteOrder::BigEndian, &dims(3)).unwrap();
        let slot1 = HanEventLog::slot_offset(&dims(3), 1);
        assert!(bytes[slot1..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_too_many_entries() {
        let header = LogHeader {
            valid_entries: 1,
            ..Default::default()
        };
        let log = HanEventLog::new(
            LogDirection::Downstream,
            header,
            vec![entry(1, 1), entry(2, 2)],
        );
        assert!(log.to_bytes(ByteOrder::BigEndian, &dims(3)).is_err());
    }
}
