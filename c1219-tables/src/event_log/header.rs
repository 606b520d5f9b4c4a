//! Log list header (11 bytes)

use crate::error::C1219Result;
use c1219_core::{TableReader, TableWriter, bitfield};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LogHeader {
    /// Raw list status flags
    pub list_status: u8,
    pub valid_entries: u16,
    /// Slot index of the newest entry
    pub last_entry_index: u16,
    pub last_sequence_number: u32,
    pub unread_entries: u16,
}

impl LogHeader {
    pub const SIZE: usize = 1 + 2 + 2 + 4 + 2;

    /// Entries are stored newest first
    pub const DESCENDING_FLAG: u8 = 0x01;
    pub const OVERFLOW_FLAG: u8 = 0x02;
    /// Slots are reused once the list is full
    pub const CIRCULAR_FLAG: u8 = 0x04;
    pub const INHIBIT_OVERFLOW_FLAG: u8 = 0x08;

    pub fn descending(&self) -> bool {
        bitfield::is_set(self.list_status, Self::DESCENDING_FLAG)
    }

    pub fn overflowed(&self) -> bool {
        bitfield::is_set(self.list_status, Self::OVERFLOW_FLAG)
    }

    pub fn circular(&self) -> bool {
        bitfield::is_set(self.list_status, Self::CIRCULAR_FLAG)
    }

    pub fn inhibit_overflow(&self) -> bool {
        bitfield::is_set(self.list_status, Self::INHIBIT_OVERFLOW_FLAG)
    }

    /// Slot indices of the newest `count` entries, oldest first
    ///
    /// `count` is clamped to the valid entries and the slot capacity.
    pub fn chronological_slots(&self, count: u16, max_entries: u16) -> Vec<u16> {
        if max_entries == 0 {
            return Vec::new();
        }
        let max = max_entries as u32;
        let count = count.min(self.valid_entries).min(max_entries) as u32;
        let last = self.last_entry_index as u32 % max;
        (0..count)
            .map(|i| {
                let age = count - 1 - i;
                let slot = if self.descending() {
                    last + age
                } else {
                    last + max - age
                };
                (slot % max) as u16
            })
            .collect()
    }

    pub fn parse(reader: &mut TableReader<'_>) -> C1219Result<Self> {
        Ok(Self {
            list_status: reader.read_u8()?,
            valid_entries: reader.read_u16()?,
            last_entry_index: reader.read_u16()?,
            last_sequence_number: reader.read_u32()?,
            unread_entries: reader.read_u16()?,
        })
    }

    pub fn write(&self, writer: &mut TableWriter) {
        writer.write_u8(self.list_status);
        writer.write_u16(self.valid_entries);
        writer.write_u16(self.last_entry_index);
        writer.write_u32(self.last_sequence_number);
        writer.write_u16(self.unread_entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(status: u8, valid: u16, last: u16) -> LogHeader {
        LogHeader {
            list_status: status,
            valid_entries: valid,
            last_entry_index: last,
            ..Default::default()
        }
    }

    #[test]
    fn test_fifo_slots() {
        let h = header(0, 3, 2);
        assert_eq!(h.chronological_slots(3, 8), vec![0, 1, 2]);
        assert_eq!(h.chronological_slots(2, 8), vec![1, 2]);
        assert_eq!(h.chronological_slots(10, 8), vec![0, 1, 2]);
    }

    #[test]
    fn test_circular_wrap() {
        let h = header(LogHeader::CIRCULAR_FLAG | LogHeader::OVERFLOW_FLAG, 8, 1);
        assert_eq!(h.chronological_slots(4, 8), vec![6, 7, 0, 1]);
        assert!(h.circular());
        assert!(h.overflowed());
    }

    #[test]
    fn test_descending() {
        let h = header(LogHeader::DESCENDING_FLAG, 5, 6);
        assert_eq!(h.chronological_slots(3, 8), vec![0, 7, 6]);
    }

    #[test]
    fn test_empty_log() {
        assert!(header(0, 0, 0).chronological_slots(5, 8).is_empty());
        assert!(header(0, 5, 0).chronological_slots(5, 0).is_empty());
    }
}
