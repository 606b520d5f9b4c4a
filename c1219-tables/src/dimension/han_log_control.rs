//! HAN log control table (2158)
//!
//! Sizes the upstream and downstream HAN event logs and selects which
//! optional fields every entry carries.

use crate::error::C1219Result;
use crate::event_log::EntryLayout;
use crate::table::Table;
use c1219_core::{TableReader, TableWriter, TimeFormat, bitfield};
use serde::{Deserialize, Serialize};

/// Which HAN log a control value applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogDirection {
    /// Events received from HAN devices, entries carry the device MAC
    Upstream,
    /// Events sent by the meter to HAN devices
    Downstream,
}

impl LogDirection {
    pub fn table_id(self) -> u16 {
        match self {
            Self::Upstream => 2159,
            Self::Downstream => 2160,
        }
    }
}

/// Entry shape and capacity of one log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogDimensions {
    pub layout: EntryLayout,
    pub max_entries: u16,
}

impl LogDimensions {
    pub fn direction(&self) -> LogDirection {
        self.layout.direction
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HanLogControl {
    /// Raw log flags
    pub log_flags: u8,
    /// Raw time format selector
    pub time_format: u8,
    pub upstream_entries: u16,
    pub upstream_argument_length: u8,
    pub downstream_entries: u16,
    pub downstream_argument_length: u8,
}

impl HanLogControl {
    pub const SIZE: usize = 8;

    pub const EVENT_NUMBER_FLAG: u8 = 0x01;
    pub const DATE_TIME_FLAG: u8 = 0x02;
    pub const SEQUENCE_NUMBER_FLAG: u8 = 0x04;
    pub const INHIBIT_OVERFLOW_FLAG: u8 = 0x08;

    pub fn event_number_logged(&self) -> bool {
        bitfield::is_set(self.log_flags, Self::EVENT_NUMBER_FLAG)
    }

    pub fn date_time_logged(&self) -> bool {
        bitfield::is_set(self.log_flags, Self::DATE_TIME_FLAG)
    }

    pub fn sequence_number_logged(&self) -> bool {
        bitfield::is_set(self.log_flags, Self::SEQUENCE_NUMBER_FLAG)
    }

    pub fn inhibit_overflow(&self) -> bool {
        bitfield::is_set(self.log_flags, Self::INHIBIT_OVERFLOW_FLAG)
    }

    /// Time stamp format of log entries, [`TimeFormat::None`] when time is not logged
    pub fn entry_time_format(&self) -> C1219Result<TimeFormat> {
        if !self.date_time_logged() {
            return Ok(TimeFormat::None);
        }
        TimeFormat::from_u8(self.time_format)
    }

    pub fn layout(&self, direction: LogDirection) -> C1219Result<EntryLayout> {
        let argument_length = match direction {
            LogDirection::Upstream => self.upstream_argument_length,
            LogDirection::Downstream => self.downstream_argument_length,
        };
        Ok(EntryLayout {
            direction,
            time_format: self.entry_time_format()?,
            event_number: self.event_number_logged(),
            sequence_number: self.sequence_number_logged(),
            argument_length: argument_length as usize,
        })
    }

    pub fn dimensions(&self, direction: LogDirection) -> C1219Result<LogDimensions> {
        let max_entries = match direction {
            LogDirection::Upstream => self.upstream_entries,
            LogDirection::Downstream => self.downstream_entries,
        };
        Ok(LogDimensions {
            layout: self.layout(direction)?,
            max_entries,
        })
    }
}

impl Table for HanLogControl {
    const TABLE_ID: u16 = 2158;
    type Dimensions = ();

    fn required_size(_: &()) -> usize {
        Self::SIZE
    }

    fn parse_fields(reader: &mut TableReader<'_>, _: &()) -> C1219Result<Self> {
        Ok(Self {
            log_flags: reader.read_u8()?,
            time_format: reader.read_u8()?,
            upstream_entries: reader.read_u16()?,
            upstream_argument_length: reader.read_u8()?,
            downstream_entries: reader.read_u16()?,
            downstream_argument_length: reader.read_u8()?,
        })
    }

    fn write_fields(&self, writer: &mut TableWriter, _: &()) -> C1219Result<()> {
        writer.write_u8(self.log_flags);
        writer.write_u8(self.time_format);
        writer.write_u16(self.upstream_entries);
        writer.write_u8(self.upstream_argument_length);
        writer.write_u16(self.downstream_entries);
        writer.write_u8(self.downstream_argument_length);
        Ok(())
    }
}
