//! HAN log entry
//!
//! Field order:
//!
//! ```text
//! [time] [event number u16] [sequence number u16]
//! user id u16, event id u16, HAN event id u32, [MAC u64, upstream only],
//! argument (layout.argument_length bytes)
//! ```

use super::argument::{EventArgument, decode_argument};
use super::kinds::{HanEventKind, describe};
use super::layout::EntryLayout;
use crate::dimension::LogDirection;
use crate::error::{C1219Error, C1219Result};
use c1219_core::{ByteOrder, TableReader, TableWriter, TimeFormat, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HanLogEntry {
    pub direction: LogDirection,
    pub timestamp: Option<Timestamp>,
    pub event_number: Option<u16>,
    pub sequence_number: Option<u16>,
    pub user_id: u16,
    pub event_id: u16,
    pub han_event_id: u32,
    /// Device MAC, upstream entries only
    pub mac_address: Option<u64>,
    #[serde(with = "serde_bytes")]
    pub argument_data: Vec<u8>,
    kind: HanEventKind,
    argument: EventArgument,
    decode_error: Option<String>,
}

impl HanLogEntry {
    /// Empty entry for `event_id`, with its kind resolved through the dispatch table
    pub fn create(direction: LogDirection, event_id: u16) -> Self {
        Self {
            direction,
            timestamp: None,
            event_number: None,
            sequence_number: None,
            user_id: 0,
            event_id,
            han_event_id: 0,
            mac_address: None,
            argument_data: Vec::new(),
            kind: HanEventKind::for_event(direction, event_id),
            argument: EventArgument::Raw,
            decode_error: None,
        }
    }

    pub fn kind(&self) -> HanEventKind {
        self.kind
    }

    pub fn argument(&self) -> &EventArgument {
        &self.argument
    }

    /// Why the typed argument could not be decoded, if it could not
    pub fn decode_error(&self) -> Option<&str> {
        self.decode_error.as_deref()
    }

    pub fn description(&self) -> String {
        describe(self.direction, self.event_id)
    }

    /// Decode `argument_data` according to the entry kind
    ///
    /// A failure is recorded on the entry and the argument stays
    /// [`EventArgument::Raw`]; it never propagates.
    pub fn decode_argument(&mut self, order: ByteOrder) {
        match decode_argument(self.kind, &self.argument_data, order) {
            Ok(argument) => {
                self.argument = argument;
                self.decode_error = None;
            }
            Err(e) => {
                log::warn!(
                    "{:?} event {} (HAN event {}): argument not decoded: {}",
                    self.direction,
                    self.event_id,
                    self.han_event_id,
                    e
                );
                self.argument = EventArgument::Raw;
                self.decode_error = Some(e.to_string());
            }
        }
    }

    /// Parse one entry and decode its argument
    pub fn parse(reader: &mut TableReader<'_>, layout: &EntryLayout) -> C1219Result<Self> {
        let timestamp = Timestamp::read(reader, layout.time_format)?;
        let event_number = read_optional_u16(reader, layout.event_number)?;
        let sequence_number = read_optional_u16(reader, layout.sequence_number)?;
        let user_id = reader.read_u16()?;
        let event_id = reader.read_u16()?;
        let han_event_id = reader.read_u32()?;
        let mac_address = match layout.direction {
            LogDirection::Upstream => Some(reader.read_u64()?),
            LogDirection::Downstream => None,
        };
        let argument_data = reader.read_bytes(layout.argument_length)?;

        let mut entry = Self::create(layout.direction, event_id);
        entry.timestamp = timestamp;
        entry.event_number = event_number;
        entry.sequence_number = sequence_number;
        entry.user_id = user_id;
        entry.han_event_id = han_event_id;
        entry.mac_address = mac_address;
        entry.argument_data = argument_data;
        entry.decode_argument(reader.byte_order());
        Ok(entry)
    }

    /// Write the entry; optional fields must match the layout
    pub fn write(&self, writer: &mut TableWriter, layout: &EntryLayout) -> C1219Result<()> {
        match (&self.timestamp, layout.time_format) {
            (None, TimeFormat::None) => {}
            (Some(stamp), format) if stamp.format() == format => stamp.write(writer),
            _ => return Err(mismatch("time stamp")),
        }
        write_optional_u16(writer, self.event_number, layout.event_number, "event number")?;
        write_optional_u16(
            writer,
            self.sequence_number,
            layout.sequence_number,
            "sequence number",
        )?;
        writer.write_u16(self.user_id);
        writer.write_u16(self.event_id);
        writer.write_u32(self.han_event_id);
        match (layout.direction, self.mac_address) {
            (LogDirection::Upstream, Some(mac)) => writer.write_u64(mac),
            (LogDirection::Downstream, None) => {}
            _ => return Err(mismatch("MAC address")),
        }
        if self.argument_data.len() != layout.argument_length {
            return Err(mismatch("argument length"));
        }
        writer.write_bytes(&self.argument_data);
        Ok(())
    }
}

fn read_optional_u16(reader: &mut TableReader<'_>, present: bool) -> C1219Result<Option<u16>> {
    if present {
        Ok(Some(reader.read_u16()?))
    } else {
        Ok(None)
    }
}

fn write_optional_u16(
    writer: &mut TableWriter,
    value: Option<u16>,
    present: bool,
    what: &str,
) -> C1219Result<()> {
    match (value, present) {
        (Some(v), true) => {
            writer.write_u16(v);
            Ok(())
        }
        (None, false) => Ok(()),
        _ => Err(mismatch(what)),
    }
}

fn mismatch(what: &str) -> C1219Error {
    C1219Error::InvalidData(format!("log entry {} does not match the log layout", what))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_log::argument::{FailureReason, NetworkState};
    use crate::event_log::kinds::upstream;
    use c1219_core::MeterTime;

    fn upstream_layout(argument_length: usize) -> EntryLayout {
        EntryLayout {
            direction: LogDirection::Upstream,
            time_format: TimeFormat::Seconds2000,
            event_number: false,
            sequence_number: true,
            argument_length,
        }
    }

    #[test]
    fn test_create_generic() {
        let entry = HanLogEntry::create(LogDirection::Upstream, 0x7777);
        assert_eq!(entry.kind(), HanEventKind::Generic);
        assert_eq!(entry.event_id, 0x7777);
        assert_eq!(entry.description(), "Unknown Event 30583");
        assert_eq!(entry.argument(), &EventArgument::Raw);
    }

    #[test]
    fn test_parse_specialized() {
        let layout = upstream_layout(4);
        let bytes = [
            0x00, 0x00, 0x00, 0x3C, // time
            0x00, 0x09, // sequence number
            0x00, 0x02, // user id
            0x00, 0x01, // event id
            0x00, 0x00, 0x10, 0x00, // HAN event id
            0x00, 0x0D, 0x6F, 0x00, 0x00, 0x11, 0x22, 0x33, // MAC
            0x01, 0x04, 0x00, 0xFF, // argument
        ];
        assert_eq!(bytes.len(), layout.entry_size());

        let mut reader = TableReader::new(&bytes);
        let entry = HanLogEntry::parse(&mut reader, &layout).unwrap();
        assert!(reader.is_empty());
        assert_eq!(entry.timestamp, Some(Timestamp::Seconds(MeterTime(60))));
        assert_eq!(entry.event_number, None);
        assert_eq!(entry.sequence_number, Some(9));
        assert_eq!(entry.event_id, upstream::NETWORK_STATE_TRANSITION);
        assert_eq!(entry.han_event_id, 0x1000);
        assert_eq!(entry.mac_address, Some(0x000D_6F00_0011_2233));
        assert_eq!(entry.description(), "Network State Transition");
        assert_eq!(
            entry.argument(),
            &EventArgument::NetworkStateTransition {
                from: NetworkState::Joining,
                to: NetworkState::Registered,
                reason: FailureReason::None,
            }
        );

        let mut writer = TableWriter::new();
        entry.write(&mut writer, &layout).unwrap();
        assert_eq!(writer.as_slice(), &bytes);
    }

    #[test]
    fn test_malformed_argument_is_not_fatal() {
        // Price acknowledgement needs 12 argument bytes, the log only has 4
        let layout = upstream_layout(4);
        let mut entry = HanLogEntry::create(LogDirection::Upstream, upstream::PRICE_ACKNOWLEDGEMENT);
        entry.timestamp = Some(Timestamp::Seconds(MeterTime(1)));
        entry.sequence_number = Some(1);
        entry.mac_address = Some(1);
        entry.argument_data = vec![1, 2, 3, 4];

        let mut writer = TableWriter::new();
        entry.write(&mut writer, &layout).unwrap();
        let bytes = writer.into_bytes();

        let parsed = HanLogEntry::parse(&mut TableReader::new(&bytes), &layout).unwrap();
        assert_eq!(parsed.kind(), HanEventKind::PriceAcknowledgement);
        assert_eq!(parsed.argument(), &EventArgument::Raw);
        assert!(parsed.decode_error().is_some());
        assert_eq!(parsed.argument_data, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_write_checks_layout() {
        let layout = upstream_layout(0);
        // Missing MAC and time stamp
        let entry = HanLogEntry::create(LogDirection::Upstream, 2);
        assert!(entry.write(&mut TableWriter::new(), &layout).is_err());
    }
}
