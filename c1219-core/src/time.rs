//! Meter time representations
//!
//! Table times are either a 32-bit count of seconds since 2000-01-01 00:00:00 UTC
//! or a 6-byte calendar form (`LTIME_DATE`). Which one a log uses is given by the
//! time format byte of its control table.

use crate::codec::{TableReader, TableWriter};
use crate::error::{C1219Error, C1219Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Seconds between the Unix epoch and 2000-01-01 00:00:00 UTC
pub const EPOCH_2000_UNIX_OFFSET: i64 = 946_684_800;

/// Seconds since 2000-01-01 00:00:00 UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeterTime(pub u32);

impl MeterTime {
    pub const WIDTH: usize = 4;

    pub fn from_seconds(seconds: u32) -> Self {
        Self(seconds)
    }

    pub fn seconds(self) -> u32 {
        self.0
    }

    pub fn to_unix(self) -> i64 {
        self.0 as i64 + EPOCH_2000_UNIX_OFFSET
    }

    /// Convert a Unix timestamp; times before 2000 or past 2136 are rejected
    pub fn from_unix(unix: i64) -> C1219Result<Self> {
        let since = unix - EPOCH_2000_UNIX_OFFSET;
        u32::try_from(since)
            .map(Self)
            .map_err(|_| C1219Error::InvalidData(format!("unix time {} outside meter epoch", unix)))
    }

    pub fn read(reader: &mut TableReader<'_>) -> C1219Result<Self> {
        Ok(Self(reader.read_u32()?))
    }

    pub fn write(self, writer: &mut TableWriter) {
        writer.write_u32(self.0);
    }

    /// UTC date and time; every `u32` value lies between 2000 and 2136
    pub fn to_datetime(self) -> NaiveDateTime {
        DateTime::<Utc>::UNIX_EPOCH.naive_utc() + TimeDelta::seconds(self.to_unix())
    }

    pub fn from_datetime(datetime: NaiveDateTime) -> C1219Result<Self> {
        Self::from_unix(datetime.and_utc().timestamp())
    }

    pub fn to_calendar(self) -> LTimeDate {
        let datetime = self.to_datetime();
        LTimeDate {
            year: (datetime.year() - 2000) as u8,
            month: datetime.month() as u8,
            day: datetime.day() as u8,
            hour: datetime.hour() as u8,
            minute: datetime.minute() as u8,
            second: datetime.second() as u8,
        }
    }
}

impl fmt::Display for MeterTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_calendar(), f)
    }
}

/// Calendar time stamp, year counted from 2000
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LTimeDate {
    pub year: u8,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl LTimeDate {
    pub const WIDTH: usize = 6;

    pub fn read(reader: &mut TableReader<'_>) -> C1219Result<Self> {
        Ok(Self {
            year: reader.read_u8()?,
            month: reader.read_u8()?,
            day: reader.read_u8()?,
            hour: reader.read_u8()?,
            minute: reader.read_u8()?,
            second: reader.read_u8()?,
        })
    }

    pub fn write(&self, writer: &mut TableWriter) {
        writer.write_u8(self.year);
        writer.write_u8(self.month);
        writer.write_u8(self.day);
        writer.write_u8(self.hour);
        writer.write_u8(self.minute);
        writer.write_u8(self.second);
    }

    /// Calendar date and time, `None` for impossible dates such as Feb 30
    pub fn to_datetime(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(2000 + self.year as i32, self.month as u32, self.day as u32)?
            .and_hms_opt(self.hour as u32, self.minute as u32, self.second as u32)
    }

    /// Convert to seconds since 2000, rejecting impossible dates and times
    pub fn to_meter_time(&self) -> C1219Result<MeterTime> {
        let datetime = self
            .to_datetime()
            .ok_or_else(|| C1219Error::InvalidData(format!("invalid calendar time {}", self)))?;
        MeterTime::from_datetime(datetime)
            .map_err(|_| C1219Error::InvalidData(format!("calendar time {} out of range", self)))
    }
}

impl fmt::Display for LTimeDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            2000 + self.year as u32,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second
        )
    }
}

/// Time stamp encoding selected by a log control table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    /// No clock; time stamps are not recorded
    None,
    /// [`MeterTime`], 4 bytes
    #[default]
    Seconds2000,
    /// [`LTimeDate`], 6 bytes
    Calendar,
}

impl TimeFormat {
    pub fn from_u8(value: u8) -> C1219Result<Self> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Seconds2000),
            2 => Ok(Self::Calendar),
            other => Err(C1219Error::InvalidData(format!(
                "unknown time format {}",
                other
            ))),
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Seconds2000 => 1,
            Self::Calendar => 2,
        }
    }

    /// Bytes occupied by one time stamp
    pub fn size(self) -> usize {
        match self {
            Self::None => 0,
            Self::Seconds2000 => MeterTime::WIDTH,
            Self::Calendar => LTimeDate::WIDTH,
        }
    }
}

/// A log time stamp in whichever format the log was configured with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timestamp {
    Seconds(MeterTime),
    Calendar(LTimeDate),
}

impl Timestamp {
    /// Read a time stamp; `None` when the format records no time
    pub fn read(reader: &mut TableReader<'_>, format: TimeFormat) -> C1219Result<Option<Self>> {
        Ok(match format {
            TimeFormat::None => None,
            TimeFormat::Seconds2000 => Some(Self::Seconds(MeterTime::read(reader)?)),
            TimeFormat::Calendar => Some(Self::Calendar(LTimeDate::read(reader)?)),
        })
    }

    pub fn write(&self, writer: &mut TableWriter) {
        match self {
            Self::Seconds(time) => time.write(writer),
            Self::Calendar(date) => date.write(writer),
        }
    }

    pub fn format(&self) -> TimeFormat {
        match self {
            Self::Seconds(_) => TimeFormat::Seconds2000,
            Self::Calendar(_) => TimeFormat::Calendar,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds(time) => fmt::Display::fmt(time, f),
            Self::Calendar(date) => fmt::Display::fmt(date, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        assert_eq!(MeterTime(0).to_unix(), 946_684_800);
        assert_eq!(MeterTime(0).to_string(), "2000-01-01 00:00:00");
        assert_eq!(MeterTime::from_unix(946_684_800 + 61).unwrap(), MeterTime(61));
        assert!(MeterTime::from_unix(0).is_err());
    }

    #[test]
    fn test_calendar_conversion() {
        // 2024-02-29 12:34:56
        let date = LTimeDate {
            year: 24,
            month: 2,
            day: 29,
            hour: 12,
            minute: 34,
            second: 56,
        };
        let time = date.to_meter_time().unwrap();
        assert_eq!(time.to_unix(), 1_709_210_096);
        assert_eq!(time.to_calendar(), date);
    }

    #[test]
    fn test_invalid_calendar() {
        let date = LTimeDate {
            month: 13,
            day: 1,
            ..Default::default()
        };
        assert!(date.to_meter_time().is_err());
    }

    #[test]
    fn test_impossible_days_rejected() {
        for (year, month, day) in [(26, 2, 30), (26, 4, 31), (23, 2, 29), (26, 6, 0)] {
            let date = LTimeDate {
                year,
                month,
                day,
                ..Default::default()
            };
            assert!(
                matches!(date.to_meter_time(), Err(C1219Error::InvalidData(_))),
                "{} accepted",
                date
            );
        }
        let leap = LTimeDate {
            year: 24,
            month: 2,
            day: 29,
            ..Default::default()
        };
        assert!(leap.to_meter_time().is_ok());
    }

    #[test]
    fn test_range_ends() {
        assert_eq!(MeterTime(u32::MAX).to_string(), "2136-02-07 06:28:15");
        let late = LTimeDate {
            year: 255,
            month: 1,
            day: 1,
            ..Default::default()
        };
        assert!(late.to_meter_time().is_err());
    }

    #[test]
    fn test_timestamp_sizes() {
        assert_eq!(TimeFormat::None.size(), 0);
        assert_eq!(TimeFormat::Seconds2000.size(), 4);
        assert_eq!(TimeFormat::Calendar.size(), 6);
        assert!(TimeFormat::from_u8(9).is_err());
    }

    #[test]
    fn test_timestamp_read() {
        let bytes = [24, 2, 29, 12, 34, 56];
        let mut reader = TableReader::new(&bytes);
        let stamp = Timestamp::read(&mut reader, TimeFormat::Calendar)
            .unwrap()
            .unwrap();
        assert_eq!(stamp.format(), TimeFormat::Calendar);
        assert_eq!(stamp.to_string(), "2024-02-29 12:34:56");
        assert!(reader.is_empty());
    }
}
