//! Byte layout of one log entry

use crate::dimension::LogDirection;
use c1219_core::TimeFormat;
use serde::{Deserialize, Serialize};

/// Which optional fields a log entry carries and how long its argument is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryLayout {
    pub direction: LogDirection,
    /// [`TimeFormat::None`] when entries carry no time stamp
    pub time_format: TimeFormat,
    pub event_number: bool,
    pub sequence_number: bool,
    pub argument_length: usize,
}

impl EntryLayout {
    /// user id (2) + event id (2) + HAN event id (4)
    pub const DOWNSTREAM_BASE_SIZE: usize = 8;
    /// downstream base + device MAC (8)
    pub const UPSTREAM_BASE_SIZE: usize = 16;

    pub fn base_size(&self) -> usize {
        match self.direction {
            LogDirection::Upstream => Self::UPSTREAM_BASE_SIZE,
            LogDirection::Downstream => Self::DOWNSTREAM_BASE_SIZE,
        }
    }

    pub fn entry_size(&self) -> usize {
        self.time_format.size()
            + if self.event_number { 2 } else { 0 }
            + if self.sequence_number { 2 } else { 0 }
            + self.base_size()
            + self.argument_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_size() {
        let mut layout = EntryLayout {
            direction: LogDirection::Upstream,
            time_format: TimeFormat::Calendar,
            event_number: true,
            sequence_number: false,
            argument_length: 3,
        };
        assert_eq!(layout.entry_size(), 6 + 2 + 16 + 3);
        layout.direction = LogDirection::Downstream;
        layout.time_format = TimeFormat::None;
        assert_eq!(layout.entry_size(), 2 + 8 + 3);
    }
}
