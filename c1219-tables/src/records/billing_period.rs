//! Billing period record (start + duration, 7 bytes)

use super::Record;
use crate::error::C1219Result;
use c1219_core::{MeterTime, TableReader, TableWriter, U24};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BillingPeriod {
    /// Start of the period
    pub start: MeterTime,
    /// Length of the period in minutes
    pub duration: U24,
}

impl BillingPeriod {
    pub const SIZE: usize = MeterTime::WIDTH + U24::WIDTH;

    /// End of the period, saturating at the last representable second
    pub fn end(&self) -> MeterTime {
        MeterTime(
            self.start
                .seconds()
                .saturating_add(self.duration.get().saturating_mul(60)),
        )
    }
}

impl Record for BillingPeriod {
    type Context = ();

    fn size(_: ()) -> usize {
        Self::SIZE
    }

    fn parse(reader: &mut TableReader<'_>, _: ()) -> C1219Result<Self> {
        Ok(Self {
            start: MeterTime::read(reader)?,
            duration: reader.read_u24()?,
        })
    }

    fn write(&self, writer: &mut TableWriter, _: ()) -> C1219Result<()> {
        self.start.write(writer);
        writer.write_u24(self.duration);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billing_period_layout() {
        let bytes = [0x00, 0x00, 0x0E, 0x10, 0x00, 0x05, 0xA0];
        let mut reader = TableReader::new(&bytes);
        let period = BillingPeriod::parse(&mut reader, ()).unwrap();
        assert_eq!(period.start, MeterTime(3600));
        assert_eq!(period.duration.get(), 1440);
        assert_eq!(period.end(), MeterTime(3600 + 1440 * 60));
        assert!(reader.is_empty());

        let mut writer = TableWriter::new();
        period.write(&mut writer, ()).unwrap();
        assert_eq!(writer.as_slice(), &bytes);
    }
}
