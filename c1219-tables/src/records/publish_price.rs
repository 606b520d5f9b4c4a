//! Publish price data entry
//!
//! Fixed part (8 bytes): provider id `u32`, currency `u16`, price control
//! byte (flags in the low nibble, trailing digits in the high nibble), unit of
//! measure `u8`. Then one rate label per populated block.

use super::{Record, ensure_len};
use crate::error::{C1219Error, C1219Result};
use c1219_core::codec::ascii;
use c1219_core::{CurrencyCode, TableReader, TableWriter, UnitOfMeasure, bitfield};
use serde::{Deserialize, Serialize};

/// Rate label text followed by its 1-byte declared length
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateLabel(String);

impl RateLabel {
    /// Width of the character field
    pub const FIELD_WIDTH: usize = 12;
    /// Length prefix plus character field
    pub const SIZE: usize = 1 + Self::FIELD_WIDTH;

    pub fn new(label: &str) -> C1219Result<Self> {
        if !label.is_ascii() || label.len() > Self::FIELD_WIDTH {
            return Err(C1219Error::InvalidData(format!(
                "rate label {:?} is not ASCII of at most {} characters",
                label,
                Self::FIELD_WIDTH
            )));
        }
        Ok(Self(label.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Record for RateLabel {
    type Context = ();

    fn size(_: ()) -> usize {
        Self::SIZE
    }

    fn parse(reader: &mut TableReader<'_>, _: ()) -> C1219Result<Self> {
        let declared = reader.read_u8()? as usize;
        let field = reader.read_slice(Self::FIELD_WIDTH)?;
        let len = declared.min(Self::FIELD_WIDTH);
        Ok(Self(field[..len].iter().map(|&b| b as char).collect()))
    }

    fn write(&self, writer: &mut TableWriter, _: ()) -> C1219Result<()> {
        let len = self.0.len().min(Self::FIELD_WIDTH);
        writer.write_u8(len as u8);
        writer.write_bytes(&ascii::encode_fixed(&self.0, Self::FIELD_WIDTH)?);
        Ok(())
    }
}

/// Price publication parameters for one schedule
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PublishPriceData {
    pub provider_id: u32,
    /// Raw ISO 4217 code, kept so unknown codes are written back unchanged
    pub currency_code: u16,
    /// Raw price control byte
    pub price_control: u8,
    /// Raw unit of measure byte
    pub unit_of_measure: u8,
    pub rate_labels: Vec<RateLabel>,
}

impl PublishPriceData {
    /// Bytes before the rate labels
    pub const FIXED_SIZE: usize = 4 + 2 + 1 + 1;

    pub const ACK_REQUIRED_MASK: u8 = 0x01;
    const FLAGS_MASK: u8 = 0x0F;

    pub fn currency(&self) -> CurrencyCode {
        CurrencyCode::from_u16(self.currency_code)
    }

    pub fn unit(&self) -> UnitOfMeasure {
        UnitOfMeasure::from_u8(self.unit_of_measure)
    }

    /// Digits to the right of the implied decimal point (0-15)
    pub fn trailing_digits(&self) -> u8 {
        self.price_control >> 4
    }

    pub fn set_trailing_digits(&mut self, digits: u8) -> C1219Result<()> {
        if digits > 0x0F {
            return Err(C1219Error::ValueOutOfRange {
                what: "trailing digits",
                value: digits as u64,
                max: 0x0F,
            });
        }
        self.price_control = (digits << 4) | (self.price_control & Self::FLAGS_MASK);
        Ok(())
    }

    /// Price control flags in the low nibble
    pub fn control_flags(&self) -> u8 {
        self.price_control & Self::FLAGS_MASK
    }

    pub fn acknowledgement_required(&self) -> bool {
        bitfield::is_set(self.price_control, Self::ACK_REQUIRED_MASK)
    }

    pub fn set_acknowledgement_required(&mut self, required: bool) {
        self.price_control = bitfield::assign(self.price_control, Self::ACK_REQUIRED_MASK, required);
    }
}

impl Record for PublishPriceData {
    /// Populated block count, one rate label per block
    type Context = usize;

    fn size(blocks: usize) -> usize {
        Self::FIXED_SIZE + blocks * RateLabel::SIZE
    }

    fn parse(reader: &mut TableReader<'_>, blocks: usize) -> C1219Result<Self> {
        let provider_id = reader.read_u32()?;
        let currency_code = reader.read_u16()?;
        let price_control = reader.read_u8()?;
        let unit_of_measure = reader.read_u8()?;
        let rate_labels = super::parse_array(reader, blocks, ())?;
        Ok(Self {
            provider_id,
            currency_code,
            price_control,
            unit_of_measure,
            rate_labels,
        })
    }

    fn write(&self, writer: &mut TableWriter, blocks: usize) -> C1219Result<()> {
        ensure_len(self.rate_labels.len(), blocks, "rate labels")?;
        writer.write_u32(self.provider_id);
        writer.write_u16(self.currency_code);
        writer.write_u8(self.price_control);
        writer.write_u8(self.unit_of_measure);
        for label in &self.rate_labels {
            label.write(writer, ())?;
        }
        Ok(())
    }
}
