//! Unit of measure byte from publish price data

use serde::{Deserialize, Serialize};

/// Commodity unit for prices and block thresholds
///
/// The high bit selects the BCD-formatted variant of the same unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitOfMeasure {
    KilowattHours,
    CubicMeters,
    CubicFeet,
    HundredCubicFeet,
    UsGallons,
    ImperialGallons,
    Btu,
    Liters,
    KilopascalGauge,
    KilopascalAbsolute,
    Unknown,
}

impl UnitOfMeasure {
    const BCD_FLAG: u8 = 0x80;

    /// Decode the unit, ignoring the BCD flag
    pub fn from_u8(value: u8) -> Self {
        match value & !Self::BCD_FLAG {
            0 => Self::KilowattHours,
            1 => Self::CubicMeters,
            2 => Self::CubicFeet,
            3 => Self::HundredCubicFeet,
            4 => Self::UsGallons,
            5 => Self::ImperialGallons,
            6 => Self::Btu,
            7 => Self::Liters,
            8 => Self::KilopascalGauge,
            9 => Self::KilopascalAbsolute,
            _ => Self::Unknown,
        }
    }

    pub fn is_bcd(value: u8) -> bool {
        value & Self::BCD_FLAG != 0
    }

    pub fn units(self) -> &'static str {
        match self {
            Self::KilowattHours => "kWh",
            Self::CubicMeters => "m\u{b3}",
            Self::CubicFeet => "ft\u{b3}",
            Self::HundredCubicFeet => "ccf",
            Self::UsGallons => "US gal",
            Self::ImperialGallons => "Imp gal",
            Self::Btu => "BTU",
            Self::Liters => "l",
            Self::KilopascalGauge => "kPa(g)",
            Self::KilopascalAbsolute => "kPa(a)",
            Self::Unknown => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_lookup() {
        assert_eq!(UnitOfMeasure::from_u8(0), UnitOfMeasure::KilowattHours);
        assert_eq!(UnitOfMeasure::from_u8(0x81), UnitOfMeasure::CubicMeters);
        assert!(UnitOfMeasure::is_bcd(0x81));
        assert_eq!(UnitOfMeasure::from_u8(0x42), UnitOfMeasure::Unknown);
    }
}
