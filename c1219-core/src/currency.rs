//! ISO 4217 currency codes used by publish price data

use serde::{Deserialize, Serialize};

/// Currency carried in the 16-bit currency field of a price entry
///
/// Values outside the known set resolve to [`CurrencyCode::Undefined`]; the
/// record keeps the raw code so it is written back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrencyCode {
    AustralianDollar,
    BrazilianReal,
    CanadianDollar,
    SwissFranc,
    ChineseYuan,
    DanishKrone,
    Euro,
    PoundSterling,
    IndianRupee,
    JapaneseYen,
    MexicanPeso,
    NorwegianKrone,
    NewZealandDollar,
    SwedishKrona,
    UsDollar,
    SouthAfricanRand,
    Undefined,
}

impl CurrencyCode {
    pub fn from_u16(value: u16) -> Self {
        match value {
            36 => Self::AustralianDollar,
            986 => Self::BrazilianReal,
            124 => Self::CanadianDollar,
            756 => Self::SwissFranc,
            156 => Self::ChineseYuan,
            208 => Self::DanishKrone,
            978 => Self::Euro,
            826 => Self::PoundSterling,
            356 => Self::IndianRupee,
            392 => Self::JapaneseYen,
            484 => Self::MexicanPeso,
            578 => Self::NorwegianKrone,
            554 => Self::NewZealandDollar,
            752 => Self::SwedishKrona,
            840 => Self::UsDollar,
            710 => Self::SouthAfricanRand,
            _ => Self::Undefined,
        }
    }

    /// ISO 4217 numeric code, `None` for [`CurrencyCode::Undefined`]
    pub fn to_u16(self) -> Option<u16> {
        Some(match self {
            Self::AustralianDollar => 36,
            Self::BrazilianReal => 986,
            Self::CanadianDollar => 124,
            Self::SwissFranc => 756,
            Self::ChineseYuan => 156,
            Self::DanishKrone => 208,
            Self::Euro => 978,
            Self::PoundSterling => 826,
            Self::IndianRupee => 356,
            Self::JapaneseYen => 392,
            Self::MexicanPeso => 484,
            Self::NorwegianKrone => 578,
            Self::NewZealandDollar => 554,
            Self::SwedishKrona => 752,
            Self::UsDollar => 840,
            Self::SouthAfricanRand => 710,
            Self::Undefined => return None,
        })
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::AustralianDollar => "A$",
            Self::BrazilianReal => "R$",
            Self::CanadianDollar => "C$",
            Self::SwissFranc => "CHF ",
            Self::ChineseYuan => "\u{a5}",
            Self::DanishKrone | Self::NorwegianKrone | Self::SwedishKrona => "kr ",
            Self::Euro => "\u{20ac}",
            Self::PoundSterling => "\u{a3}",
            Self::IndianRupee => "\u{20b9}",
            Self::JapaneseYen => "\u{a5}",
            Self::MexicanPeso => "MX$",
            Self::NewZealandDollar => "NZ$",
            Self::UsDollar => "$",
            Self::SouthAfricanRand => "R",
            Self::Undefined => "",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::AustralianDollar => "Australian Dollar",
            Self::BrazilianReal => "Brazilian Real",
            Self::CanadianDollar => "Canadian Dollar",
            Self::SwissFranc => "Swiss Franc",
            Self::ChineseYuan => "Chinese Yuan",
            Self::DanishKrone => "Danish Krone",
            Self::Euro => "Euro",
            Self::PoundSterling => "Pound Sterling",
            Self::IndianRupee => "Indian Rupee",
            Self::JapaneseYen => "Japanese Yen",
            Self::MexicanPeso => "Mexican Peso",
            Self::NorwegianKrone => "Norwegian Krone",
            Self::NewZealandDollar => "New Zealand Dollar",
            Self::SwedishKrona => "Swedish Krona",
            Self::UsDollar => "US Dollar",
            Self::SouthAfricanRand => "South African Rand",
            Self::Undefined => "Undefined Currency",
        }
    }
}
