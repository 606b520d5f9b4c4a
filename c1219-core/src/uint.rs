//! Non-standard width unsigned integers (24-bit and 48-bit)
//!
//! C12.19 tables carry a number of `UINT24` and `UINT48` fields. Both are
//! plain unsigned values occupying 3 and 6 bytes on the wire; the all-bits-set
//! value is the conventional "not used" marker for thresholds and counters.

use crate::error::{C1219Error, C1219Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unsigned 24-bit integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct U24(u32);

impl U24 {
    /// Number of bytes on the wire
    pub const WIDTH: usize = 3;
    /// Largest representable value, also the "not used" sentinel
    pub const MAX: U24 = U24(0x00FF_FFFF);
    pub const ZERO: U24 = U24(0);

    /// Create a checked 24-bit value
    pub fn new(value: u32) -> C1219Result<Self> {
        if value > Self::MAX.0 {
            return Err(C1219Error::ValueOutOfRange {
                what: "UINT24",
                value: value as u64,
                max: Self::MAX.0 as u64,
            });
        }
        Ok(Self(value))
    }

    /// Keep only the low 24 bits
    pub const fn truncate(value: u32) -> Self {
        Self(value & 0x00FF_FFFF)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Whether the value is the all-bits-set "not used" marker
    pub fn is_not_used(self) -> bool {
        self == Self::MAX
    }
}

impl From<u16> for U24 {
    fn from(value: u16) -> Self {
        Self(value as u32)
    }
}

impl From<U24> for u32 {
    fn from(value: U24) -> Self {
        value.0
    }
}

impl TryFrom<u32> for U24 {
    type Error = C1219Error;

    fn try_from(value: u32) -> C1219Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for U24 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Unsigned 48-bit integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct U48(u64);

impl U48 {
    /// Number of bytes on the wire
    pub const WIDTH: usize = 6;
    /// Largest representable value, also the "not used" sentinel
    pub const MAX: U48 = U48(0x0000_FFFF_FFFF_FFFF);
    pub const ZERO: U48 = U48(0);

    /// Create a checked 48-bit value
    pub fn new(value: u64) -> C1219Result<Self> {
        if value > Self::MAX.0 {
            return Err(C1219Error::ValueOutOfRange {
                what: "UINT48",
                value,
                max: Self::MAX.0,
            });
        }
        Ok(Self(value))
    }

    /// Keep only the low 48 bits
    pub const fn truncate(value: u64) -> Self {
        Self(value & 0x0000_FFFF_FFFF_FFFF)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Whether the value is the all-bits-set "not used" marker
    pub fn is_not_used(self) -> bool {
        self == Self::MAX
    }
}

impl From<u32> for U48 {
    fn from(value: u32) -> Self {
        Self(value as u64)
    }
}

impl From<U48> for u64 {
    fn from(value: U48) -> Self {
        value.0
    }
}

impl TryFrom<u64> for U48 {
    type Error = C1219Error;

    fn try_from(value: u64) -> C1219Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for U48 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
