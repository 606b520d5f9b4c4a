//! PSEM response codes (ANSI C12.18 / C12.21)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status byte returned by the meter for every PSEM request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PsemResponse {
    /// Acknowledge, no problems
    Ok,
    /// Error, request rejected
    Err,
    /// Service not supported
    Sns,
    /// Insufficient security clearance
    Isc,
    /// Operation not possible
    Onp,
    /// Inappropriate action requested
    Iar,
    /// Device busy
    Bsy,
    /// Data not ready
    Dnr,
    /// Data locked
    Dlk,
    /// Renegotiate request
    Rno,
    /// Invalid service sequence state
    Isss,
    /// Any code not defined by the standard
    Unknown(u8),
}

impl PsemResponse {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0x00 => Self::Ok,
            0x01 => Self::Err,
            0x02 => Self::Sns,
            0x03 => Self::Isc,
            0x04 => Self::Onp,
            0x05 => Self::Iar,
            0x06 => Self::Bsy,
            0x07 => Self::Dnr,
            0x08 => Self::Dlk,
            0x09 => Self::Rno,
            0x0A => Self::Isss,
            other => Self::Unknown(other),
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            Self::Ok => 0x00,
            Self::Err => 0x01,
            Self::Sns => 0x02,
            Self::Isc => 0x03,
            Self::Onp => 0x04,
            Self::Iar => 0x05,
            Self::Bsy => 0x06,
            Self::Dnr => 0x07,
            Self::Dlk => 0x08,
            Self::Rno => 0x09,
            Self::Isss => 0x0A,
            Self::Unknown(code) => code,
        }
    }

    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

impl fmt::Display for PsemResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Ok => "OK",
            Self::Err => "ERR",
            Self::Sns => "SNS (service not supported)",
            Self::Isc => "ISC (insufficient security clearance)",
            Self::Onp => "ONP (operation not possible)",
            Self::Iar => "IAR (inappropriate action requested)",
            Self::Bsy => "BSY (device busy)",
            Self::Dnr => "DNR (data not ready)",
            Self::Dlk => "DLK (data locked)",
            Self::Rno => "RNO (renegotiate request)",
            Self::Isss => "ISSS (invalid service sequence state)",
            Self::Unknown(code) => return write!(f, "Unknown response 0x{:02X}", code),
        };
        f.write_str(text)
    }
}
