//! Table data order (C12.19 Table 0 `DATA_ORDER`)

use serde::{Deserialize, Serialize};

/// Byte order used for multi-byte integers inside table data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ByteOrder {
    /// Most significant byte first
    #[default]
    BigEndian,
    /// Least significant byte first
    LittleEndian,
}

impl ByteOrder {
    /// Decode the `DATA_ORDER` bit of the Table 0 format control byte
    pub fn from_data_order_flag(flag: bool) -> Self {
        if flag {
            Self::BigEndian
        } else {
            Self::LittleEndian
        }
    }
}
