//! Session configuration

use c1219_core::ByteOrder;
use serde::{Deserialize, Serialize};

/// Table session configuration
///
/// # Default Settings
/// - Byte order: big-endian
/// - Packet size: whatever the transport negotiated
/// - Length verification: on
/// - Dimension refresh before dependent reads: on
/// - Full reads: one full read request per table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Byte order of multi-byte table fields (the meter's DATA_ORDER)
    pub byte_order: ByteOrder,
    /// Packet size used to size chunked reads, capped at the transport's
    pub max_packet_size: Option<usize>,
    /// Reject full reads whose length differs from the computed table size
    pub verify_lengths: bool,
    /// Re-read the dimension table before every dependent table read
    pub refresh_dimensions: bool,
    /// Fetch tables larger than one packet with chunked offset reads
    /// instead of a single full read
    pub chunk_full_reads: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::BigEndian,
            max_packet_size: None,
            verify_lengths: true,
            refresh_dimensions: true,
            chunk_full_reads: false,
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    pub fn with_max_packet_size(mut self, packet_size: usize) -> Self {
        self.max_packet_size = Some(packet_size);
        self
    }

    /// When off, a full read longer than the table is truncated instead of rejected
    pub fn with_verify_lengths(mut self, verify: bool) -> Self {
        self.verify_lengths = verify;
        self
    }

    /// When off, dependent reads reuse the cached dimension table if one is loaded
    pub fn with_refresh_dimensions(mut self, refresh: bool) -> Self {
        self.refresh_dimensions = refresh;
        self
    }

    pub fn with_chunk_full_reads(mut self, chunk: bool) -> Self {
        self.chunk_full_reads = chunk;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.byte_order, ByteOrder::BigEndian);
        assert!(config.verify_lengths);
        assert!(config.refresh_dimensions);
        assert_eq!(config.max_packet_size, None);
        assert!(!config.chunk_full_reads);
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::new()
            .with_byte_order(ByteOrder::LittleEndian)
            .with_max_packet_size(128)
            .with_verify_lengths(false)
            .with_refresh_dimensions(false)
            .with_chunk_full_reads(true);
        assert!(config.chunk_full_reads);
        assert_eq!(config.byte_order, ByteOrder::LittleEndian);
        assert_eq!(config.max_packet_size, Some(128));
        assert!(!config.verify_lengths);
        assert!(!config.refresh_dimensions);
    }
}
