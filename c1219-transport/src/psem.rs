//! PSEM table services

use crate::error::{C1219Error, C1219Result};
use async_trait::async_trait;
use bytes::Bytes;
use c1219_core::PsemResponse;

/// Bytes of a read response packet that do not carry table data
///
/// Packet header (6), response code (1), count (2), checksum (1), CRC (2).
pub const RESPONSE_OVERHEAD: usize = 12;

/// Turn a PSEM status byte into a result
pub fn check_response(response: PsemResponse) -> C1219Result<()> {
    if response.is_ok() {
        Ok(())
    } else {
        Err(C1219Error::Response(response))
    }
}

/// Table read/write services of an open PSEM session
///
/// A non-`Ok` status surfaces as [`C1219Error::Response`], a timeout as
/// [`C1219Error::Timeout`]. Implementations do not retry.
#[async_trait]
pub trait PsemTransport: Send {
    /// Negotiated packet size in bytes
    fn packet_size(&self) -> usize;

    /// Largest payload a single offset read can return
    fn max_offset_read_bytes(&self) -> usize {
        self.packet_size().saturating_sub(RESPONSE_OVERHEAD)
    }

    /// Read a whole table
    async fn full_read(&mut self, table_id: u16) -> C1219Result<Bytes>;

    /// Read `len` bytes of a table starting at `offset`
    async fn offset_read(&mut self, table_id: u16, offset: u32, len: usize) -> C1219Result<Bytes>;

    /// Replace a whole table
    async fn full_write(&mut self, table_id: u16, data: &[u8]) -> C1219Result<()>;

    /// Write `data` into a table starting at `offset`
    async fn offset_write(&mut self, table_id: u16, offset: u32, data: &[u8]) -> C1219Result<()>;
}
