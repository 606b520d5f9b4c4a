//! In-memory meter image
//!
//! Serves table images from a map, honoring offsets and the packet size the
//! way a meter would. Every request is recorded so callers can check the
//! order of reads and writes, and failures can be injected per table.

use crate::error::{C1219Error, C1219Result};
use crate::psem::{PsemTransport, check_response};
use async_trait::async_trait;
use bytes::Bytes;
use c1219_core::PsemResponse;
use std::collections::{HashMap, HashSet};

/// Memory transport settings
#[derive(Debug, Clone)]
pub struct MemorySettings {
    pub packet_size: usize,
}

impl MemorySettings {
    /// C12.18 default packet size before negotiation
    pub const DEFAULT_PACKET_SIZE: usize = 64;

    pub fn with_packet_size(packet_size: usize) -> Self {
        Self { packet_size }
    }
}

impl Default for MemorySettings {
    fn default() -> Self {
        Self::with_packet_size(Self::DEFAULT_PACKET_SIZE)
    }
}

/// A request as received by the memory transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PsemRequest {
    FullRead { table_id: u16 },
    OffsetRead { table_id: u16, offset: u32, len: usize },
    FullWrite { table_id: u16, len: usize },
    OffsetWrite { table_id: u16, offset: u32, len: usize },
}

impl PsemRequest {
    pub fn table_id(&self) -> u16 {
        match self {
            Self::FullRead { table_id }
            | Self::OffsetRead { table_id, .. }
            | Self::FullWrite { table_id, .. }
            | Self::OffsetWrite { table_id, .. } => *table_id,
        }
    }
}

/// Failure answered for every request touching a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectedFailure {
    Response(PsemResponse),
    Timeout,
}

#[derive(Debug, Default)]
pub struct MemoryTransport {
    settings: MemorySettings,
    tables: HashMap<u16, Vec<u8>>,
    read_only: HashSet<u16>,
    failures: HashMap<u16, InjectedFailure>,
    requests: Vec<PsemRequest>,
}

impl MemoryTransport {
    pub fn new(settings: MemorySettings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    pub fn insert_table(&mut self, table_id: u16, image: impl Into<Vec<u8>>) {
        self.tables.insert(table_id, image.into());
    }

    pub fn table(&self, table_id: u16) -> Option<&[u8]> {
        self.tables.get(&table_id).map(Vec::as_slice)
    }

    /// Reject writes to `table_id` with insufficient security clearance
    pub fn set_read_only(&mut self, table_id: u16) {
        self.read_only.insert(table_id);
    }

    pub fn inject_failure(&mut self, table_id: u16, failure: InjectedFailure) {
        self.failures.insert(table_id, failure);
    }

    pub fn clear_failure(&mut self, table_id: u16) {
        self.failures.remove(&table_id);
    }

    /// Every request received, oldest first
    pub fn requests(&self) -> &[PsemRequest] {
        &self.requests
    }

    pub fn clear_requests(&mut self) {
        self.requests.clear();
    }

    fn begin(&mut self, request: PsemRequest) -> C1219Result<()> {
        let table_id = request.table_id();
        self.requests.push(request);
        match self.failures.get(&table_id) {
            Some(InjectedFailure::Response(response)) => check_response(*response),
            Some(InjectedFailure::Timeout) => Err(C1219Error::Timeout),
            None => Ok(()),
        }
    }

    fn image(&self, table_id: u16) -> C1219Result<&Vec<u8>> {
        self.tables
            .get(&table_id)
            .ok_or(C1219Error::Response(PsemResponse::Onp))
    }

    fn check_writable(&self, table_id: u16) -> C1219Result<()> {
        if self.read_only.contains(&table_id) {
            return Err(C1219Error::Response(PsemResponse::Isc));
        }
        Ok(())
    }
}

/// `offset..offset + len` inside a table of `size` bytes
fn range(offset: u32, len: usize, size: usize) -> C1219Result<std::ops::Range<usize>> {
    let start = offset as usize;
    match start.checked_add(len) {
        Some(end) if end <= size => Ok(start..end),
        _ => Err(C1219Error::Response(PsemResponse::Onp)),
    }
}

#[async_trait]
impl PsemTransport for MemoryTransport {
    fn packet_size(&self) -> usize {
        self.settings.packet_size
    }

    async fn full_read(&mut self, table_id: u16) -> C1219Result<Bytes> {
        self.begin(PsemRequest::FullRead { table_id })?;
        Ok(Bytes::copy_from_slice(self.image(table_id)?))
    }

    async fn offset_read(&mut self, table_id: u16, offset: u32, len: usize) -> C1219Result<Bytes> {
        self.begin(PsemRequest::OffsetRead {
            table_id,
            offset,
            len,
        })?;
        if len > self.max_offset_read_bytes() {
            return Err(C1219Error::Response(PsemResponse::Onp));
        }
        let image = self.image(table_id)?;
        let range = range(offset, len, image.len())?;
        Ok(Bytes::copy_from_slice(&image[range]))
    }

    async fn full_write(&mut self, table_id: u16, data: &[u8]) -> C1219Result<()> {
        self.begin(PsemRequest::FullWrite {
            table_id,
            len: data.len(),
        })?;
        self.check_writable(table_id)?;
        self.tables.insert(table_id, data.to_vec());
        Ok(())
    }

    async fn offset_write(&mut self, table_id: u16, offset: u32, data: &[u8]) -> C1219Result<()> {
        self.begin(PsemRequest::OffsetWrite {
            table_id,
            offset,
            len: data.len(),
        })?;
        self.check_writable(table_id)?;
        let image = self
            .tables
            .get_mut(&table_id)
            .ok_or(C1219Error::Response(PsemResponse::Onp))?;
        let range = range(offset, data.len(), image.len())?;
        image[range].copy_from_slice(data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport() -> MemoryTransport {
        let mut transport = MemoryTransport::default();
        transport.insert_table(1, vec![1, 2, 3, 4, 5]);
        transport
    }

    #[tokio::test]
    async fn test_full_and_offset_read() {
        let mut t = transport();
        assert_eq!(t.max_offset_read_bytes(), 52);
        assert_eq!(t.full_read(1).await.unwrap().as_ref(), &[1, 2, 3, 4, 5]);
        assert_eq!(t.offset_read(1, 3, 2).await.unwrap().as_ref(), &[4, 5]);
        assert!(matches!(
            t.offset_read(1, 4, 2).await,
            Err(C1219Error::Response(PsemResponse::Onp))
        ));
        assert!(matches!(
            t.full_read(2).await,
            Err(C1219Error::Response(PsemResponse::Onp))
        ));
        assert_eq!(t.requests().len(), 4);
    }

    #[tokio::test]
    async fn test_offset_read_larger_than_packet() {
        let mut t = MemoryTransport::new(MemorySettings::with_packet_size(14));
        t.insert_table(1, vec![0; 10]);
        assert!(t.offset_read(1, 0, 2).await.is_ok());
        assert!(t.offset_read(1, 0, 3).await.is_err());
    }

    #[tokio::test]
    async fn test_writes() {
        let mut t = transport();
        t.offset_write(1, 1, &[9, 9]).await.unwrap();
        assert_eq!(t.table(1).unwrap(), &[1, 9, 9, 4, 5]);
        assert!(t.offset_write(1, 4, &[0, 0]).await.is_err());
        t.full_write(2, &[7]).await.unwrap();
        assert_eq!(t.table(2).unwrap(), &[7]);

        t.set_read_only(1);
        assert!(matches!(
            t.offset_write(1, 0, &[0]).await,
            Err(C1219Error::Response(PsemResponse::Isc))
        ));
        assert_eq!(t.table(1).unwrap(), &[1, 9, 9, 4, 5]);
    }

    #[tokio::test]
    async fn test_injected_failures() {
        let mut t = transport();
        t.inject_failure(1, InjectedFailure::Response(PsemResponse::Bsy));
        assert!(matches!(
            t.full_read(1).await,
            Err(C1219Error::Response(PsemResponse::Bsy))
        ));
        t.inject_failure(1, InjectedFailure::Timeout);
        assert!(matches!(t.offset_read(1, 0, 1).await, Err(C1219Error::Timeout)));
        t.clear_failure(1);
        assert!(t.full_read(1).await.is_ok());
        // Failed requests are still recorded
        assert_eq!(t.requests().len(), 3);
    }
}
