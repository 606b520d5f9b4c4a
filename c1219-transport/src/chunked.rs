//! Offset reads larger than one packet

use crate::error::{C1219Error, C1219Result};
use crate::psem::PsemTransport;
use bytes::{Bytes, BytesMut};

/// Read `len` bytes at `offset`, split into reads of at most `max_read`
/// bytes, itself capped at [`PsemTransport::max_offset_read_bytes`]
///
/// A short answer to any piece aborts the whole read.
pub async fn read_chunked<T: PsemTransport + ?Sized>(
    transport: &mut T,
    table_id: u16,
    offset: u32,
    len: usize,
    max_read: usize,
) -> C1219Result<Bytes> {
    let max = max_read.min(transport.max_offset_read_bytes());
    if max == 0 {
        return Err(C1219Error::InvalidData(format!(
            "packet size {} leaves no room for table data",
            transport.packet_size()
        )));
    }

    let mut data = BytesMut::with_capacity(len);
    while data.len() < len {
        let piece = (len - data.len()).min(max);
        let at = offset as usize + data.len();
        let at = u32::try_from(at).map_err(|_| C1219Error::ValueOutOfRange {
            what: "table offset",
            value: at as u64,
            max: u32::MAX as u64,
        })?;
        log::trace!("table {}: offset read {} bytes at {}", table_id, piece, at);
        let bytes = transport.offset_read(table_id, at, piece).await?;
        if bytes.len() != piece {
            return Err(C1219Error::SizeMismatch {
                table: table_id,
                expected: piece,
                actual: bytes.len(),
            });
        }
        data.extend_from_slice(&bytes);
    }
    Ok(data.freeze())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemorySettings, MemoryTransport, PsemRequest};

    #[tokio::test]
    async fn test_split_reads() {
        let mut transport = MemoryTransport::new(MemorySettings::with_packet_size(22));
        transport.insert_table(7, (0..25u8).collect::<Vec<_>>());

        let data = read_chunked(&mut transport, 7, 2, 23, usize::MAX).await.unwrap();
        assert_eq!(data.as_ref(), &(2..25u8).collect::<Vec<_>>()[..]);
        assert_eq!(
            transport.requests(),
            &[
                PsemRequest::OffsetRead { table_id: 7, offset: 2, len: 10 },
                PsemRequest::OffsetRead { table_id: 7, offset: 12, len: 10 },
                PsemRequest::OffsetRead { table_id: 7, offset: 22, len: 3 },
            ]
        );
    }

    #[tokio::test]
    async fn test_caller_cap() {
        let mut transport = MemoryTransport::new(MemorySettings::with_packet_size(64));
        transport.insert_table(7, vec![0; 9]);
        read_chunked(&mut transport, 7, 0, 9, 4).await.unwrap();
        let lens: Vec<_> = transport
            .requests()
            .iter()
            .map(|r| match r {
                PsemRequest::OffsetRead { len, .. } => *len,
                _ => 0,
            })
            .collect();
        assert_eq!(lens, vec![4, 4, 1]);
    }

    #[test]
    fn test_zero_length() {
        let mut transport = MemoryTransport::default();
        transport.insert_table(7, vec![1, 2, 3]);
        let data = tokio_test::block_on(read_chunked(&mut transport, 7, 0, 0, 10)).unwrap();
        assert!(data.is_empty());
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_packet_too_small() {
        let mut transport = MemoryTransport::new(MemorySettings::with_packet_size(12));
        transport.insert_table(7, vec![1]);
        assert!(read_chunked(&mut transport, 7, 0, 1, 10).await.is_err());
    }
}
