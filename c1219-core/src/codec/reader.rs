//! Sequential table data reader

use crate::codec::ascii;
use crate::codec::byte_order::ByteOrder;
use crate::error::{C1219Error, C1219Result};
use crate::uint::{U24, U48};
use bytes::Buf;

/// Cursor over table bytes returned by a full or offset read
///
/// Every accessor checks the remaining length first and reports
/// [`C1219Error::BufferUnderrun`] instead of panicking on short data.
#[derive(Debug, Clone)]
pub struct TableReader<'a> {
    buffer: &'a [u8],
    total: usize,
    order: ByteOrder,
}

impl<'a> TableReader<'a> {
    /// Create a new big-endian reader
    pub fn new(buffer: &'a [u8]) -> Self {
        Self::with_order(buffer, ByteOrder::BigEndian)
    }

    /// Create a reader with an explicit byte order
    pub fn with_order(buffer: &'a [u8], order: ByteOrder) -> Self {
        Self {
            buffer,
            total: buffer.len(),
            order,
        }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Bytes consumed so far
    pub fn position(&self) -> usize {
        self.total - self.buffer.len()
    }

    /// Bytes left to read
    pub fn remaining(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    fn ensure(&self, needed: usize) -> C1219Result<()> {
        if self.buffer.len() < needed {
            return Err(C1219Error::BufferUnderrun {
                needed,
                available: self.buffer.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&mut self) -> C1219Result<u8> {
        self.ensure(1)?;
        Ok(self.buffer.get_u8())
    }

    pub fn read_i8(&mut self) -> C1219Result<i8> {
        self.ensure(1)?;
        Ok(self.buffer.get_i8())
    }

    pub fn read_u16(&mut self) -> C1219Result<u16> {
        self.ensure(2)?;
        Ok(match self.order {
            ByteOrder::BigEndian => self.buffer.get_u16(),
            ByteOrder::LittleEndian => self.buffer.get_u16_le(),
        })
    }

    pub fn read_i16(&mut self) -> C1219Result<i16> {
        self.ensure(2)?;
        Ok(match self.order {
            ByteOrder::BigEndian => self.buffer.get_i16(),
            ByteOrder::LittleEndian => self.buffer.get_i16_le(),
        })
    }

    pub fn read_u24(&mut self) -> C1219Result<U24> {
        Ok(U24::truncate(self.read_uint(U24::WIDTH)? as u32))
    }

    pub fn read_u32(&mut self) -> C1219Result<u32> {
        self.ensure(4)?;
        Ok(match self.order {
            ByteOrder::BigEndian => self.buffer.get_u32(),
            ByteOrder::LittleEndian => self.buffer.get_u32_le(),
        })
    }

    pub fn read_i32(&mut self) -> C1219Result<i32> {
        self.ensure(4)?;
        Ok(match self.order {
            ByteOrder::BigEndian => self.buffer.get_i32(),
            ByteOrder::LittleEndian => self.buffer.get_i32_le(),
        })
    }

    pub fn read_u48(&mut self) -> C1219Result<U48> {
        Ok(U48::truncate(self.read_uint(U48::WIDTH)?))
    }

    pub fn read_u64(&mut self) -> C1219Result<u64> {
        self.ensure(8)?;
        Ok(match self.order {
            ByteOrder::BigEndian => self.buffer.get_u64(),
            ByteOrder::LittleEndian => self.buffer.get_u64_le(),
        })
    }

    /// IEEE 754 single precision
    pub fn read_f32(&mut self) -> C1219Result<f32> {
        self.ensure(4)?;
        Ok(match self.order {
            ByteOrder::BigEndian => self.buffer.get_f32(),
            ByteOrder::LittleEndian => self.buffer.get_f32_le(),
        })
    }

    fn read_uint(&mut self, width: usize) -> C1219Result<u64> {
        self.ensure(width)?;
        Ok(match self.order {
            ByteOrder::BigEndian => self.buffer.get_uint(width),
            ByteOrder::LittleEndian => self.buffer.get_uint_le(width),
        })
    }

    /// Borrow the next `len` bytes
    pub fn read_slice(&mut self, len: usize) -> C1219Result<&'a [u8]> {
        self.ensure(len)?;
        let (head, tail) = self.buffer.split_at(len);
        self.buffer = tail;
        Ok(head)
    }

    /// Copy the next `len` bytes
    pub fn read_bytes(&mut self, len: usize) -> C1219Result<Vec<u8>> {
        Ok(self.read_slice(len)?.to_vec())
    }

    /// Read a fixed-width character field of `len` bytes
    pub fn read_string(&mut self, len: usize) -> C1219Result<String> {
        Ok(ascii::decode_fixed(self.read_slice(len)?))
    }

    pub fn skip(&mut self, len: usize) -> C1219Result<()> {
        self.ensure(len)?;
        self.buffer.advance(len);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_big_endian() {
        let bytes = [
            0x12, 0x34, 0x01, 0x02, 0x03, 0xAA, 0xBB, 0xCC, 0xDD, 0x00, 0x00, 0x00, 0x00, 0x01,
            0x00,
        ];
        let mut reader = TableReader::new(&bytes);
        assert_eq!(reader.read_u16().unwrap(), 0x1234);
        assert_eq!(reader.read_u24().unwrap().get(), 0x010203);
        assert_eq!(reader.read_u32().unwrap(), 0xAABBCCDD);
        assert_eq!(reader.read_u48().unwrap().get(), 0x0000_0000_0100);
        assert_eq!(reader.position(), 15);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_read_little_endian() {
        let bytes = [0x03, 0x02, 0x01, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01];
        let mut reader = TableReader::with_order(&bytes, ByteOrder::LittleEndian);
        assert_eq!(reader.read_u24().unwrap().get(), 0x010203);
        assert_eq!(reader.read_u48().unwrap().get(), 0x0102_0304_0506);
    }

    #[test]
    fn test_u48_never_sign_extends() {
        let bytes = [0xFF; 6];
        let mut reader = TableReader::new(&bytes);
        assert_eq!(reader.read_u48().unwrap(), U48::MAX);
    }

    #[test]
    fn test_underrun_is_error() {
        let bytes = [0x01, 0x02];
        let mut reader = TableReader::new(&bytes);
        let err = reader.read_u24().unwrap_err();
        assert!(matches!(
            err,
            C1219Error::BufferUnderrun {
                needed: 3,
                available: 2
            }
        ));
        // A failed read does not consume anything
        assert_eq!(reader.read_u16().unwrap(), 0x0102);
    }

    #[test]
    fn test_read_string() {
        let bytes = *b"SCHED\0\0\0XY";
        let mut reader = TableReader::new(&bytes);
        assert_eq!(reader.read_string(8).unwrap(), "SCHED");
        assert_eq!(reader.read_slice(2).unwrap(), b"XY");
    }
}
