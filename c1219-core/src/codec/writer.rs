//! Sequential table data writer

use crate::codec::ascii;
use crate::codec::byte_order::ByteOrder;
use crate::error::C1219Result;
use crate::uint::{U24, U48};
use bytes::{BufMut, Bytes, BytesMut};

/// Growable buffer mirroring [`TableReader`](crate::codec::TableReader)
#[derive(Debug, Clone, Default)]
pub struct TableWriter {
    buffer: BytesMut,
    order: ByteOrder,
}

impl TableWriter {
    /// Create a new big-endian writer
    pub fn new() -> Self {
        Self::with_order(ByteOrder::BigEndian)
    }

    pub fn with_order(order: ByteOrder) -> Self {
        Self {
            buffer: BytesMut::new(),
            order,
        }
    }

    /// Create a writer with room for `capacity` bytes
    pub fn with_capacity(capacity: usize, order: ByteOrder) -> Self {
        Self {
            buffer: BytesMut::with_capacity(capacity),
            order,
        }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_bytes(self) -> Bytes {
        self.buffer.freeze()
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buffer.put_u8(value);
    }

    pub fn write_i8(&mut self, value: i8) {
        self.buffer.put_i8(value);
    }

    pub fn write_u16(&mut self, value: u16) {
        match self.order {
            ByteOrder::BigEndian => self.buffer.put_u16(value),
            ByteOrder::LittleEndian => self.buffer.put_u16_le(value),
        }
    }

    pub fn write_i16(&mut self, value: i16) {
        match self.order {
            ByteOrder::BigEndian => self.buffer.put_i16(value),
            ByteOrder::LittleEndian => self.buffer.put_i16_le(value),
        }
    }

    pub fn write_u24(&mut self, value: U24) {
        self.write_uint(value.get() as u64, U24::WIDTH);
    }

    pub fn write_u32(&mut self, value: u32) {
        match self.order {
            ByteOrder::BigEndian => self.buffer.put_u32(value),
            ByteOrder::LittleEndian => self.buffer.put_u32_le(value),
        }
    }

    pub fn write_i32(&mut self, value: i32) {
        match self.order {
            ByteOrder::BigEndian => self.buffer.put_i32(value),
            ByteOrder::LittleEndian => self.buffer.put_i32_le(value),
        }
    }

    pub fn write_u48(&mut self, value: U48) {
        self.write_uint(value.get(), U48::WIDTH);
    }

    pub fn write_u64(&mut self, value: u64) {
        match self.order {
            ByteOrder::BigEndian => self.buffer.put_u64(value),
            ByteOrder::LittleEndian => self.buffer.put_u64_le(value),
        }
    }

    pub fn write_f32(&mut self, value: f32) {
        match self.order {
            ByteOrder::BigEndian => self.buffer.put_f32(value),
            ByteOrder::LittleEndian => self.buffer.put_f32_le(value),
        }
    }

    fn write_uint(&mut self, value: u64, width: usize) {
        match self.order {
            ByteOrder::BigEndian => self.buffer.put_uint(value, width),
            ByteOrder::LittleEndian => self.buffer.put_uint_le(value, width),
        }
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buffer.put_slice(bytes);
    }

    /// Write `value` as a NUL padded field of exactly `width` bytes
    pub fn write_string(&mut self, value: &str, width: usize) -> C1219Result<()> {
        let field = ascii::encode_fixed(value, width)?;
        self.buffer.put_slice(&field);
        Ok(())
    }

    /// Write `count` zero bytes
    pub fn write_zeros(&mut self, count: usize) {
        self.buffer.put_bytes(0, count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::TableReader;

    #[test]
    fn test_write_widths() {
        let mut writer = TableWriter::new();
        writer.write_u24(U24::new(0x010203).unwrap());
        writer.write_u48(U48::new(0x0102_0304_0506).unwrap());
        assert_eq!(
            writer.as_slice(),
            &[0x01, 0x02, 0x03, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06]
        );
    }

    #[test]
    fn test_write_little_endian() {
        let mut writer = TableWriter::with_order(ByteOrder::LittleEndian);
        writer.write_u16(0x1234);
        writer.write_u24(U24::new(0x010203).unwrap());
        assert_eq!(writer.as_slice(), &[0x34, 0x12, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_mirrors_reader() {
        let mut writer = TableWriter::new();
        writer.write_i16(-2);
        writer.write_i32(-70000);
        writer.write_f32(1.5);
        writer.write_string("RIB", 6).unwrap();
        let bytes = writer.into_bytes();

        let mut reader = TableReader::new(&bytes);
        assert_eq!(reader.read_i16().unwrap(), -2);
        assert_eq!(reader.read_i32().unwrap(), -70000);
        assert_eq!(reader.read_f32().unwrap(), 1.5);
        assert_eq!(reader.read_string(6).unwrap(), "RIB");
        assert!(reader.is_empty());
    }
}
