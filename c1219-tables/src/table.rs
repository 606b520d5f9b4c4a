//! Whole-table parse/serialize discipline

use crate::error::{C1219Error, C1219Result};
use bytes::Bytes;
use c1219_core::{ByteOrder, TableReader, TableWriter};

/// A numbered table whose length is a pure function of its dimensions
pub trait Table: Sized {
    const TABLE_ID: u16;

    /// Values the table layout depends on; `()` for fixed tables
    type Dimensions;

    /// Table number for these dimensions; only differs from `TABLE_ID` for
    /// tables that share one layout across several numbers
    fn table_id(_dimensions: &Self::Dimensions) -> u16 {
        Self::TABLE_ID
    }

    fn required_size(dimensions: &Self::Dimensions) -> usize;

    /// Parse fields in wire order
    fn parse_fields(reader: &mut TableReader<'_>, dimensions: &Self::Dimensions)
    -> C1219Result<Self>;

    /// Write fields in wire order
    fn write_fields(&self, writer: &mut TableWriter, dimensions: &Self::Dimensions)
    -> C1219Result<()>;

    /// Parse a complete table image, which must be exactly `required_size` bytes
    fn parse(data: &[u8], order: ByteOrder, dimensions: &Self::Dimensions) -> C1219Result<Self> {
        let expected = Self::required_size(dimensions);
        check_size(Self::table_id(dimensions), expected, data.len())?;
        let mut reader = TableReader::with_order(data, order);
        let table = Self::parse_fields(&mut reader, dimensions)?;
        check_size(Self::table_id(dimensions), expected, reader.position())?;
        Ok(table)
    }

    /// Serialize a complete table image of exactly `required_size` bytes
    fn to_bytes(&self, order: ByteOrder, dimensions: &Self::Dimensions) -> C1219Result<Bytes> {
        let expected = Self::required_size(dimensions);
        let mut writer = TableWriter::with_capacity(expected, order);
        self.write_fields(&mut writer, dimensions)?;
        check_size(Self::table_id(dimensions), expected, writer.len())?;
        Ok(writer.into_bytes())
    }
}

fn check_size(table: u16, expected: usize, actual: usize) -> C1219Result<()> {
    if expected != actual {
        return Err(C1219Error::SizeMismatch {
            table,
            expected,
            actual,
        });
    }
    Ok(())
}
