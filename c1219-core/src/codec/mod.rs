//! Primitive table codec
//!
//! `TableReader` and `TableWriter` are the only places that know how bytes are
//! assembled into integers. Record types describe *which* fields come in
//! *which* order; the reader/writer pair decides byte order and width.

pub mod ascii;
pub mod byte_order;
pub mod reader;
pub mod writer;

pub use byte_order::ByteOrder;
pub use reader::TableReader;
pub use writer::TableWriter;
