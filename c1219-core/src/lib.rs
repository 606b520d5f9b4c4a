//! Core types and utilities for ANSI C12.19 table marshalling
//!
//! This crate provides the error type, the primitive table codec, the
//! non-standard integer widths and the small value types shared by every
//! table definition.

pub mod bitfield;
pub mod codec;
pub mod currency;
pub mod error;
pub mod fixed_point;
pub mod response;
pub mod time;
pub mod uint;
pub mod unit_of_measure;

pub use codec::{ByteOrder, TableReader, TableWriter};
pub use currency::CurrencyCode;
pub use error::{C1219Error, C1219Result};
pub use fixed_point::{NOT_USED, format_fixed_point, format_price, format_threshold};
pub use response::PsemResponse;
pub use time::{LTimeDate, MeterTime, TimeFormat, Timestamp};
pub use uint::{U24, U48};
pub use unit_of_measure::UnitOfMeasure;
