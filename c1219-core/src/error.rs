use thiserror::Error;

use crate::response::PsemResponse;

/// Main error type for C12.19 table operations
#[derive(Error, Debug)]
pub enum C1219Error {
    #[error("Connection error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PSEM response: {0}")]
    Response(PsemResponse),

    #[error("Timeout")]
    Timeout,

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Buffer underrun: need {needed} bytes, have {available}")]
    BufferUnderrun { needed: usize, available: usize },

    #[error("Table {table}: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        table: u16,
        expected: usize,
        actual: usize,
    },

    #[error("{what} out of range: {value} > {max}")]
    ValueOutOfRange { what: &'static str, value: u64, max: u64 },

    #[error("Table {0} is not loaded")]
    NotLoaded(u16),
}

/// Result type alias for C12.19 table operations
pub type C1219Result<T> = Result<T, C1219Error>;
