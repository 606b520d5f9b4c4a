//! c1219 - Rust implementation of ANSI C12.19 HAN/RIB table marshalling
//!
//! This library reads and writes the manufacturer HAN, RIB pricing and RFLAN
//! tables of a C12.19 meter over a PSEM session.
//!
//! # Architecture
//!
//! This library is organized as a workspace with multiple crates:
//!
//! - `c1219-core`: Error type, primitive codec, 24/48-bit integers, price formatting
//! - `c1219-tables`: Record types, dimension tables, variable tables, event logs
//! - `c1219-transport`: PSEM transport trait and in-memory meter image
//! - `c1219-session`: Cached table state and dimension-aware reads
//!
//! # Implementation Status
//!
//! ## ✅ 已完成
//! - 基础编解码（UInt24/UInt48、定点价格、位域、货币代码）
//! - RIB 维度表与可变长度表（2439、2440、2441）
//! - HAN 事件日志（2158、2159、2160），分块读取
//! - RFLAN 邻居表与表计密钥表（2078、2048）
//! - 会话层表状态缓存
//!
//! # Usage
//!
//! ```no_run
//! use c1219::session::{SessionConfig, TableSession};
//! use c1219::transport::MemoryTransport;
//!
//! let session = TableSession::new(MemoryTransport::default(), SessionConfig::default());
//! ```

// Re-export core types
pub use c1219_core::{
    ByteOrder, C1219Error, C1219Result, CurrencyCode, MeterTime, PsemResponse, TableReader,
    TableWriter, U24, U48,
};

// Re-export table definitions
pub mod tables {
    pub use c1219_tables::*;
}

// Re-export transport API
pub mod transport {
    pub use c1219_transport::*;
}

// Re-export session API
pub mod session {
    pub use c1219_session::*;
}
