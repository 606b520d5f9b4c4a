//! Fixed-length tables

pub mod meter_key;
pub mod rflan_neighbors;

pub use meter_key::MeterKeyTable;
pub use rflan_neighbors::RfLanNeighborTable;
