//! Table numbers and size dispatch

use crate::context::DimensionSnapshot;
use crate::dimension::{HanLogControl, HanRibLimits, LogDirection};
use crate::error::{C1219Error, C1219Result};
use crate::event_log::HanEventLog;
use crate::fixed::{MeterKeyTable, RfLanNeighborTable};
use crate::schedule::{ActiveRibSchedule, NextRibSchedule};
use crate::table::Table;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every table this crate knows how to size and parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableId {
    MeterKey,
    RfLanNeighbors,
    HanLogControl,
    HanUpstreamLog,
    HanDownstreamLog,
    HanRibLimits,
    ActiveRibSchedule,
    NextRibSchedule,
}

impl TableId {
    pub const ALL: [TableId; 8] = [
        Self::MeterKey,
        Self::RfLanNeighbors,
        Self::HanLogControl,
        Self::HanUpstreamLog,
        Self::HanDownstreamLog,
        Self::HanRibLimits,
        Self::ActiveRibSchedule,
        Self::NextRibSchedule,
    ];

    pub fn from_u16(value: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.to_u16() == value)
    }

    pub fn to_u16(self) -> u16 {
        match self {
            Self::MeterKey => MeterKeyTable::TABLE_ID,
            Self::RfLanNeighbors => RfLanNeighborTable::TABLE_ID,
            Self::HanLogControl => HanLogControl::TABLE_ID,
            Self::HanUpstreamLog => LogDirection::Upstream.table_id(),
            Self::HanDownstreamLog => LogDirection::Downstream.table_id(),
            Self::HanRibLimits => HanRibLimits::TABLE_ID,
            Self::ActiveRibSchedule => ActiveRibSchedule::TABLE_ID,
            Self::NextRibSchedule => NextRibSchedule::TABLE_ID,
        }
    }

    /// The dimension table this table is sized by, if any
    pub fn dimension_table(self) -> Option<TableId> {
        match self {
            Self::HanUpstreamLog | Self::HanDownstreamLog => Some(Self::HanLogControl),
            Self::ActiveRibSchedule | Self::NextRibSchedule => Some(Self::HanRibLimits),
            _ => None,
        }
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self, self.to_u16())
    }
}

/// Dimension values currently known to the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableContext {
    pub rib: Option<DimensionSnapshot>,
    pub han_log: Option<HanLogControl>,
}

impl TableContext {
    pub fn with_rib(mut self, snapshot: DimensionSnapshot) -> Self {
        self.rib = Some(snapshot);
        self
    }

    pub fn with_han_log(mut self, control: HanLogControl) -> Self {
        self.han_log = Some(control);
        self
    }
}

/// Byte length of `table_id` given the dimensions in `context`
///
/// Fails with [`C1219Error::NotLoaded`] naming the dimension table when the
/// context does not carry it.
pub fn required_size(table_id: u16, context: &TableContext) -> C1219Result<usize> {
    let id = TableId::from_u16(table_id)
        .ok_or_else(|| C1219Error::InvalidData(format!("unknown table {}", table_id)))?;
    let rib = || context.rib.ok_or(C1219Error::NotLoaded(HanRibLimits::TABLE_ID));
    let han_log = || context.han_log.ok_or(C1219Error::NotLoaded(HanLogControl::TABLE_ID));

    Ok(match id {
        TableId::MeterKey => MeterKeyTable::required_size(&()),
        TableId::RfLanNeighbors => RfLanNeighborTable::required_size(&()),
        TableId::HanLogControl => HanLogControl::required_size(&()),
        TableId::HanRibLimits => HanRibLimits::required_size(&()),
        TableId::HanUpstreamLog => {
            HanEventLog::required_size(&han_log()?.dimensions(LogDirection::Upstream)?)
        }
        TableId::HanDownstreamLog => {
            HanEventLog::required_size(&han_log()?.dimensions(LogDirection::Downstream)?)
        }
        TableId::ActiveRibSchedule => ActiveRibSchedule::required_size(&rib()?),
        TableId::NextRibSchedule => NextRibSchedule::required_size(&rib()?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RibCounts;

    #[test]
    fn test_id_mapping() {
        for id in TableId::ALL {
            assert_eq!(TableId::from_u16(id.to_u16()), Some(id));
        }
        assert_eq!(TableId::from_u16(2160), Some(TableId::HanDownstreamLog));
        assert_eq!(TableId::from_u16(1), None);
    }

    #[test]
    fn test_fixed_sizes() {
        let ctx = TableContext::default();
        assert_eq!(required_size(2048, &ctx).unwrap(), 13);
        assert_eq!(required_size(2078, &ctx).unwrap(), 1 + 32 * 19);
        assert_eq!(required_size(2158, &ctx).unwrap(), 8);
        assert_eq!(required_size(2439, &ctx).unwrap(), 134);
    }

    #[test]
    fn test_missing_dimensions() {
        let ctx = TableContext::default();
        assert!(matches!(
            required_size(2440, &ctx),
            Err(C1219Error::NotLoaded(2439))
        ));
        assert!(matches!(
            required_size(2159, &ctx),
            Err(C1219Error::NotLoaded(2158))
        ));
        assert!(matches!(
            required_size(9999, &ctx),
            Err(C1219Error::InvalidData(_))
        ));
    }

    #[test]
    fn test_dependent_sizes() {
        let ctx = TableContext::default()
            .with_rib(DimensionSnapshot::new(
                RibCounts::new(1, 1, 2),
                RibCounts::new(0, 0, 0),
            ))
            .with_han_log(HanLogControl {
                log_flags: 0,
                time_format: 0,
                upstream_entries: 2,
                upstream_argument_length: 4,
                downstream_entries: 1,
                downstream_argument_length: 0,
            });
        assert_eq!(required_size(2440, &ctx).unwrap(), 180);
        // header, config, schedule id, empty publish price, multiplier, divisor
        assert_eq!(required_size(2441, &ctx).unwrap(), 2 + 30 + 8 + 6);
        assert_eq!(required_size(2159, &ctx).unwrap(), 11 + 2 * 20);
        assert_eq!(required_size(2160, &ctx).unwrap(), 11 + 8);
    }
}
