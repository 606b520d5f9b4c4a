//! Table session
//!
//! # Architecture
//!
//! A [`TableSession`] owns a [`PsemTransport`] and the cached state of every
//! table it knows. Parsing stays in `c1219-tables`; the session decides when
//! bytes are fetched:
//!
//! - **Dimension tables** (2439, 2158) are read explicitly through `refresh_*`
//!   or implicitly before a dependent read when
//!   [`SessionConfig::refresh_dimensions`] is set
//! - **Variable tables** (2440, 2441) are sized from a [`DimensionSnapshot`]
//!   taken after that refresh and fetched with one full read, or with
//!   chunked offset reads when [`SessionConfig::chunk_full_reads`] is set
//! - **Event logs** (2159, 2160) are fetched with offset reads driven by a
//!   [`LogLoader`]
//!
//! A failed read never replaces what is cached. Requests are awaited one at a
//! time and every operation takes `&mut self`, so one session never has two
//! requests in flight.
//!
//! # Usage Example
//!
//! ```rust,no_run
//! use c1219_session::{SessionConfig, TableSession};
//! use c1219_transport::MemoryTransport;
//!
//! # async fn run(transport: MemoryTransport) -> c1219_session::C1219Result<()> {
//! let mut session = TableSession::new(transport, SessionConfig::default());
//!
//! // Reads table 2439 first, then 2440 sized by its active counts
//! let schedule = session.read_active_schedule().await?;
//! println!("{} block periods", schedule.block_periods.len());
//! # Ok(())
//! # }
//! ```

use crate::config::SessionConfig;
use crate::error::{C1219Error, C1219Result};
use crate::state::TableState;
use c1219_core::TableWriter;
use c1219_tables::schedule::CONFIG_OFFSET;
use c1219_tables::{
    ActiveRibSchedule, DimensionSnapshot, HanEventLog, HanLogControl, HanRibLimits,
    LogDimensions, LogDirection, LogLoader, MeterKeyTable, NextRibSchedule, Record,
    RfLanNeighborTable, RibConfig, RibCounts, Table, TableContext,
};
use c1219_transport::{PsemTransport, RESPONSE_OVERHEAD, read_chunked};

/// Which RIB schedule table a configuration write targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RibSchedule {
    Active,
    Next,
}

impl RibSchedule {
    pub fn table_id(self) -> u16 {
        match self {
            Self::Active => ActiveRibSchedule::TABLE_ID,
            Self::Next => NextRibSchedule::TABLE_ID,
        }
    }
}

/// Which entries of an event log to load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogSelection {
    /// Entries the meter reports as unread
    #[default]
    Unread,
    /// Every valid entry
    All,
}

/// Cached table access over one PSEM session
#[derive(Debug)]
pub struct TableSession<T> {
    transport: T,
    config: SessionConfig,
    rib_limits: TableState<HanRibLimits>,
    /// Counts as the meter holds them, unaffected by staged next counts
    rib_snapshot: Option<DimensionSnapshot>,
    active_schedule: TableState<ActiveRibSchedule>,
    next_schedule: TableState<NextRibSchedule>,
    han_log_control: TableState<HanLogControl>,
    upstream_log: TableState<HanEventLog>,
    downstream_log: TableState<HanEventLog>,
    rflan_neighbors: TableState<RfLanNeighborTable>,
    meter_key: TableState<MeterKeyTable>,
}

impl<T: PsemTransport> TableSession<T> {
    /// Create a session with every table in `NotLoaded` state
    pub fn new(transport: T, config: SessionConfig) -> Self {
        Self {
            transport,
            config,
            rib_limits: TableState::NotLoaded,
            rib_snapshot: None,
            active_schedule: TableState::NotLoaded,
            next_schedule: TableState::NotLoaded,
            han_log_control: TableState::NotLoaded,
            upstream_log: TableState::NotLoaded,
            downstream_log: TableState::NotLoaded,
            rflan_neighbors: TableState::NotLoaded,
            meter_key: TableState::NotLoaded,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    pub fn rib_limits(&self) -> &TableState<HanRibLimits> {
        &self.rib_limits
    }

    pub fn active_schedule(&self) -> &TableState<ActiveRibSchedule> {
        &self.active_schedule
    }

    pub fn next_schedule(&self) -> &TableState<NextRibSchedule> {
        &self.next_schedule
    }

    pub fn han_log_control(&self) -> &TableState<HanLogControl> {
        &self.han_log_control
    }

    pub fn log(&self, direction: LogDirection) -> &TableState<HanEventLog> {
        match direction {
            LogDirection::Upstream => &self.upstream_log,
            LogDirection::Downstream => &self.downstream_log,
        }
    }

    pub fn rflan_neighbors(&self) -> &TableState<RfLanNeighborTable> {
        &self.rflan_neighbors
    }

    pub fn meter_key(&self) -> &TableState<MeterKeyTable> {
        &self.meter_key
    }

    /// Forget every cached table, including unwritten changes
    pub fn invalidate_all(&mut self) {
        self.rib_limits.invalidate();
        self.rib_snapshot = None;
        self.active_schedule.invalidate();
        self.next_schedule.invalidate();
        self.han_log_control.invalidate();
        self.upstream_log.invalidate();
        self.downstream_log.invalidate();
        self.rflan_neighbors.invalidate();
        self.meter_key.invalidate();
    }

    /// Dimension values of the loaded dimension tables
    ///
    /// Feed this to [`c1219_tables::required_size`]; nothing is read.
    pub fn table_context(&self) -> TableContext {
        TableContext {
            rib: self.rib_snapshot,
            han_log: self.han_log_control.get().copied(),
        }
    }

    /// Largest offset read the session issues
    ///
    /// The configured packet size caps the transport's, never raises it.
    pub fn max_read_bytes(&self) -> usize {
        let transport = self.transport.max_offset_read_bytes();
        match self.config.max_packet_size {
            Some(packet_size) => packet_size.saturating_sub(RESPONSE_OVERHEAD).min(transport),
            None => transport,
        }
    }

    /// Read the RIB limits table (2439)
    ///
    /// Unwritten next counts are discarded.
    pub async fn refresh_rib_limits(&mut self) -> C1219Result<&HanRibLimits> {
        let limits: HanRibLimits = self.read_table(&()).await?;
        for (name, counts) in [("active", limits.active), ("next", limits.next)] {
            if counts.has_sentinel() {
                log::warn!(
                    "table {}: {} counts {:?} contain 255, arrays treated as not populated",
                    HanRibLimits::TABLE_ID,
                    name,
                    counts
                );
            }
        }
        if self.rib_limits.is_dirty() {
            log::warn!(
                "table {}: unwritten next counts discarded by refresh",
                HanRibLimits::TABLE_ID
            );
        }
        self.rib_snapshot = Some(limits.snapshot());
        self.rib_limits = TableState::Loaded(limits);
        loaded(&self.rib_limits, HanRibLimits::TABLE_ID)
    }

    /// Snapshot of the RIB limits, refreshed first when configured or not loaded
    ///
    /// Staged next counts are not part of the snapshot until they are flushed.
    pub async fn rib_dimensions(&mut self) -> C1219Result<DimensionSnapshot> {
        if self.config.refresh_dimensions || self.rib_snapshot.is_none() {
            self.refresh_rib_limits().await?;
        }
        self.rib_snapshot.ok_or(C1219Error::NotLoaded(HanRibLimits::TABLE_ID))
    }

    /// Read the active RIB schedule (2440) sized by the active counts
    pub async fn read_active_schedule(&mut self) -> C1219Result<&ActiveRibSchedule> {
        let dimensions = self.rib_dimensions().await?;
        let schedule: ActiveRibSchedule = self.read_table(&dimensions).await?;
        self.active_schedule = TableState::Loaded(schedule);
        loaded(&self.active_schedule, ActiveRibSchedule::TABLE_ID)
    }

    /// Read the next RIB schedule (2441) sized by the next counts
    pub async fn read_next_schedule(&mut self) -> C1219Result<&NextRibSchedule> {
        let dimensions = self.rib_dimensions().await?;
        let schedule: NextRibSchedule = self.read_table(&dimensions).await?;
        self.next_schedule = TableState::Loaded(schedule);
        loaded(&self.next_schedule, NextRibSchedule::TABLE_ID)
    }

    /// Stage new next counts; written by [`Self::flush_rib_limits`]
    ///
    /// # Errors
    /// [`C1219Error::NotLoaded`] when the limits table has not been read.
    pub fn set_next_counts(&mut self, counts: RibCounts) -> C1219Result<()> {
        if counts.has_sentinel() {
            log::warn!(
                "table {}: staging next counts {:?} containing 255",
                HanRibLimits::TABLE_ID,
                counts
            );
        }
        if !self.rib_limits.modify(|limits| limits.set_next(counts)) {
            return Err(C1219Error::NotLoaded(HanRibLimits::TABLE_ID));
        }
        Ok(())
    }

    /// Write staged next counts
    ///
    /// Only the three next count bytes are written; the read-only counts and
    /// the reserved block are never sent. The cached next schedule is dropped
    /// since its size depends on those counts. Does nothing when no counts are
    /// staged.
    pub async fn flush_rib_limits(&mut self) -> C1219Result<()> {
        let (bytes, next) = match &self.rib_limits {
            TableState::Dirty(limits) => (limits.next_counts_bytes(), limits.next),
            _ => return Ok(()),
        };
        self.write_at(
            HanRibLimits::TABLE_ID,
            HanRibLimits::NEXT_COUNTS_OFFSET,
            &bytes,
        )
        .await?;
        self.rib_limits.mark_clean();
        if let Some(snapshot) = &mut self.rib_snapshot {
            snapshot.next = next;
        }
        self.next_schedule.invalidate();
        Ok(())
    }

    /// Write the configuration register of a RIB schedule table
    ///
    /// The whole 16-bit register is written, reserved bits included. A cached
    /// copy of the table is updated once the meter accepts the write.
    pub async fn write_rib_config(
        &mut self,
        schedule: RibSchedule,
        config: RibConfig,
    ) -> C1219Result<()> {
        let mut writer = TableWriter::with_order(self.config.byte_order);
        config.write(&mut writer, ())?;
        self.write_at(schedule.table_id(), CONFIG_OFFSET, writer.as_slice())
            .await?;
        match schedule {
            RibSchedule::Active => {
                if let Some(table) = self.active_schedule.get_mut() {
                    table.config = config;
                }
            }
            RibSchedule::Next => {
                if let Some(table) = self.next_schedule.get_mut() {
                    table.config = config;
                }
            }
        }
        Ok(())
    }

    /// Read the HAN log control table (2158)
    pub async fn read_han_log_control(&mut self) -> C1219Result<&HanLogControl> {
        let control: HanLogControl = self.read_table(&()).await?;
        self.han_log_control = TableState::Loaded(control);
        loaded(&self.han_log_control, HanLogControl::TABLE_ID)
    }

    /// Dimensions of one log, refreshing the control table when configured
    pub async fn log_dimensions(&mut self, direction: LogDirection) -> C1219Result<LogDimensions> {
        if self.config.refresh_dimensions || !self.han_log_control.is_loaded() {
            self.read_han_log_control().await?;
        }
        loaded(&self.han_log_control, HanLogControl::TABLE_ID)?.dimensions(direction)
    }

    /// Load an event log with chunked offset reads
    ///
    /// # Arguments
    /// * `direction` - Upstream (2159) or downstream (2160) log
    /// * `selection` - Unread entries only, or every valid entry
    ///
    /// # Returns
    /// The log with the selected entries oldest first
    pub async fn read_log(
        &mut self,
        direction: LogDirection,
        selection: LogSelection,
    ) -> C1219Result<&HanEventLog> {
        let dimensions = self.log_dimensions(direction).await?;
        let table_id = direction.table_id();
        let mut loader = LogLoader::new(dimensions, self.max_read_bytes(), self.config.byte_order);
        if selection == LogSelection::All {
            loader = loader.all_entries();
        }

        while let Some(chunk) = loader.next_request() {
            let offset = u32::try_from(chunk.offset).map_err(|_| C1219Error::ValueOutOfRange {
                what: "log offset",
                value: chunk.offset as u64,
                max: u32::MAX as u64,
            })?;
            log::debug!(
                "table {}: offset read {} bytes at {}",
                table_id,
                chunk.len,
                offset
            );
            let result = self.transport.offset_read(table_id, offset, chunk.len).await;
            let data = report(table_id, result)?;
            report(table_id, loader.feed(&data))?;
        }
        let log = report(table_id, loader.finish())?;

        let state = match direction {
            LogDirection::Upstream => &mut self.upstream_log,
            LogDirection::Downstream => &mut self.downstream_log,
        };
        *state = TableState::Loaded(log);
        loaded(state, table_id)
    }

    pub async fn read_upstream_log(&mut self) -> C1219Result<&HanEventLog> {
        self.read_log(LogDirection::Upstream, LogSelection::Unread).await
    }

    pub async fn read_downstream_log(&mut self) -> C1219Result<&HanEventLog> {
        self.read_log(LogDirection::Downstream, LogSelection::Unread).await
    }

    /// Read the RFLAN neighbor table (2078)
    pub async fn read_rflan_neighbors(&mut self) -> C1219Result<&RfLanNeighborTable> {
        let table: RfLanNeighborTable = self.read_table(&()).await?;
        self.rflan_neighbors = TableState::Loaded(table);
        loaded(&self.rflan_neighbors, RfLanNeighborTable::TABLE_ID)
    }

    /// Read the meter key table (2048)
    pub async fn read_meter_key(&mut self) -> C1219Result<&MeterKeyTable> {
        let table: MeterKeyTable = self.read_table(&()).await?;
        self.meter_key = TableState::Loaded(table);
        loaded(&self.meter_key, MeterKeyTable::TABLE_ID)
    }

    /// Full read and parse of one table
    ///
    /// With [`SessionConfig::chunk_full_reads`] a table larger than one read
    /// is fetched as `required_size` bytes of offset reads instead.
    async fn read_table<X: Table>(&mut self, dimensions: &X::Dimensions) -> C1219Result<X> {
        let table_id = X::table_id(dimensions);
        let expected = X::required_size(dimensions);
        log::debug!("table {}: full read, {} bytes expected", table_id, expected);

        let max_read = if self.config.chunk_full_reads {
            self.max_read_bytes()
        } else {
            usize::MAX
        };
        let result = if expected > max_read {
            read_chunked(&mut self.transport, table_id, 0, expected, max_read).await
        } else {
            self.transport.full_read(table_id).await
        };
        let mut data = report(table_id, result)?;
        if !self.config.verify_lengths && data.len() > expected {
            log::warn!(
                "table {}: {} bytes received, using the first {}",
                table_id,
                data.len(),
                expected
            );
            data.truncate(expected);
        }
        report(
            table_id,
            X::parse(&data, self.config.byte_order, dimensions),
        )
    }

    async fn write_at(&mut self, table_id: u16, offset: u32, data: &[u8]) -> C1219Result<()> {
        log::debug!(
            "table {}: offset write {} bytes at {}",
            table_id,
            data.len(),
            offset
        );
        let result = self.transport.offset_write(table_id, offset, data).await;
        report(table_id, result)
    }
}

fn loaded<V>(state: &TableState<V>, table_id: u16) -> C1219Result<&V> {
    state.get().ok_or(C1219Error::NotLoaded(table_id))
}

fn report<V>(table_id: u16, result: C1219Result<V>) -> C1219Result<V> {
    if let Err(e) = &result {
        log::error!("table {}: {}", table_id, e);
    }
    result
}
