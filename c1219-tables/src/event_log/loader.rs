//! Chunked event log loading
//!
//! The loader performs no I/O. The caller asks for the next [`ReadChunk`],
//! performs an offset read of exactly that range and feeds the bytes back:
//!
//! ```text
//! Unloaded --header--> HeaderRead --chunk--> Loading --last chunk--> Loaded
//! ```

use super::entry::HanLogEntry;
use super::header::LogHeader;
use super::log::HanEventLog;
use crate::dimension::LogDimensions;
use crate::error::{C1219Error, C1219Result};
use crate::table::Table;
use c1219_core::{ByteOrder, TableReader};
use std::collections::{BTreeMap, VecDeque};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLoadState {
    Unloaded,
    HeaderRead,
    Loading,
    Loaded,
}

/// One offset read the caller must perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadChunk {
    pub offset: usize,
    pub len: usize,
    /// First entry slot covered, 0 for the header read
    pub first_slot: u16,
    /// Entry slots covered, 0 for the header read
    pub count: u16,
}

impl ReadChunk {
    pub fn is_header(&self) -> bool {
        self.count == 0
    }
}

#[derive(Debug)]
pub struct LogLoader {
    dimensions: LogDimensions,
    order: ByteOrder,
    entries_per_read: usize,
    all_entries: bool,
    state: LogLoadState,
    header: Option<LogHeader>,
    /// Slots to load, oldest first
    wanted: Vec<u16>,
    pending: VecDeque<ReadChunk>,
    loaded: BTreeMap<u16, HanLogEntry>,
}

impl LogLoader {
    /// Loader reading the unread entries, at most `max_read_bytes` per chunk
    pub fn new(dimensions: LogDimensions, max_read_bytes: usize, order: ByteOrder) -> Self {
        let entry_size = dimensions.layout.entry_size().max(1);
        let mut pending = VecDeque::new();
        pending.push_back(ReadChunk {
            offset: 0,
            len: LogHeader::SIZE,
            first_slot: 0,
            count: 0,
        });
        Self {
            dimensions,
            order,
            entries_per_read: (max_read_bytes / entry_size).max(1),
            all_entries: false,
            state: LogLoadState::Unloaded,
            header: None,
            wanted: Vec::new(),
            pending,
            loaded: BTreeMap::new(),
        }
    }

    /// Read every valid entry instead of only the unread ones
    pub fn all_entries(mut self) -> Self {
        self.all_entries = true;
        self
    }

    pub fn state(&self) -> LogLoadState {
        self.state
    }

    pub fn header(&self) -> Option<&LogHeader> {
        self.header.as_ref()
    }

    pub fn entries_per_read(&self) -> usize {
        self.entries_per_read
    }

    /// The read to perform next, `None` once loaded
    pub fn next_request(&self) -> Option<ReadChunk> {
        self.pending.front().copied()
    }

    /// Consume the bytes answering [`LogLoader::next_request`]
    pub fn feed(&mut self, data: &[u8]) -> C1219Result<()> {
        let table = HanEventLog::table_id(&self.dimensions);
        let chunk = self
            .pending
            .front()
            .copied()
            .ok_or_else(|| C1219Error::InvalidData(format!("log {} is already loaded", table)))?;
        if data.len() != chunk.len {
            return Err(C1219Error::SizeMismatch {
                table,
                expected: chunk.len,
                actual: data.len(),
            });
        }

        let mut reader = TableReader::with_order(data, self.order);
        if chunk.is_header() {
            let header = LogHeader::parse(&mut reader)?;
            self.plan(&header);
            self.header = Some(header);
            self.state = LogLoadState::HeaderRead;
        } else {
            for slot in chunk.first_slot..chunk.first_slot + chunk.count {
                let entry = HanLogEntry::parse(&mut reader, &self.dimensions.layout)?;
                self.loaded.insert(slot, entry);
            }
            self.state = LogLoadState::Loading;
        }
        self.pending.pop_front();
        if self.pending.is_empty() {
            self.state = LogLoadState::Loaded;
        }
        Ok(())
    }

    /// The loaded log, entries oldest first
    pub fn finish(mut self) -> C1219Result<HanEventLog> {
        let table = HanEventLog::table_id(&self.dimensions);
        let header = match (self.state, self.header) {
            (LogLoadState::Loaded, Some(header)) => header,
            _ => return Err(C1219Error::NotLoaded(table)),
        };
        let mut entries = Vec::with_capacity(self.wanted.len());
        for slot in &self.wanted {
            let entry = self.loaded.remove(slot).ok_or(C1219Error::NotLoaded(table))?;
            entries.push(entry);
        }
        Ok(HanEventLog::new(self.dimensions.direction(), header, entries))
    }

    /// Split the wanted slots into contiguous runs of at most `entries_per_read`
    fn plan(&mut self, header: &LogHeader) {
        let count = if self.all_entries {
            header.valid_entries
        } else {
            header.unread_entries
        };
        self.wanted = header.chronological_slots(count, self.dimensions.max_entries);

        let mut slots = self.wanted.clone();
        slots.sort_unstable();
        let mut runs: Vec<(u16, u16)> = Vec::new();
        for slot in slots {
            match runs.last_mut() {
                Some((first, len))
                    if *first as usize + (*len as usize) == slot as usize
                        && (*len as usize) < self.entries_per_read =>
                {
                    *len += 1
                }
                _ => runs.push((slot, 1)),
            }
        }

        let entry_size = self.dimensions.layout.entry_size();
        for (first_slot, count) in runs {
            let chunk = ReadChunk {
                offset: HanEventLog::slot_offset(&self.dimensions, first_slot),
                len: count as usize * entry_size,
                first_slot,
                count,
            };
            log::trace!(
                "log {}: chunk slots {}..{} at offset {} ({} bytes)",
                HanEventLog::table_id(&self.dimensions),
                first_slot,
                first_slot as usize + count as usize,
                chunk.offset,
                chunk.len
            );
            self.pending.push_back(chunk);
        }
    }
}
