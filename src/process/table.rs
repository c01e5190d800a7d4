/*!
 * Process Table
 * Canonical, read-only process list shared by every scheduler run
 */

use super::record::ProcessRecord;
use crate::core::errors::{SimError, SimResult};
use crate::core::types::Ticks;
use tracing::debug;

/// Process list sorted ascending by id
///
/// Ascending id is the tie-break order of both schedulers, so it is
/// established here once instead of inside the scheduling loops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessTable {
    records: Vec<ProcessRecord>,
}

impl ProcessTable {
    /// Build a table, sorting by id and rejecting duplicate ids or empty bursts
    pub fn new(mut records: Vec<ProcessRecord>) -> SimResult<Self> {
        records.sort_by_key(|p| p.id);

        if let Some(p) = records.iter().find(|p| p.burst == 0) {
            return Err(SimError::InvalidBurst { id: p.id });
        }
        if let Some(pair) = records.windows(2).find(|w| w[0].id == w[1].id) {
            return Err(SimError::DuplicateId(pair[0].id));
        }

        for record in &mut records {
            record.reset();
        }

        debug!(count = records.len(), "Process table built");
        Ok(Self { records })
    }

    /// Owned, reset copy for a single run
    #[must_use]
    pub fn fresh_copy(&self) -> Vec<ProcessRecord> {
        let mut copy = self.records.clone();
        for record in &mut copy {
            record.reset();
        }
        copy
    }

    #[inline]
    pub fn records(&self) -> &[ProcessRecord] {
        &self.records
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of every process's CPU demand
    pub fn total_burst(&self) -> Ticks {
        self.records.iter().map(|p| p.burst).sum()
    }
}
