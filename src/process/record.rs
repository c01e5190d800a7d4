/*!
 * Process Record
 * Static description plus per-run simulation state for one process
 */

use crate::core::types::{Pid, Priority, Ticks};
use serde::{Deserialize, Serialize};

/// One process in the batch
///
/// `remaining` and `completion` are the only fields a scheduler mutates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessRecord {
    pub id: Pid,
    pub arrival: Ticks,
    pub priority: Priority,
    pub burst: Ticks,
    remaining: Ticks,
    completion: Option<Ticks>,
}

impl ProcessRecord {
    #[inline]
    #[must_use]
    pub fn new(id: Pid, arrival: Ticks, priority: Priority, burst: Ticks) -> Self {
        Self {
            id,
            arrival,
            priority,
            burst,
            remaining: burst,
            completion: None,
        }
    }

    /// Restore the pre-run state
    pub fn reset(&mut self) {
        self.remaining = self.burst;
        self.completion = None;
    }

    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> Ticks {
        self.remaining
    }

    #[inline]
    #[must_use]
    pub const fn completion(&self) -> Option<Ticks> {
        self.completion
    }

    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// Arrived by `time` and still has work left
    #[inline]
    #[must_use]
    pub const fn is_eligible(&self, time: Ticks) -> bool {
        self.arrival <= time && self.remaining > 0
    }

    /// Consume one tick of CPU. `now` is the time at the end of that tick.
    ///
    /// Returns true when this tick finished the process.
    pub fn run_tick(&mut self, now: Ticks) -> bool {
        debug_assert!(self.remaining > 0, "process {} ran with no work left", self.id);
        self.remaining -= 1;
        if self.remaining == 0 {
            debug_assert!(self.completion.is_none(), "process {} completed twice", self.id);
            self.completion = Some(now);
            true
        } else {
            false
        }
    }

    /// Completion minus arrival, once finished
    #[must_use]
    pub fn turnaround(&self) -> Option<Ticks> {
        self.completion.map(|done| done - self.arrival)
    }
}
