/*!
 * Trace Events
 * One `[start,end): label` entry of a run's timeline
 */

use crate::core::types::{Pid, Ticks};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What occupied the CPU during an interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "pid", rename_all = "snake_case")]
pub enum EventLabel {
    /// A process executed
    Process(Pid),
    /// Context-switch overhead
    Scheduler,
    /// Nothing was runnable
    Idle,
}

impl fmt::Display for EventLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Process(pid) => write!(f, "Process {}", pid),
            Self::Scheduler => f.write_str("Scheduler"),
            Self::Idle => f.write_str("Idle"),
        }
    }
}

/// Half-open interval `[start, end)` of simulated time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEvent {
    pub start: Ticks,
    pub end: Ticks,
    pub label: EventLabel,
}

impl TraceEvent {
    #[inline]
    #[must_use]
    pub const fn new(start: Ticks, end: Ticks, label: EventLabel) -> Self {
        Self { start, end, label }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}: {}", self.start, self.end, self.label)
    }
}
