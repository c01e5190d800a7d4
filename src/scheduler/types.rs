/*!
 * Scheduler Types
 * Domain types for scheduling policies and quanta
 */

use crate::core::errors::SimError;
use crate::core::types::Ticks;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::num::NonZeroU64;

/// Scheduling discipline of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchedulingPolicy {
    /// Static-priority preemptive scheduling
    Priority,
    /// Round-robin with fixed time quantum
    RoundRobin,
}

impl SchedulingPolicy {
    /// Parse from string representation
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "priority" | "prio" => Ok(Self::Priority),
            "round_robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin),
            _ => Err(format!("Invalid policy '{}'. Valid: priority, round_robin", s)),
        }
    }

    /// Convert to string representation
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::RoundRobin => "round_robin",
        }
    }

    /// Name used in report headers
    #[inline]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Priority => "PRIORITY",
            Self::RoundRobin => "ROUND ROBIN",
        }
    }
}

impl Serialize for SchedulingPolicy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SchedulingPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Round-robin time quantum, in ticks (never zero)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(NonZeroU64);

impl TimeQuantum {
    /// Create new time quantum
    pub fn new(ticks: Ticks) -> Result<Self, SimError> {
        NonZeroU64::new(ticks)
            .map(Self)
            .ok_or(SimError::InvalidQuantum(ticks))
    }

    #[inline(always)]
    pub const fn ticks(&self) -> Ticks {
        self.0.get()
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = u64::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}
