/*!
 * Run Report
 * Aggregate statistics and event trace of one scheduler run
 */

use super::trace::TraceEvent;
use crate::core::types::{Pid, Priority, Ticks};
use crate::process::ProcessRecord;
use crate::scheduler::types::SchedulingPolicy;
use serde::{Deserialize, Serialize};

/// Time accounting of a run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunTotals {
    pub total_time: Ticks,
    pub switch_count: u64,
    pub switch_ticks: Ticks,
    pub busy_ticks: Ticks,
    pub idle_ticks: Ticks,
}

/// Per-process result of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    pub id: Pid,
    pub arrival: Ticks,
    pub priority: Priority,
    pub burst: Ticks,
    pub completion: Ticks,
    pub turnaround: Ticks,
    /// Turnaround minus burst: time spent ready, idle-blocked or switching
    pub waiting: Ticks,
}

/// Immutable result of one scheduler run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub policy: SchedulingPolicy,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub quantum: Option<Ticks>,
    pub events: Vec<TraceEvent>,
    #[serde(flatten)]
    pub totals: RunTotals,
    pub mean_turnaround: f64,
    pub overhead_ratio: f64,
    pub processes: Vec<ProcessOutcome>,
}

impl RunReport {
    /// Report of a run over an empty batch
    pub fn empty(policy: SchedulingPolicy, quantum: Option<Ticks>) -> Self {
        Self::assemble(policy, quantum, Vec::new(), RunTotals::default(), &[])
    }

    /// Compute aggregates from the finished process list and run totals
    pub fn assemble(
        policy: SchedulingPolicy,
        quantum: Option<Ticks>,
        events: Vec<TraceEvent>,
        totals: RunTotals,
        processes: &[ProcessRecord],
    ) -> Self {
        let outcomes: Vec<ProcessOutcome> = processes
            .iter()
            .map(|p| {
                debug_assert!(p.is_finished(), "process {} unfinished at report time", p.id);
                let turnaround = p.turnaround().unwrap_or_default();
                ProcessOutcome {
                    id: p.id,
                    arrival: p.arrival,
                    priority: p.priority,
                    burst: p.burst,
                    completion: p.completion().unwrap_or_default(),
                    turnaround,
                    waiting: turnaround.saturating_sub(p.burst),
                }
            })
            .collect();

        let mean_turnaround = if outcomes.is_empty() {
            0.0
        } else {
            let sum: Ticks = outcomes.iter().map(|o| o.turnaround).sum();
            sum as f64 / outcomes.len() as f64
        };

        let overhead_ratio = if totals.total_time > 0 {
            totals.switch_ticks as f64 / totals.total_time as f64
        } else {
            0.0
        };

        Self {
            policy,
            quantum,
            events,
            totals,
            mean_turnaround,
            overhead_ratio,
            processes: outcomes,
        }
    }

    #[inline]
    pub fn total_time(&self) -> Ticks {
        self.totals.total_time
    }

    #[inline]
    pub fn switch_count(&self) -> u64 {
        self.totals.switch_count
    }

    #[inline]
    pub fn overhead_percent(&self) -> f64 {
        self.overhead_ratio * 100.0
    }

    /// Outcome for a single process id
    pub fn outcome(&self, id: Pid) -> Option<&ProcessOutcome> {
        self.processes.iter().find(|o| o.id == id)
    }
}
