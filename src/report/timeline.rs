/*!
 * Run Timeline
 * Clock and event recorder shared by both schedulers
 */

use super::run_report::{RunReport, RunTotals};
use super::trace::{EventLabel, TraceEvent};
use crate::core::types::{Pid, Ticks};
use crate::process::ProcessRecord;
use crate::scheduler::types::SchedulingPolicy;
use tracing::trace;

/// Mutable state of one run's clock
///
/// Every advance of `time` goes through one of the three recording methods,
/// so `time == busy + idle + switch ticks` always holds.
#[derive(Debug, Default)]
pub(crate) struct Timeline {
    time: Ticks,
    events: Vec<TraceEvent>,
    totals: RunTotals,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now(&self) -> Ticks {
        self.time
    }

    /// Run `pid` for one tick
    pub fn execute(&mut self, pid: Pid) {
        self.push(1, EventLabel::Process(pid));
        self.totals.busy_ticks += 1;
    }

    /// One tick with nothing runnable
    pub fn idle(&mut self) {
        self.push(1, EventLabel::Idle);
        self.totals.idle_ticks += 1;
    }

    /// Charge a context switch; a zero cost still counts as a switch
    pub fn context_switch(&mut self, cost: Ticks) {
        self.push(cost, EventLabel::Scheduler);
        self.totals.switch_count += 1;
        self.totals.switch_ticks += cost;
    }

    fn push(&mut self, length: Ticks, label: EventLabel) {
        let event = TraceEvent::new(self.time, self.time + length, label);
        trace!(%event, "timeline");
        self.events.push(event);
        self.time += length;
    }

    /// Close the run and assemble its report
    pub fn finish(
        self,
        policy: SchedulingPolicy,
        quantum: Option<Ticks>,
        processes: &[ProcessRecord],
    ) -> RunReport {
        let totals = RunTotals {
            total_time: self.time,
            ..self.totals
        };
        RunReport::assemble(policy, quantum, self.events, totals, processes)
    }
}
