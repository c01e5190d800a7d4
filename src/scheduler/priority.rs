/*!
 * Preemptive Priority Scheduler
 * Re-elects the most urgent eligible process on every tick
 */

use super::traits::Simulator;
use super::types::SchedulingPolicy;
use crate::core::types::Ticks;
use crate::process::{ProcessRecord, ProcessTable};
use crate::report::timeline::Timeline;
use crate::report::RunReport;
use tracing::{debug, info, instrument};

/// Static-priority preemptive scheduler
///
/// Lower `priority` values win; ties go to the smaller id. A newly elected
/// process costs one context switch, except when the very first election
/// happens at tick 0.
#[derive(Debug, Clone, Copy)]
pub struct PriorityScheduler {
    switch_cost: Ticks,
}

impl PriorityScheduler {
    pub fn new(switch_cost: Ticks) -> Self {
        Self { switch_cost }
    }

    #[inline]
    pub fn switch_cost(&self) -> Ticks {
        self.switch_cost
    }
}

/// Slot of the most urgent eligible process at `time`
///
/// `processes` is id-ordered and `min_by_key` keeps the first minimum, so
/// equal priorities resolve to the smallest id.
fn elect(processes: &[ProcessRecord], time: Ticks) -> Option<usize> {
    processes
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_eligible(time))
        .min_by_key(|(_, p)| p.priority)
        .map(|(slot, _)| slot)
}

impl Simulator for PriorityScheduler {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::Priority
    }

    #[instrument(skip_all, fields(policy = "priority", processes = table.len(), switch_cost = self.switch_cost))]
    fn run(&self, table: &ProcessTable) -> RunReport {
        let mut processes = table.fresh_copy();
        if processes.is_empty() {
            debug!("Empty batch, nothing to simulate");
            return RunReport::empty(self.policy(), None);
        }

        let mut timeline = Timeline::new();
        let mut current: Option<usize> = None;
        let mut unfinished = processes.len();

        while unfinished > 0 {
            let now = timeline.now();
            let Some(slot) = elect(&processes, now) else {
                timeline.idle();
                continue;
            };

            if current != Some(slot) {
                if let Some(prev) = current {
                    if !processes[prev].is_finished() {
                        debug!(
                            time = now,
                            preempted = processes[prev].id,
                            by = processes[slot].id,
                            "Process preempted"
                        );
                    }
                }
                if current.is_some() || now > 0 {
                    timeline.context_switch(self.switch_cost);
                }
                debug!(time = timeline.now(), pid = processes[slot].id, "Dispatched");
                current = Some(slot);
            }

            let process = &mut processes[slot];
            timeline.execute(process.id);
            if process.run_tick(timeline.now()) {
                unfinished -= 1;
                debug!(time = timeline.now(), pid = process.id, "Process completed");
            }
        }

        let report = timeline.finish(self.policy(), None, &processes);
        info!(
            total_time = report.total_time(),
            switches = report.switch_count(),
            mean_turnaround = report.mean_turnaround,
            "Priority run complete"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{EventLabel, TraceEvent};

    fn table(records: &[(u32, u64, i32, u64)]) -> ProcessTable {
        ProcessTable::new(
            records
                .iter()
                .map(|&(id, arrival, priority, burst)| {
                    ProcessRecord::new(id, arrival, priority, burst)
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_elect_prefers_lower_value_then_lower_id() {
        let t = table(&[(1, 0, 3, 1), (2, 0, 1, 1), (3, 0, 1, 1)]);
        assert_eq!(elect(t.records(), 0), Some(1));
    }

    #[test]
    fn test_elect_ignores_future_arrivals() {
        let t = table(&[(1, 0, 5, 1), (2, 4, 0, 1)]);
        assert_eq!(elect(t.records(), 3), Some(0));
        assert_eq!(elect(t.records(), 4), Some(1));
    }

    #[test]
    fn test_preemption_on_arrival() {
        let report = PriorityScheduler::new(1).run(&table(&[(1, 0, 5, 3), (2, 1, 1, 1)]));

        assert_eq!(
            report.events,
            vec![
                TraceEvent::new(0, 1, EventLabel::Process(1)),
                TraceEvent::new(1, 2, EventLabel::Scheduler),
                TraceEvent::new(2, 3, EventLabel::Process(2)),
                TraceEvent::new(3, 4, EventLabel::Scheduler),
                TraceEvent::new(4, 5, EventLabel::Process(1)),
                TraceEvent::new(5, 6, EventLabel::Process(1)),
            ]
        );
        assert_eq!(report.switch_count(), 2);
        assert_eq!(report.outcome(2).unwrap().completion, 3);
        assert_eq!(report.outcome(1).unwrap().completion, 6);
    }

    #[test]
    fn test_late_first_arrival_charges_switch() {
        let report = PriorityScheduler::new(2).run(&table(&[(1, 2, 0, 1)]));

        assert_eq!(
            report.events,
            vec![
                TraceEvent::new(0, 1, EventLabel::Idle),
                TraceEvent::new(1, 2, EventLabel::Idle),
                TraceEvent::new(2, 4, EventLabel::Scheduler),
                TraceEvent::new(4, 5, EventLabel::Process(1)),
            ]
        );
        assert_eq!(report.totals.idle_ticks, 2);
        assert_eq!(report.totals.switch_ticks, 2);
    }

    #[test]
    fn test_empty_batch() {
        let report = PriorityScheduler::new(1).run(&ProcessTable::default());
        assert_eq!(report, RunReport::empty(SchedulingPolicy::Priority, None));
    }
}
