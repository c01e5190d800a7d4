/*!
 * Round-Robin Scheduler Tests
 * Quantum rotation, arrival ordering and switch accounting
 */

use pretty_assertions::assert_eq;
use sched_sim::{
    EventLabel, ProcessRecord, ProcessTable, RoundRobinScheduler, RunReport, Simulator,
    TimeQuantum, TraceEvent,
};

fn table(records: &[(u32, u64, i32, u64)]) -> ProcessTable {
    ProcessTable::new(
        records
            .iter()
            .map(|&(id, arrival, priority, burst)| ProcessRecord::new(id, arrival, priority, burst))
            .collect(),
    )
    .unwrap()
}

fn round_robin(quantum: u64, switch_cost: u64) -> RoundRobinScheduler {
    RoundRobinScheduler::new(TimeQuantum::new(quantum).unwrap(), switch_cost)
}

fn labels(report: &RunReport) -> Vec<EventLabel> {
    report.events.iter().map(|e| e.label).collect()
}

#[test]
fn test_two_equal_processes_quantum_two() {
    let report = round_robin(2, 1).run(&table(&[(1, 0, 1, 4), (2, 0, 2, 4)]));

    assert_eq!(
        report.events,
        vec![
            TraceEvent::new(0, 1, EventLabel::Process(1)),
            TraceEvent::new(1, 2, EventLabel::Process(1)),
            TraceEvent::new(2, 3, EventLabel::Scheduler),
            TraceEvent::new(3, 4, EventLabel::Process(2)),
            TraceEvent::new(4, 5, EventLabel::Process(2)),
            TraceEvent::new(5, 6, EventLabel::Scheduler),
            TraceEvent::new(6, 7, EventLabel::Process(1)),
            TraceEvent::new(7, 8, EventLabel::Process(1)),
            TraceEvent::new(8, 9, EventLabel::Scheduler),
            TraceEvent::new(9, 10, EventLabel::Process(2)),
            TraceEvent::new(10, 11, EventLabel::Process(2)),
        ]
    );
    // Handing the CPU over after process 1 completes is a switch too
    assert_eq!(report.switch_count(), 3);
    assert_eq!(report.total_time(), 11);
    assert_eq!(report.mean_turnaround, 9.5);
}

#[test]
fn test_arrival_at_quantum_expiry_runs_before_preempted() {
    let report = round_robin(2, 1).run(&table(&[(1, 0, 0, 3), (2, 2, 0, 1)]));

    assert_eq!(
        labels(&report),
        vec![
            EventLabel::Process(1),
            EventLabel::Process(1),
            EventLabel::Scheduler,
            EventLabel::Process(2),
            EventLabel::Scheduler,
            EventLabel::Process(1),
        ]
    );
    assert_eq!(report.outcome(2).unwrap().completion, 4);
    assert_eq!(report.outcome(1).unwrap().completion, 6);
}

#[test]
fn test_arrivals_enqueued_in_id_order() {
    let report = round_robin(1, 0).run(&table(&[(3, 0, 0, 1), (1, 0, 0, 1), (2, 0, 0, 1)]));

    let order: Vec<_> = labels(&report)
        .into_iter()
        .filter_map(|l| match l {
            EventLabel::Process(pid) => Some(pid),
            _ => None,
        })
        .collect();
    assert_eq!(order, vec![1, 2, 3]);
}

#[test]
fn test_single_process() {
    let report = round_robin(2, 5).run(&table(&[(1, 0, 9, 5)]));

    assert_eq!(report.switch_count(), 0);
    assert_eq!(report.total_time(), 5);
    assert_eq!(report.mean_turnaround, 5.0);
    assert_eq!(report.quantum, Some(2));
}

#[test]
fn test_cpu_goes_idle_after_completion() {
    let report = round_robin(4, 1).run(&table(&[(1, 0, 0, 2), (2, 4, 0, 1)]));

    assert_eq!(
        report.events,
        vec![
            TraceEvent::new(0, 1, EventLabel::Process(1)),
            TraceEvent::new(1, 2, EventLabel::Process(1)),
            TraceEvent::new(2, 3, EventLabel::Idle),
            TraceEvent::new(3, 4, EventLabel::Idle),
            TraceEvent::new(4, 5, EventLabel::Process(2)),
        ]
    );
    assert_eq!(report.switch_count(), 0);
}

#[test]
fn test_long_switch_window_admits_all_arrivals() {
    let batch = table(&[(1, 0, 0, 1), (2, 0, 0, 1), (3, 2, 0, 1), (4, 3, 0, 1)]);
    let report = round_robin(1, 3).run(&batch);

    assert_eq!(report.processes.len(), 4);
    assert!(report.processes.iter().all(|p| p.completion > 0));
    assert_eq!(report.totals.busy_ticks, 4);
    assert_eq!(
        report.total_time(),
        report.totals.busy_ticks + report.totals.idle_ticks + report.totals.switch_ticks
    );
}

#[test]
fn test_priorities_are_ignored() {
    let report = round_robin(10, 1).run(&table(&[(1, 0, 9, 2), (2, 0, 0, 2)]));
    assert_eq!(report.events[0].label, EventLabel::Process(1));
}

#[test]
fn test_rerun_on_same_table_is_identical() {
    let batch = table(&[(1, 0, 3, 4), (2, 2, 1, 3), (3, 5, 2, 2), (4, 1, 1, 2)]);
    let scheduler = round_robin(2, 1);
    assert_eq!(scheduler.run(&batch), scheduler.run(&batch));
}
