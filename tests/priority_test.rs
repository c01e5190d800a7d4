/*!
 * Priority Scheduler Tests
 * Preemptive static-priority scheduling over complete batches
 */

use pretty_assertions::assert_eq;
use sched_sim::{
    EventLabel, PriorityScheduler, ProcessRecord, ProcessTable, RunReport, Simulator, TraceEvent,
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

fn labels(report: &RunReport) -> Vec<EventLabel> {
    report.events.iter().map(|e| e.label).collect()
}

#[test]
fn test_tie_break_prefers_smallest_id() {
    // Listed out of order; the table sorts by id
    let batch = table(&[(3, 0, 1, 2), (1, 0, 1, 2), (2, 0, 1, 2)]);
    let report = PriorityScheduler::new(1).run(&batch);

    assert_eq!(
        labels(&report),
        vec![
            EventLabel::Process(1),
            EventLabel::Process(1),
            EventLabel::Scheduler,
            EventLabel::Process(2),
            EventLabel::Process(2),
            EventLabel::Scheduler,
            EventLabel::Process(3),
            EventLabel::Process(3),
        ]
    );
    assert_eq!(report.total_time(), 8);
    assert_eq!(report.switch_count(), 2);
}

#[test]
fn test_equal_priority_smaller_id_preempts() {
    let report = PriorityScheduler::new(1).run(&table(&[(2, 0, 3, 3), (1, 1, 3, 1)]));

    // Election runs every tick, so the tie goes to the smaller id on arrival
    assert_eq!(
        labels(&report),
        vec![
            EventLabel::Process(2),
            EventLabel::Scheduler,
            EventLabel::Process(1),
            EventLabel::Scheduler,
            EventLabel::Process(2),
            EventLabel::Process(2),
        ]
    );
}

#[test]
fn test_single_process() {
    let report = PriorityScheduler::new(4).run(&table(&[(1, 0, 0, 5)]));

    assert_eq!(report.switch_count(), 0);
    assert_eq!(report.total_time(), 5);
    assert_eq!(report.mean_turnaround, 5.0);
    assert_eq!(report.overhead_ratio, 0.0);
}

#[test]
fn test_two_processes_with_switch_cost() {
    let report = PriorityScheduler::new(1).run(&table(&[(1, 0, 1, 4), (2, 0, 2, 4)]));

    assert_eq!(report.total_time(), 9);
    assert_eq!(report.switch_count(), 1);
    assert_eq!(report.events[4], TraceEvent::new(4, 5, EventLabel::Scheduler));
    assert_eq!(report.mean_turnaround, 6.5);
    assert!((report.overhead_ratio - 1.0 / 9.0).abs() < 1e-12);
}

#[test]
fn test_idle_gap_between_processes() {
    let report = PriorityScheduler::new(1).run(&table(&[(1, 0, 0, 1), (2, 3, 0, 1)]));

    assert_eq!(
        report.events,
        vec![
            TraceEvent::new(0, 1, EventLabel::Process(1)),
            TraceEvent::new(1, 2, EventLabel::Idle),
            TraceEvent::new(2, 3, EventLabel::Idle),
            TraceEvent::new(3, 4, EventLabel::Scheduler),
            TraceEvent::new(4, 5, EventLabel::Process(2)),
        ]
    );
    assert_eq!(report.totals.idle_ticks, 2);
    assert_eq!(report.outcome(2).unwrap().turnaround, 2);
}

#[test]
fn test_zero_switch_cost_counts_switches_without_overhead() {
    let report = PriorityScheduler::new(0).run(&table(&[(1, 0, 2, 2), (2, 1, 1, 1)]));

    assert_eq!(report.switch_count(), 2);
    assert_eq!(report.totals.switch_ticks, 0);
    assert_eq!(report.total_time(), 3);
    assert_eq!(report.overhead_ratio, 0.0);
}

#[test]
fn test_rerun_on_same_table_is_identical() {
    let batch = table(&[(1, 0, 3, 4), (2, 2, 1, 3), (3, 5, 2, 2), (4, 1, 1, 2)]);
    let scheduler = PriorityScheduler::new(2);

    let first = scheduler.run(&batch);
    let second = scheduler.run(&batch);
    assert_eq!(first, second);
    assert!(batch.records().iter().all(|p| p.remaining() == p.burst));
}
