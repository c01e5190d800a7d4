/*!
 * Report Formatting
 * Textual rendering of run reports
 */

use super::run_report::RunReport;
use crate::scheduler::types::SchedulingPolicy;

const SEPARATOR: &str = "----------------------------------";

/// Header line naming the algorithm
pub fn header(report: &RunReport) -> String {
    match (report.policy, report.quantum) {
        (SchedulingPolicy::RoundRobin, Some(quantum)) => {
            format!("***** ALGORITHM: ROUND ROBIN (Quantum: {}) *****", quantum)
        }
        (policy, _) => format!("***** ALGORITHM: {} *****", policy.title()),
    }
}

/// Render one report: header, one line per event, statistics block
pub fn format_report(report: &RunReport) -> String {
    let mut out = String::with_capacity(32 * (report.events.len() + 8));

    out.push_str(&header(report));
    out.push('\n');
    for event in &report.events {
        out.push_str(&event.to_string());
        out.push('\n');
    }
    out.push_str(&statistics(report));

    out
}

/// Separator plus the aggregate statistics lines
fn statistics(report: &RunReport) -> String {
    format!(
        "{}\nTotal simulation time: {}\nContext switches: {}\nMean turnaround time: {:.2}\nOverhead: {:.4} ({:.2}%)\n",
        SEPARATOR,
        report.total_time(),
        report.switch_count(),
        report.mean_turnaround,
        report.overhead_ratio,
        report.overhead_percent()
    )
}

/// Concatenate reports in order, separated by two blank lines
pub fn format_reports<'a>(reports: impl IntoIterator<Item = &'a RunReport>) -> String {
    reports
        .into_iter()
        .map(format_report)
        .collect::<Vec<_>>()
        .join("\n\n")
}
