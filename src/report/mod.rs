/*!
 * Report Module
 * Run timelines, aggregate statistics and their text rendering
 */

pub mod format;
pub mod run_report;
pub(crate) mod timeline;
pub mod trace;

pub use format::{format_report, format_reports};
pub use run_report::{ProcessOutcome, RunReport, RunTotals};
pub use trace::{EventLabel, TraceEvent};
