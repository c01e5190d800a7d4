/*!
 * Scheduler Traits
 * Interface shared by the simulated scheduling disciplines
 */

use super::types::SchedulingPolicy;
use crate::process::ProcessTable;
use crate::report::RunReport;

/// A scheduling discipline that can simulate a whole batch
///
/// `run` works on its own reset copy of the table, so calling it any
/// number of times on the same table yields identical reports.
pub trait Simulator {
    /// Discipline implemented by this simulator
    fn policy(&self) -> SchedulingPolicy;

    /// Simulate the batch to completion
    fn run(&self, table: &ProcessTable) -> RunReport;
}
