/*!
 * CPU Scheduling Simulator - Main Entry Point
 *
 * Reads the process batch, simulates preemptive priority and round-robin
 * scheduling, and writes both reports to the output artifact.
 */

use sched_sim::{init_tracing, run_from_config, SimConfig};
use tracing::info;

fn main() -> miette::Result<()> {
    init_tracing();

    let config = SimConfig::from_env();
    info!(
        input = %config.input.display(),
        output = %config.output.display(),
        "Scheduling simulator starting"
    );

    let outcome = run_from_config(&config)?;

    info!(
        priority_time = outcome.priority.total_time(),
        round_robin_time = outcome.round_robin.total_time(),
        "Simulation complete, results saved to {}",
        config.output.display()
    );
    Ok(())
}
