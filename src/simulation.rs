/*!
 * Simulation Driver
 * Runs both disciplines over one batch and persists their reports
 */

use crate::config::SimConfig;
use crate::core::errors::{SimError, SimResult};
use crate::input::{load_input, SimulationInput};
use crate::report::{format_reports, RunReport};
use crate::scheduler::{PriorityScheduler, RoundRobinScheduler, Simulator};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, instrument, warn};

/// Both reports of a simulation, priority first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub priority: RunReport,
    pub round_robin: RunReport,
}

impl SimulationOutcome {
    /// Combined text artifact
    pub fn render(&self) -> String {
        format_reports([&self.priority, &self.round_robin])
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// One batch and the parameters to simulate it with
#[derive(Debug, Clone)]
pub struct Simulation {
    input: SimulationInput,
}

impl Simulation {
    pub fn new(input: SimulationInput) -> Self {
        Self { input }
    }

    pub fn priority_scheduler(&self) -> PriorityScheduler {
        PriorityScheduler::new(self.input.switch_cost)
    }

    pub fn round_robin_scheduler(&self) -> RoundRobinScheduler {
        RoundRobinScheduler::new(self.input.quantum, self.input.switch_cost)
    }

    /// Run both schedulers, each on its own reset copy of the batch
    #[instrument(skip_all, fields(processes = self.input.table.len()))]
    pub fn run(&self) -> SimulationOutcome {
        if self.input.table.is_empty() {
            warn!("Batch has no processes, reports will be empty");
        }

        let priority = self.priority_scheduler();
        let round_robin = self.round_robin_scheduler();
        info!(
            priority_switch_cost = priority.switch_cost(),
            quantum = round_robin.quantum().ticks(),
            round_robin_switch_cost = round_robin.switch_cost(),
            "Running schedulers"
        );

        let table = &self.input.table;
        SimulationOutcome {
            priority: priority.run(table),
            round_robin: round_robin.run(table),
        }
    }
}

/// Load the configured input, simulate, and write every configured artifact
pub fn run_from_config(config: &SimConfig) -> SimResult<SimulationOutcome> {
    let input = load_input(&config.input)?;
    let outcome = Simulation::new(input).run();

    write_artifact(&config.output, &outcome.render())?;
    info!(path = %config.output.display(), "Text report written");

    if let Some(path) = &config.json_output {
        let json = outcome.to_json().map_err(|e| SimError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        write_artifact(path, &json)?;
        info!(path = %path.display(), "JSON report written");
    }

    Ok(outcome)
}

fn write_artifact(path: &Path, contents: &str) -> SimResult<()> {
    std::fs::write(path, contents).map_err(|e| SimError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
