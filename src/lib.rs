/*!
 * CPU Scheduling Simulator Library
 * Deterministic tick-driven simulation of preemptive priority and
 * round-robin scheduling over a static batch of processes
 */

pub mod config;
pub mod core;
pub mod input;
pub mod monitoring;
pub mod process;
pub mod report;
pub mod scheduler;
pub mod simulation;

// Re-exports
pub use config::SimConfig;
pub use crate::core::{Pid, Priority, SimError, SimResult, Ticks};
pub use input::{load_input, parse_input, SimulationInput};
pub use monitoring::init_tracing;
pub use process::{ProcessRecord, ProcessTable};
pub use report::{
    format_report, format_reports, EventLabel, ProcessOutcome, RunReport, RunTotals, TraceEvent,
};
pub use scheduler::{
    PriorityScheduler, ReadyQueue, RoundRobinScheduler, SchedulingPolicy, Simulator, TimeQuantum,
};
pub use simulation::{run_from_config, Simulation, SimulationOutcome};
