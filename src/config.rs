/*!
 * Simulation Configuration
 *
 * Fixed artifact names with environment overrides:
 * - SCHED_SIM_INPUT: process batch to read (default: processes.txt)
 * - SCHED_SIM_OUTPUT: text report to write (default: results.txt)
 * - SCHED_SIM_JSON: optional JSON report path (default: unset)
 */

use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "processes.txt";
pub const DEFAULT_OUTPUT: &str = "results.txt";

pub const ENV_INPUT: &str = "SCHED_SIM_INPUT";
pub const ENV_OUTPUT: &str = "SCHED_SIM_OUTPUT";
pub const ENV_JSON: &str = "SCHED_SIM_JSON";

/// Where the simulator reads and writes its artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub json_output: Option<PathBuf>,
}

impl SimConfig {
    /// Default artifact names in the working directory
    pub fn new() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            json_output: None,
        }
    }

    /// Defaults overridden by environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::new();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            input: non_empty(ENV_INPUT).map(PathBuf::from).unwrap_or(defaults.input),
            output: non_empty(ENV_OUTPUT).map(PathBuf::from).unwrap_or(defaults.output),
            json_output: non_empty(ENV_JSON).map(PathBuf::from),
        }
    }

    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_json_output(mut self, json_output: impl Into<PathBuf>) -> Self {
        self.json_output = Some(json_output.into());
        self
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}
