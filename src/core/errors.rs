/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::Pid;
use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

/// Simulation result type
pub type SimResult<T> = Result<T, SimError>;

/// Fatal errors raised while loading input or persisting reports.
///
/// The scheduling core itself never fails; every variant here is detected
/// before a run starts or after it has finished.
#[derive(Error, Debug, Clone, Serialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimError {
    #[error("Input file '{path}' not found")]
    #[diagnostic(
        code(input::not_found),
        help("Create the input file next to the executable or set SCHED_SIM_INPUT.")
    )]
    InputNotFound { path: String },

    #[error("I/O error on '{path}': {message}")]
    #[diagnostic(code(io::failed), help("Check file permissions and available disk space."))]
    Io { path: String, message: String },

    #[error("Malformed header on line {line}: '{content}'")]
    #[diagnostic(
        code(input::malformed_header),
        help("The first line must be three integers: nProcesses, quantum, contextSwitchCost.")
    )]
    MalformedHeader { line: usize, content: String },

    #[error("Malformed process record on line {line}: '{content}'")]
    #[diagnostic(
        code(input::malformed_record),
        help("Each process line must be four integers: id, arrivalTime, priority, totalBurst.")
    )]
    MalformedRecord { line: usize, content: String },

    #[error("Input declares {expected} processes but only {found} records were found")]
    #[diagnostic(
        code(input::truncated),
        help("Add the missing process lines or lower the process count in the header.")
    )]
    TruncatedInput { expected: usize, found: usize },

    #[error("Invalid quantum: {0} (must be at least 1 tick)")]
    #[diagnostic(code(scheduler::invalid_quantum), help("Round-robin needs a positive quantum."))]
    InvalidQuantum(u64),

    #[error("Process {id} has a total burst of 0 ticks")]
    #[diagnostic(
        code(process::invalid_burst),
        help("Every process must require at least one tick of CPU time.")
    )]
    InvalidBurst { id: Pid },

    #[error("Process id {0} appears more than once")]
    #[diagnostic(
        code(process::duplicate_id),
        help("Process ids are the tie-break key and must be unique.")
    )]
    DuplicateId(Pid),
}

impl SimError {
    /// Wrap a std I/O error with the path it occurred on
    pub fn io(path: impl Into<String>, err: &std::io::Error) -> Self {
        let path = path.into();
        if err.kind() == std::io::ErrorKind::NotFound {
            SimError::InputNotFound { path }
        } else {
            SimError::Io {
                path,
                message: err.to_string(),
            }
        }
    }
}
