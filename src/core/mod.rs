/*!
 * Core Module
 * Shared primitive types and errors
 */

pub mod errors;
pub mod types;

pub use errors::{SimError, SimResult};
pub use types::{Pid, Priority, Ticks};
