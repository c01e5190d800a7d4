/*!
 * Scheduler Module
 * Tick-driven simulation of the supported scheduling disciplines
 */

pub mod priority;
pub mod queue;
pub mod round_robin;
pub mod traits;
pub mod types;

// Re-export public API
pub use priority::PriorityScheduler;
pub use queue::ReadyQueue;
pub use round_robin::RoundRobinScheduler;
pub use traits::Simulator;
pub use types::{SchedulingPolicy, TimeQuantum};
