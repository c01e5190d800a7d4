/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type
pub type Pid = u32;

/// Simulated time, in ticks since the start of a run
pub type Ticks = u64;

/// Static priority level (lower value is scheduled first, may be negative)
pub type Priority = i32;
