/*!
 * Input Module
 * Loading the process batch from its textual description
 */

pub mod parser;

pub use parser::{load_input, parse_input, SimulationInput};
