/*!
 * Input Parser
 * Reads the comma-separated batch description
 *
 * Format:
 * - first line: `nProcesses, quantum, contextSwitchCost`
 * - then `nProcesses` lines of `id, arrivalTime, priority, totalBurst`
 *
 * Whitespace around fields is ignored, blank lines are skipped and
 * anything after the last declared record is ignored.
 */

use crate::core::errors::{SimError, SimResult};
use crate::core::types::{Pid, Priority, Ticks};
use crate::process::{ProcessRecord, ProcessTable};
use crate::scheduler::TimeQuantum;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Parsed batch plus the run parameters from the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationInput {
    pub table: ProcessTable,
    pub quantum: TimeQuantum,
    pub switch_cost: Ticks,
}

/// Read and parse an input file
pub fn load_input(path: &Path) -> SimResult<SimulationInput> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| SimError::io(path.display().to_string(), &e))?;
    let input = parse_input(&text)?;
    info!(
        path = %path.display(),
        processes = input.table.len(),
        quantum = input.quantum.ticks(),
        switch_cost = input.switch_cost,
        "Input loaded"
    );
    Ok(input)
}

/// Parse the textual batch description
pub fn parse_input(text: &str) -> SimResult<SimulationInput> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (line_no, header) = lines.next().unwrap_or((1, ""));
    let malformed_header = || SimError::MalformedHeader {
        line: line_no,
        content: header.to_string(),
    };
    let [count, quantum, switch_cost] = split_fields::<3>(header).ok_or_else(malformed_header)?;
    let count: usize = parse_field(count).ok_or_else(malformed_header)?;
    let quantum: Ticks = parse_field(quantum).ok_or_else(malformed_header)?;
    let switch_cost: Ticks = parse_field(switch_cost).ok_or_else(malformed_header)?;
    let quantum = TimeQuantum::new(quantum)?;

    let mut records = Vec::new();
    for (line_no, line) in lines.by_ref().take(count) {
        records.push(parse_record(line_no, line)?);
    }
    if records.len() < count {
        return Err(SimError::TruncatedInput {
            expected: count,
            found: records.len(),
        });
    }
    debug!(count, "Process records parsed");

    Ok(SimulationInput {
        table: ProcessTable::new(records)?,
        quantum,
        switch_cost,
    })
}

fn parse_record(line_no: usize, line: &str) -> SimResult<ProcessRecord> {
    let malformed = || SimError::MalformedRecord {
        line: line_no,
        content: line.to_string(),
    };
    let [id, arrival, priority, burst] = split_fields::<4>(line).ok_or_else(malformed)?;

    let id: Pid = parse_field(id).ok_or_else(malformed)?;
    let arrival: Ticks = parse_field(arrival).ok_or_else(malformed)?;
    let priority: Priority = parse_field(priority).ok_or_else(malformed)?;
    let burst: Ticks = parse_field(burst).ok_or_else(malformed)?;

    Ok(ProcessRecord::new(id, arrival, priority, burst))
}

/// Exactly `N` comma-separated fields; trailing empty fields are tolerated
fn split_fields<const N: usize>(line: &str) -> Option<[&str; N]> {
    let mut parts = line.split(',').map(str::trim);
    let mut fields = [""; N];
    for field in fields.iter_mut() {
        *field = parts.next()?;
    }
    parts.all(str::is_empty).then_some(fields)
}

fn parse_field<T: FromStr>(field: &str) -> Option<T> {
    field.parse().ok()
}
