/*!
 * Round-Robin Scheduler
 * Quantum-based rotation with arrival-before-requeue ordering
 */

use super::queue::ReadyQueue;
use super::traits::Simulator;
use super::types::{SchedulingPolicy, TimeQuantum};
use crate::core::types::Ticks;
use crate::process::{ProcessRecord, ProcessTable};
use crate::report::timeline::Timeline;
use crate::report::RunReport;
use tracing::{debug, info, instrument, trace};

/// Round-robin scheduler with a fixed quantum
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinScheduler {
    quantum: TimeQuantum,
    switch_cost: Ticks,
}

impl RoundRobinScheduler {
    pub fn new(quantum: TimeQuantum, switch_cost: Ticks) -> Self {
        Self {
            quantum,
            switch_cost,
        }
    }

    #[inline]
    pub fn quantum(&self) -> TimeQuantum {
        self.quantum
    }

    #[inline]
    pub fn switch_cost(&self) -> Ticks {
        self.switch_cost
    }
}

impl Simulator for RoundRobinScheduler {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::RoundRobin
    }

    #[instrument(
        skip_all,
        fields(policy = "round_robin", processes = table.len(), quantum = self.quantum.ticks(), switch_cost = self.switch_cost)
    )]
    fn run(&self, table: &ProcessTable) -> RunReport {
        let quantum = Some(self.quantum.ticks());
        let processes = table.fresh_copy();
        if processes.is_empty() {
            debug!("Empty batch, nothing to simulate");
            return RunReport::empty(self.policy(), quantum);
        }

        let mut run = RoundRobinRun::new(*self, processes);
        run.simulate();

        let report = run.timeline.finish(self.policy(), quantum, &run.processes);
        info!(
            total_time = report.total_time(),
            switches = report.switch_count(),
            mean_turnaround = report.mean_turnaround,
            "Round-robin run complete"
        );
        report
    }
}

/// Mutable state of a single round-robin run
struct RoundRobinRun {
    config: RoundRobinScheduler,
    processes: Vec<ProcessRecord>,
    admitted: Vec<bool>,
    queue: ReadyQueue,
    timeline: Timeline,
    current: Option<usize>,
    quantum_left: Ticks,
    unfinished: usize,
}

impl RoundRobinRun {
    fn new(config: RoundRobinScheduler, processes: Vec<ProcessRecord>) -> Self {
        let count = processes.len();
        Self {
            config,
            processes,
            admitted: vec![false; count],
            queue: ReadyQueue::new(),
            timeline: Timeline::new(),
            current: None,
            quantum_left: 0,
            unfinished: count,
        }
    }

    fn simulate(&mut self) {
        while self.unfinished > 0 {
            self.admit_arrivals();

            if self.current.is_none() {
                if let Some(slot) = self.queue.pop_front() {
                    // Dispatch from idle is free
                    self.dispatch(slot);
                }
            }

            let Some(slot) = self.current else {
                self.timeline.idle();
                continue;
            };

            let process = &mut self.processes[slot];
            self.timeline.execute(process.id);
            self.quantum_left -= 1;
            let finished = process.run_tick(self.timeline.now());

            if finished {
                self.unfinished -= 1;
                debug!(time = self.timeline.now(), pid = process.id, "Process completed");
            } else if self.quantum_left > 0 {
                continue;
            }

            self.switch_out(slot, finished);
        }
    }

    /// Enqueue, in id order, every process that has arrived by now and was
    /// never admitted. Processes arriving inside a switch interval are picked
    /// up by the first check after it.
    fn admit_arrivals(&mut self) {
        let now = self.timeline.now();
        for (slot, process) in self.processes.iter().enumerate() {
            if !self.admitted[slot] && process.arrival <= now {
                self.admitted[slot] = true;
                self.queue.push_back(slot);
                trace!(time = now, pid = process.id, "Process admitted");
            }
        }
    }

    fn dispatch(&mut self, slot: usize) {
        self.current = Some(slot);
        self.quantum_left = self.config.quantum.ticks();
        debug!(
            time = self.timeline.now(),
            pid = self.processes[slot].id,
            "Dispatched"
        );
    }

    /// Hand the CPU on after the running process finished or used up its quantum
    fn switch_out(&mut self, slot: usize, finished: bool) {
        // New arrivals go ahead of the process being requeued
        self.admit_arrivals();

        if self.queue.is_empty() {
            if finished {
                self.current = None;
            } else {
                // Sole runnable process keeps the CPU without a switch
                self.quantum_left = self.config.quantum.ticks();
                trace!(
                    time = self.timeline.now(),
                    pid = self.processes[slot].id,
                    "Quantum renewed"
                );
            }
            return;
        }

        if !finished {
            debug!(
                time = self.timeline.now(),
                pid = self.processes[slot].id,
                "Quantum expired"
            );
            self.queue.push_back(slot);
        }

        if let Some(next) = self.queue.pop_front() {
            self.timeline.context_switch(self.config.switch_cost);
            self.dispatch(next);
        }
    }
}
