//! Round-robin policy.
//!
//! A FIFO ready queue and a fixed time quantum. On each dispatch the head
//! process runs for `min(quantum, remaining_time)`; unfinished processes
//! re-enter at the tail.
//!
//! # Ordering rule
//! Processes that arrive during an execution slice are enqueued before the
//! preempted process is re-enqueued. A process therefore never cuts in
//! front of work that arrived while it held the CPU.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.4

use std::collections::VecDeque;

use super::{arrival_order, reset_all, SchedulingPolicy};
use crate::models::{Occupant, Process, Timeline};

/// Round-robin scheduling with a fixed time quantum.
///
/// With a quantum no smaller than the longest burst, every process completes
/// in a single slice and the schedule degenerates to FCFS.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a round-robin policy with the given quantum.
    ///
    /// The quantum must be positive; see [`crate::validation`].
    pub fn new(quantum: i64) -> Self {
        Self { quantum }
    }

    /// The configured time quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn schedule(&self, processes: &mut [Process]) -> Timeline {
        reset_all(processes);

        let order = arrival_order(processes);
        let mut ready: VecDeque<usize> = VecDeque::new();
        let mut timeline = Timeline::new();
        let mut current_time = 0;
        let mut next = 0;

        while next < order.len() || !ready.is_empty() {
            while next < order.len() && processes[order[next]].has_arrived(current_time) {
                ready.push_back(order[next]);
                next += 1;
            }

            match ready.pop_front() {
                Some(idx) => {
                    let process = &mut processes[idx];
                    if process.start_time.is_none() {
                        process.start_time = Some(current_time);
                    }

                    let slice = self.quantum.min(process.remaining_time);
                    process.remaining_time -= slice;
                    current_time += slice;
                    timeline.push(Occupant::Process(process.id), slice);

                    let finished = process.remaining_time == 0;
                    if finished {
                        process.finish_time = Some(current_time);
                    }

                    // Admit everything that arrived during the slice before
                    // re-enqueueing the preempted process.
                    while next < order.len() && processes[order[next]].has_arrived(current_time) {
                        ready.push_back(order[next]);
                        next += 1;
                    }
                    if !finished {
                        ready.push_back(idx);
                    }
                }
                None => {
                    timeline.push(Occupant::Idle, 1);
                    current_time += 1;
                }
            }
        }

        timeline
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}
