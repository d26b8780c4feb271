//! Multilevel feedback queue policy.
//!
//! Every process enters the highest-priority level; a process that exhausts
//! a level's quantum without finishing is demoted one level. There is no
//! aging back upward: a demoted process never returns to a faster level,
//! so long-running work can starve at the bottom under a steady stream of
//! short newcomers. That trade-off is part of this design.
//!
//! # Reference
//! Arpaci-Dusseau & Arpaci-Dusseau (2018), "Operating Systems: Three Easy
//! Pieces", Ch. 8

use std::collections::VecDeque;

use super::{reset_all, SchedulingPolicy};
use crate::models::{Occupant, Process, Timeline};

/// Multilevel feedback queue scheduling.
///
/// Tick-granular: each tick admits newly arrived processes into level 0,
/// selects the lowest-indexed non-empty level, and runs that level's head
/// process for one tick. Finishing removes the process; exhausting the
/// level's quantum demotes it to the tail of the next level (the last
/// level re-enqueues onto itself, yielding round-robin behavior there);
/// otherwise it stays at the head and continues next tick unless a
/// higher-priority level becomes non-empty in the interim.
#[derive(Debug, Clone)]
pub struct MultilevelFeedback {
    quanta: Vec<i64>,
}

impl MultilevelFeedback {
    /// Creates an MLFQ policy from per-level quanta, highest priority first.
    ///
    /// The quanta list must be non-empty and every quantum positive; see
    /// [`crate::validation`].
    pub fn new(quanta: Vec<i64>) -> Self {
        Self { quanta }
    }

    /// The per-level quanta.
    pub fn quanta(&self) -> &[i64] {
        &self.quanta
    }
}

impl SchedulingPolicy for MultilevelFeedback {
    fn name(&self) -> &'static str {
        "MLFQ"
    }

    fn schedule(&self, processes: &mut [Process]) -> Timeline {
        reset_all(processes);
        let mut timeline = Timeline::new();
        if self.quanta.is_empty() {
            return timeline;
        }

        let mut queues: Vec<VecDeque<usize>> = vec![VecDeque::new(); self.quanta.len()];
        let mut current_time = 0;
        let mut completed = 0;

        while completed < processes.len() {
            // Admit arrivals into level 0
            for (idx, process) in processes.iter_mut().enumerate() {
                if process.has_arrived(current_time)
                    && process.remaining_time > 0
                    && !process.enqueued
                {
                    process.enqueued = true;
                    process.current_level = 0;
                    queues[0].push_back(idx);
                }
            }

            let Some(level) = queues.iter().position(|q| !q.is_empty()) else {
                // Nothing queued: fast-forward to the next arrival, or
                // terminate if no future arrivals exist.
                let next_arrival = processes
                    .iter()
                    .filter(|p| p.remaining_time > 0 && p.arrival_time > current_time)
                    .map(|p| p.arrival_time)
                    .min();
                match next_arrival {
                    Some(arrival) => {
                        timeline.push(Occupant::Idle, arrival - current_time);
                        current_time = arrival;
                        continue;
                    }
                    None => break,
                }
            };

            let idx = queues[level][0];
            let process = &mut processes[idx];
            if process.start_time.is_none() {
                process.start_time = Some(current_time);
            }

            process.remaining_time -= 1;
            process.time_at_level += 1;
            current_time += 1;
            timeline.push(Occupant::Process(process.id), 1);

            if process.remaining_time == 0 {
                process.finish_time = Some(current_time);
                queues[level].pop_front();
                completed += 1;
            } else if process.time_at_level >= self.quanta[level] {
                // Demote, capped at the last level
                queues[level].pop_front();
                process.time_at_level = 0;
                let next_level = (level + 1).min(self.quanta.len() - 1);
                process.current_level = next_level;
                queues[next_level].push_back(idx);
            }
        }

        timeline
    }

    fn description(&self) -> &'static str {
        "Multilevel Feedback Queue"
    }
}
