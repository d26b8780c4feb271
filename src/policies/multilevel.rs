//! Static multilevel queue policy.
//!
//! Processes are partitioned into fixed queues by their `queue_id`; queues
//! are served under strict priority (queue 0 first, always), each with its
//! own discipline. A lower-indexed queue with runnable work starves every
//! queue below it; that is the point of the design, not a defect.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.5

use super::{reset_all, LevelConfig, QueueDiscipline, SchedulingPolicy};
use crate::models::{Occupant, Process, Timeline};

/// Static multilevel queue scheduling with strict queue priority.
///
/// Each process carries a 1-based `queue_id`, clamped into the configured
/// range. At every decision point the lowest-indexed queue holding an
/// arrived, unfinished process wins; within the winning queue the earliest
/// arrival is selected, and the queue's discipline decides the run-chunk
/// length: one tick for [`QueueDiscipline::Srtf`], one quantum for
/// [`QueueDiscipline::RoundRobin`], the full remaining burst otherwise.
/// After every chunk the scan restarts at queue 0, which is what gives
/// higher-priority queues their dominance.
#[derive(Debug, Clone)]
pub struct MultilevelQueue {
    levels: Vec<LevelConfig>,
}

impl MultilevelQueue {
    /// Creates a multilevel queue policy from per-level configuration,
    /// highest priority first.
    ///
    /// The level list must be non-empty and every round-robin level needs a
    /// positive quantum; see [`crate::validation`].
    pub fn new(levels: Vec<LevelConfig>) -> Self {
        Self { levels }
    }

    /// The per-level configuration.
    pub fn levels(&self) -> &[LevelConfig] {
        &self.levels
    }

    /// Bucket index for a process: 1-based `queue_id` clamped into range.
    fn bucket_index(&self, process: &Process) -> usize {
        process.queue_id.saturating_sub(1).min(self.levels.len() - 1)
    }
}

impl SchedulingPolicy for MultilevelQueue {
    fn name(&self) -> &'static str {
        "MQ"
    }

    fn schedule(&self, processes: &mut [Process]) -> Timeline {
        reset_all(processes);
        let mut timeline = Timeline::new();
        if self.levels.is_empty() {
            return timeline;
        }

        // Partition into buckets, each pre-sorted by arrival time.
        let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); self.levels.len()];
        for (idx, process) in processes.iter().enumerate() {
            buckets[self.bucket_index(process)].push(idx);
        }
        for bucket in &mut buckets {
            bucket.sort_by_key(|&i| processes[i].arrival_time);
        }

        let mut current_time = 0;
        let mut completed = 0;

        while completed < processes.len() {
            let selected = buckets.iter().zip(&self.levels).find_map(|(bucket, config)| {
                bucket
                    .iter()
                    .find(|&&i| {
                        processes[i].has_arrived(current_time) && processes[i].remaining_time > 0
                    })
                    .map(|&i| (i, config))
            });

            match selected {
                Some((idx, config)) => {
                    let process = &mut processes[idx];
                    if process.start_time.is_none() {
                        process.start_time = Some(current_time);
                    }

                    let chunk = match config.discipline {
                        QueueDiscipline::Srtf => 1,
                        QueueDiscipline::RoundRobin => {
                            // Quantum presence is validated upstream; a
                            // missing value falls back to single ticks.
                            config.quantum.unwrap_or(1).min(process.remaining_time)
                        }
                        QueueDiscipline::Fcfs | QueueDiscipline::Sjf => process.remaining_time,
                    };

                    process.remaining_time -= chunk;
                    current_time += chunk;
                    timeline.push(Occupant::Process(process.id), chunk);

                    if process.remaining_time == 0 {
                        process.finish_time = Some(current_time);
                        completed += 1;
                    }
                }
                None => {
                    // Nothing runnable: fast-forward to the next arrival,
                    // or terminate if no future arrivals exist.
                    let next_arrival = processes
                        .iter()
                        .filter(|p| p.remaining_time > 0 && p.arrival_time > current_time)
                        .map(|p| p.arrival_time)
                        .min();
                    match next_arrival {
                        Some(arrival) => {
                            timeline.push(Occupant::Idle, arrival - current_time);
                            current_time = arrival;
                        }
                        None => break,
                    }
                }
            }
        }

        timeline
    }

    fn description(&self) -> &'static str {
        "Static Multilevel Queue"
    }
}
