//! Random workload generation.
//!
//! Produces reproducible process sets for tests and experiments: pass a
//! seeded RNG and the same spec to get the same workload. Generated sets
//! always satisfy the validation contract (positive bursts, non-negative
//! arrivals and priorities, unique ids).

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Shape of a randomly generated process set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadSpec {
    /// Number of processes to generate.
    pub count: usize,
    /// Arrivals are drawn uniformly from `0..=max_arrival`.
    pub max_arrival: i64,
    /// Bursts are drawn uniformly from `min_burst..=max_burst`.
    pub min_burst: i64,
    /// Upper bound of the burst range.
    pub max_burst: i64,
    /// Priorities are drawn uniformly from `0..=max_priority`.
    pub max_priority: i32,
    /// Queue ids are drawn uniformly from `1..=num_queues`.
    pub num_queues: usize,
}

impl WorkloadSpec {
    /// Creates a spec for `count` processes with modest default ranges:
    /// arrivals in `0..=10`, bursts in `1..=10`, priorities in `0..=4`,
    /// a single queue.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
            max_priority: 4,
            num_queues: 1,
        }
    }

    /// Sets the arrival window `0..=max_arrival`.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the burst range `min..=max`. Bounds below 1 are raised to 1.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.min_burst = min.max(1);
        self.max_burst = max.max(self.min_burst);
        self
    }

    /// Sets the priority range `0..=max_priority`.
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority.max(0);
        self
    }

    /// Sets the queue-id range `1..=num_queues`.
    pub fn with_num_queues(mut self, num_queues: usize) -> Self {
        self.num_queues = num_queues.max(1);
        self
    }
}

/// Generates a process set from the spec, ids assigned `1..=count` in
/// generation order.
pub fn generate<R: Rng>(spec: &WorkloadSpec, rng: &mut R) -> Vec<Process> {
    (1..=spec.count)
        .map(|id| {
            Process::new(
                id as u32,
                rng.random_range(0..=spec.max_arrival),
                rng.random_range(spec.min_burst..=spec.max_burst),
            )
            .with_priority(rng.random_range(0..=spec.max_priority))
            .with_queue_id(rng.random_range(1..=spec.num_queues))
        })
        .collect()
}
