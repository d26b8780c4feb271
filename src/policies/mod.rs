//! Scheduling policies and policy configuration.
//!
//! One trait, eight implementations: FCFS, SJF, SRTF, priority, preemptive
//! priority, round robin, static multilevel queue, and multilevel feedback
//! queue. Each consumes a process set, produces a [`Timeline`], and fills in
//! the processes' timing fields as a side effect.
//!
//! # Usage
//!
//! ```
//! use cpu_sched::models::Process;
//! use cpu_sched::policies::{PolicyConfig, SchedulingPolicy};
//!
//! let mut processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
//! let policy = PolicyConfig::Fcfs.build();
//! let timeline = policy.schedule(&mut processes);
//! assert_eq!(timeline.makespan(), 8);
//! ```
//!
//! # Determinism
//!
//! All policies are deterministic: key ties in the non-preemptive family
//! preserve input order (stable sort), and the preemptive ready heaps break
//! ties by earliest arrival, then lowest id. Re-running a policy on an
//! unchanged input produces an identical timeline and identical metrics.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

mod batch;
mod mlfq;
mod multilevel;
mod preemptive;
mod round_robin;

pub use batch::{Fcfs, Priority, Sjf};
pub use mlfq::MultilevelFeedback;
pub use multilevel::MultilevelQueue;
pub use preemptive::{PreemptivePriority, Srtf};
pub use round_robin::RoundRobin;

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::models::{Process, Timeline};

/// A CPU scheduling policy.
///
/// # Contract
/// `schedule` runs the whole simulation: every process ends with
/// `remaining_time == 0` and `finish_time` set, idle gaps are recorded as
/// idle segments, and segments are appended in non-decreasing time order.
/// Mutable simulation state is reset on entry, so a policy may be applied
/// repeatedly to the same process set.
///
/// Input validity (unique ids, non-negative arrivals, positive bursts) is
/// the caller's responsibility; see [`crate::validation`].
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "FCFS", "SRTF").
    fn name(&self) -> &'static str;

    /// Simulates the process set, returning the execution timeline and
    /// mutating each process's timing fields.
    fn schedule(&self, processes: &mut [Process]) -> Timeline;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Per-queue discipline for the static multilevel queue policy.
///
/// The discipline controls how long the selected process runs before the
/// cross-queue scan restarts: one tick for `Srtf`, one quantum for
/// `RoundRobin`, the full remaining burst otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueDiscipline {
    /// Run-to-completion in arrival order.
    Fcfs,
    /// Run-to-completion in arrival order (selection is arrival-driven;
    /// see [`MultilevelQueue`]).
    Sjf,
    /// Single-tick chunks, emulating preemptiveness within the queue.
    Srtf,
    /// Quantum-bounded chunks.
    #[serde(rename = "rr")]
    RoundRobin,
}

/// Configuration of one static multilevel queue level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Discipline applied within this level.
    pub discipline: QueueDiscipline,
    /// Time quantum; required when the discipline is [`QueueDiscipline::RoundRobin`].
    #[serde(default)]
    pub quantum: Option<i64>,
}

impl LevelConfig {
    /// Creates an FCFS level.
    pub fn fcfs() -> Self {
        Self {
            discipline: QueueDiscipline::Fcfs,
            quantum: None,
        }
    }

    /// Creates an SJF level.
    pub fn sjf() -> Self {
        Self {
            discipline: QueueDiscipline::Sjf,
            quantum: None,
        }
    }

    /// Creates an SRTF level.
    pub fn srtf() -> Self {
        Self {
            discipline: QueueDiscipline::Srtf,
            quantum: None,
        }
    }

    /// Creates a round-robin level with the given quantum.
    pub fn round_robin(quantum: i64) -> Self {
        Self {
            discipline: QueueDiscipline::RoundRobin,
            quantum: Some(quantum),
        }
    }
}

/// Enumerated policy selection with per-policy configuration.
///
/// This is the algorithm half of the Input Collector contract: it
/// deserializes directly from scenario data and builds the corresponding
/// policy value.
///
/// # Example
/// ```
/// use cpu_sched::policies::{PolicyConfig, SchedulingPolicy};
///
/// let config: PolicyConfig =
///     serde_json::from_str(r#"{ "round-robin": { "quantum": 2 } }"#).unwrap();
/// assert_eq!(config.build().name(), "RR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyConfig {
    /// First come, first served.
    Fcfs,
    /// Shortest job first (non-preemptive).
    Sjf,
    /// Shortest remaining time first (preemptive SJF).
    Srtf,
    /// Priority scheduling (non-preemptive, lower value = higher priority).
    Priority,
    /// Preemptive priority scheduling.
    PreemptivePriority,
    /// Round robin with a fixed time quantum.
    RoundRobin {
        /// Maximum contiguous slice per dispatch.
        quantum: i64,
    },
    /// Static multilevel queue with strict queue priority.
    MultilevelQueue {
        /// Per-level configuration, highest priority first.
        levels: Vec<LevelConfig>,
    },
    /// Multilevel feedback queue.
    MultilevelFeedback {
        /// Per-level quanta, highest priority first.
        quanta: Vec<i64>,
    },
}

impl PolicyConfig {
    /// Builds the policy described by this configuration.
    pub fn build(&self) -> Box<dyn SchedulingPolicy> {
        match self {
            Self::Fcfs => Box::new(Fcfs),
            Self::Sjf => Box::new(Sjf),
            Self::Srtf => Box::new(Srtf),
            Self::Priority => Box::new(Priority),
            Self::PreemptivePriority => Box::new(PreemptivePriority),
            Self::RoundRobin { quantum } => Box::new(RoundRobin::new(*quantum)),
            Self::MultilevelQueue { levels } => Box::new(MultilevelQueue::new(levels.clone())),
            Self::MultilevelFeedback { quanta } => {
                Box::new(MultilevelFeedback::new(quanta.clone()))
            }
        }
    }
}

/// Resets every process's mutable simulation state.
pub(crate) fn reset_all(processes: &mut [Process]) {
    for p in processes.iter_mut() {
        p.reset();
    }
}

/// Indices into `processes`, stable-sorted by arrival time.
///
/// Drives admission in the preemptive and round-robin policies; stability
/// keeps simultaneous arrivals in input order.
pub(crate) fn arrival_order(processes: &[Process]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| processes[i].arrival_time);
    order
}
