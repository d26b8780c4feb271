//! Process model.
//!
//! A process is the unit of work dispatched on the simulated CPU:
//! immutable inputs (arrival, burst, priority) plus the timing fields
//! that scheduling fills in.
//!
//! # Time Representation
//! All times are in discrete ticks relative to a simulation epoch (t=0).
//! The consumer defines what one tick means (e.g., 1 ms, 10 ms).
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 3

use serde::{Deserialize, Serialize};

/// Unique process identifier, assigned by the caller.
pub type ProcessId = u32;

fn default_queue_id() -> usize {
    1
}

/// A simulated process.
///
/// Created with only its immutable inputs; the scheduling policies mutate
/// the timing fields during `schedule`, after which the record is read-only
/// for the metrics calculator and any renderer.
///
/// # Invariants
/// - `0 <= remaining_time <= burst_time` at all times.
/// - `start_time` is set at most once, at the tick of first dispatch.
/// - `finish_time` is set exactly when `remaining_time` reaches 0 and is
///   never revised afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Tick at which the process becomes eligible for dispatch.
    pub arrival_time: i64,
    /// Total CPU time the process requires before completion.
    pub burst_time: i64,
    /// Scheduling priority: lower value = higher priority. Only meaningful
    /// for the priority-based policies.
    #[serde(default)]
    pub priority: i32,
    /// CPU time still owed. Counts down from `burst_time` to 0.
    #[serde(default)]
    pub remaining_time: i64,
    /// Tick of first dispatch. `None` until the process first runs.
    #[serde(default)]
    pub start_time: Option<i64>,
    /// Tick at which `remaining_time` reached 0. `None` until completion.
    #[serde(default)]
    pub finish_time: Option<i64>,
    /// Static queue assignment for the multilevel queue policy (1-based).
    #[serde(default = "default_queue_id")]
    pub queue_id: usize,
    /// Level currently occupied in a multilevel policy (0-based).
    #[serde(default)]
    pub current_level: usize,
    /// Contiguous CPU time consumed at the current level, for quantum expiry.
    #[serde(default)]
    pub time_at_level: i64,
    /// Whether the process has been admitted into a feedback queue.
    #[serde(default)]
    pub enqueued: bool,
}

impl Process {
    /// Creates a process with the given id, arrival time, and burst time.
    pub fn new(id: ProcessId, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: 0,
            remaining_time: burst_time,
            start_time: None,
            finish_time: None,
            queue_id: 1,
            current_level: 0,
            time_at_level: 0,
            enqueued: false,
        }
    }

    /// Sets the scheduling priority (lower = higher priority).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the static queue assignment (1-based) for the multilevel queue policy.
    pub fn with_queue_id(mut self, queue_id: usize) -> Self {
        self.queue_id = queue_id;
        self
    }

    /// Whether the process has arrived by the given tick.
    #[inline]
    pub fn has_arrived(&self, now: i64) -> bool {
        self.arrival_time <= now
    }

    /// Whether the process has run to completion.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finish_time.is_some()
    }

    /// Turnaround time: completion minus arrival. `None` until completion.
    pub fn turnaround_time(&self) -> Option<i64> {
        self.finish_time.map(|f| f - self.arrival_time)
    }

    /// Waiting time: turnaround minus burst. `None` until completion.
    pub fn waiting_time(&self) -> Option<i64> {
        self.turnaround_time().map(|t| t - self.burst_time)
    }

    /// Response time: first dispatch minus arrival. `None` until first dispatch.
    pub fn response_time(&self) -> Option<i64> {
        self.start_time.map(|s| s - self.arrival_time)
    }

    /// Restores all mutable simulation state from the immutable inputs.
    ///
    /// Every policy resets its process set on entry, so repeated `schedule`
    /// calls on the same processes are independent and deterministic.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.start_time = None;
        self.finish_time = None;
        self.current_level = 0;
        self.time_at_level = 0;
        self.enqueued = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(1, 4, 10).with_priority(2).with_queue_id(3);
        assert_eq!(p.id, 1);
        assert_eq!(p.arrival_time, 4);
        assert_eq!(p.burst_time, 10);
        assert_eq!(p.priority, 2);
        assert_eq!(p.queue_id, 3);
        assert_eq!(p.remaining_time, 10);
        assert!(p.start_time.is_none());
        assert!(p.finish_time.is_none());
        assert!(!p.is_finished());
    }

    #[test]
    fn test_derived_metrics_unset_until_completion() {
        let mut p = Process::new(1, 2, 5);
        assert_eq!(p.turnaround_time(), None);
        assert_eq!(p.waiting_time(), None);
        assert_eq!(p.response_time(), None);

        p.start_time = Some(4);
        assert_eq!(p.response_time(), Some(2));
        assert_eq!(p.turnaround_time(), None);

        p.remaining_time = 0;
        p.finish_time = Some(9);
        assert_eq!(p.turnaround_time(), Some(7));
        assert_eq!(p.waiting_time(), Some(2));
    }

    #[test]
    fn test_has_arrived() {
        let p = Process::new(1, 3, 5);
        assert!(!p.has_arrived(2));
        assert!(p.has_arrived(3));
        assert!(p.has_arrived(10));
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut p = Process::new(1, 0, 6).with_queue_id(2);
        p.remaining_time = 0;
        p.start_time = Some(0);
        p.finish_time = Some(6);
        p.current_level = 1;
        p.time_at_level = 3;
        p.enqueued = true;

        p.reset();
        assert_eq!(p.remaining_time, 6);
        assert!(p.start_time.is_none());
        assert!(p.finish_time.is_none());
        assert_eq!(p.current_level, 0);
        assert_eq!(p.time_at_level, 0);
        assert!(!p.enqueued);
        // Immutable inputs untouched
        assert_eq!(p.queue_id, 2);
        assert_eq!(p.burst_time, 6);
    }
}
