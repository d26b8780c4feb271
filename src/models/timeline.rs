//! Timeline (Gantt sequence) model.
//!
//! The timeline is the scheduling engine's primary output artifact: the
//! ordered record of which process (or idle gap) occupied the CPU during
//! each interval of the simulation.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

use super::ProcessId;

/// The occupant of a timeline interval: a process, or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupant {
    /// A process held the CPU.
    Process(ProcessId),
    /// The CPU was idle (no arrived, unfinished process).
    Idle,
}

/// One contiguous interval of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Who held the CPU during this interval.
    pub occupant: Occupant,
    /// Interval length in ticks. Always positive.
    pub duration: i64,
}

/// An ordered sequence of execution and idle segments.
///
/// Segments are appended in non-decreasing time order and never overlap;
/// the sum of all durations equals the simulation's makespan. Adjacent
/// segments with the same occupant are coalesced on push, so a process
/// executing ten consecutive single ticks appears as one segment of ten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    segments: Vec<Segment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interval, merging it into the previous segment when the
    /// occupant is unchanged. Non-positive durations are discarded so that
    /// every stored segment has positive length.
    pub fn push(&mut self, occupant: Occupant, duration: i64) {
        if duration <= 0 {
            return;
        }
        if let Some(last) = self.segments.last_mut() {
            if last.occupant == occupant {
                last.duration += duration;
                return;
            }
        }
        self.segments.push(Segment { occupant, duration });
    }

    /// The recorded segments, in time order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Total simulated duration: the sum of all segment durations.
    pub fn makespan(&self) -> i64 {
        self.segments.iter().map(|s| s.duration).sum()
    }

    /// Total time the CPU held a process.
    pub fn busy_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| matches!(s.occupant, Occupant::Process(_)))
            .map(|s| s.duration)
            .sum()
    }

    /// Total time the CPU sat idle.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// The occupant at the given tick, or `None` past the end of the timeline.
    pub fn occupant_at(&self, time: i64) -> Option<Occupant> {
        if time < 0 {
            return None;
        }
        let mut elapsed = 0;
        for segment in &self.segments {
            elapsed += segment.duration;
            if time < elapsed {
                return Some(segment.occupant);
            }
        }
        None
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the timeline holds no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over segments in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
