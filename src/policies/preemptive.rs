//! Preemptive single-level policies: SRTF and preemptive priority.
//!
//! Both run the same tick-granular loop over a ready heap; only the urgency
//! key differs (remaining time vs. priority value). Re-arbitrating every
//! tick is equivalent to immediate preemption, since one tick is the finest
//! granularity the simulation has.
//!
//! # Tie-breaking
//! Equal keys are broken by earliest arrival, then lowest id, via an
//! explicit comparator on the heap entries. Behavior is therefore fully
//! deterministic and portable.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.2

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::{arrival_order, reset_all, SchedulingPolicy};
use crate::models::{Occupant, Process, ProcessId, Timeline};

/// Ready-set entry. Derived ordering compares `key`, then `arrival`,
/// then `id`; wrapped in [`Reverse`] for a min-heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct ReadyEntry {
    key: i64,
    arrival: i64,
    id: ProcessId,
    index: usize,
}

/// Shortest remaining time first (preemptive SJF).
///
/// At every tick the arrived process with the least remaining work runs;
/// a newly arrived, shorter process preempts the current one at the next
/// tick boundary.
#[derive(Debug, Clone, Copy)]
pub struct Srtf;

impl SchedulingPolicy for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn schedule(&self, processes: &mut [Process]) -> Timeline {
        run_tick_granular(processes, |p| p.remaining_time)
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

/// Preemptive priority scheduling.
///
/// At every tick the arrived process with the lowest priority value runs;
/// a newly arrived, more urgent process preempts the current one at the
/// next tick boundary.
#[derive(Debug, Clone, Copy)]
pub struct PreemptivePriority;

impl SchedulingPolicy for PreemptivePriority {
    fn name(&self) -> &'static str {
        "PREEMPTIVE-PRIORITY"
    }

    fn schedule(&self, processes: &mut [Process]) -> Timeline {
        run_tick_granular(processes, |p| i64::from(p.priority))
    }

    fn description(&self) -> &'static str {
        "Preemptive Priority Scheduling"
    }
}

/// Tick-granular simulation over a min-heap keyed by `key`.
///
/// Each tick: admit every arrived process, pop the most urgent, execute it
/// for one tick, then requeue or finalize it. An empty heap with arrivals
/// pending produces one idle tick.
fn run_tick_granular(processes: &mut [Process], key: fn(&Process) -> i64) -> Timeline {
    reset_all(processes);

    let order = arrival_order(processes);
    let mut ready: BinaryHeap<Reverse<ReadyEntry>> = BinaryHeap::new();
    let mut timeline = Timeline::new();
    let mut current_time = 0;
    let mut completed = 0;
    let mut next = 0;

    while completed < processes.len() {
        while next < order.len() && processes[order[next]].has_arrived(current_time) {
            let index = order[next];
            ready.push(Reverse(entry(&processes[index], index, key)));
            next += 1;
        }

        match ready.pop() {
            Some(Reverse(top)) => {
                let process = &mut processes[top.index];
                if process.start_time.is_none() {
                    process.start_time = Some(current_time);
                }

                process.remaining_time -= 1;
                timeline.push(Occupant::Process(process.id), 1);
                current_time += 1;

                if process.remaining_time == 0 {
                    process.finish_time = Some(current_time);
                    completed += 1;
                } else {
                    ready.push(Reverse(entry(process, top.index, key)));
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

fn entry(process: &Process, index: usize, key: fn(&Process) -> i64) -> ReadyEntry {
    ReadyEntry {
        key: key(process),
        arrival: process.arrival_time,
        id: process.id,
        index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Segment;

    fn by_id(processes: &[Process], id: u32) -> &Process {
        processes.iter().find(|p| p.id == id).unwrap()
    }

    fn seg(id: u32, duration: i64) -> Segment {
        Segment {
            occupant: Occupant::Process(id),
            duration,
        }
    }

    #[test]
    fn test_srtf_classic_trace() {
        // P1(0,8), P2(1,4), P3(2,9), P4(3,5): textbook SRTF input
        let mut processes = vec![
            Process::new(1, 0, 8),
            Process::new(2, 1, 4),
            Process::new(3, 2, 9),
            Process::new(4, 3, 5),
        ];
        let timeline = Srtf.schedule(&mut processes);

        // P1 runs one tick, preempted by P2 (remaining 7 > 4); P2 runs to
        // completion; then P4, P1, P3 by remaining time.
        assert_eq!(
            timeline.segments(),
            &[seg(1, 1), seg(2, 4), seg(4, 5), seg(1, 7), seg(3, 9)]
        );

        assert_eq!(by_id(&processes, 1).finish_time, Some(17));
        assert_eq!(by_id(&processes, 2).finish_time, Some(5));
        assert_eq!(by_id(&processes, 3).finish_time, Some(26));
        assert_eq!(by_id(&processes, 4).finish_time, Some(10));

        let total_waiting: i64 = processes.iter().map(|p| p.waiting_time().unwrap()).sum();
        let avg_waiting = total_waiting as f64 / processes.len() as f64;
        assert!((avg_waiting - 6.5).abs() < 1e-10);
    }

    #[test]
    fn test_srtf_start_time_set_on_first_tick_only() {
        let mut processes = vec![Process::new(1, 0, 8), Process::new(2, 1, 4)];
        Srtf.schedule(&mut processes);

        // P1 ran at t=0, was preempted at t=1, resumed at t=5
        assert_eq!(by_id(&processes, 1).start_time, Some(0));
        assert_eq!(by_id(&processes, 1).response_time(), Some(0));
        assert_eq!(by_id(&processes, 2).start_time, Some(1));
    }

    #[test]
    fn test_srtf_idle_until_first_arrival() {
        let mut processes = vec![Process::new(1, 4, 2)];
        let timeline = Srtf.schedule(&mut processes);

        assert_eq!(timeline.segments()[0].occupant, Occupant::Idle);
        assert_eq!(timeline.segments()[0].duration, 4);
        assert_eq!(timeline.makespan(), 6);
    }

    #[test]
    fn test_srtf_ties_broken_by_arrival_then_id() {
        // Identical bursts: the earlier arrival wins; among simultaneous
        // arrivals, the lower id wins.
        let mut processes = vec![
            Process::new(3, 0, 3),
            Process::new(1, 0, 3),
            Process::new(2, 0, 3),
        ];
        let timeline = Srtf.schedule(&mut processes);
        assert_eq!(timeline.segments(), &[seg(1, 3), seg(2, 3), seg(3, 3)]);
    }

    #[test]
    fn test_preemptive_priority_preempts_on_arrival() {
        let mut processes = vec![
            Process::new(1, 0, 6).with_priority(3),
            Process::new(2, 2, 2).with_priority(1),
        ];
        let timeline = PreemptivePriority.schedule(&mut processes);

        // P1 runs until P2 arrives, P2 runs to completion, P1 resumes
        assert_eq!(timeline.segments(), &[seg(1, 2), seg(2, 2), seg(1, 4)]);
        assert_eq!(by_id(&processes, 2).waiting_time(), Some(0));
        assert_eq!(by_id(&processes, 1).finish_time, Some(8));
    }

    #[test]
    fn test_preemptive_priority_equal_priority_runs_by_arrival() {
        let mut processes = vec![
            Process::new(1, 0, 4).with_priority(2),
            Process::new(2, 1, 2).with_priority(2),
        ];
        let timeline = PreemptivePriority.schedule(&mut processes);

        // Same priority: P1 (earlier arrival) keeps the CPU
        assert_eq!(timeline.segments(), &[seg(1, 4), seg(2, 2)]);
    }

    #[test]
    fn test_preemptive_determinism() {
        let mut a = vec![
            Process::new(1, 0, 8).with_priority(2),
            Process::new(2, 1, 4).with_priority(2),
            Process::new(3, 2, 9).with_priority(1),
        ];
        let mut b = a.clone();

        assert_eq!(Srtf.schedule(&mut a), Srtf.schedule(&mut b));
        assert_eq!(a, b);
        assert_eq!(
            PreemptivePriority.schedule(&mut a),
            PreemptivePriority.schedule(&mut b)
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_timeline_duration_equals_max_finish() {
        let mut processes = vec![
            Process::new(1, 0, 8),
            Process::new(2, 1, 4),
            Process::new(3, 2, 9),
            Process::new(4, 3, 5),
        ];
        let timeline = Srtf.schedule(&mut processes);
        let max_finish = processes.iter().filter_map(|p| p.finish_time).max();
        assert_eq!(Some(timeline.makespan()), max_finish);
    }
}
