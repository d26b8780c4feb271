//! Non-preemptive batch policies: FCFS, SJF, priority.
//!
//! All three share one shape: stable-sort the process set once by a
//! selection key, then execute strictly in that fixed order, each process
//! run-to-completion, with no reordering once execution begins.
//!
//! # Tie-breaking
//! Key ties preserve the input's relative order. This is load-bearing for
//! reproducibility: an unstable sort would yield a different but equally
//! "valid" schedule.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3

use super::{arrival_order, reset_all, SchedulingPolicy};
use crate::models::{Occupant, Process, Timeline};

/// First come, first served.
///
/// Processes execute in arrival order, each to completion.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, processes: &mut [Process]) -> Timeline {
        reset_all(processes);
        let order = arrival_order(processes);
        run_in_order(&order, processes)
    }

    fn description(&self) -> &'static str {
        "First Come, First Served"
    }
}

/// Shortest job first (non-preemptive).
///
/// Processes execute in ascending burst order, each to completion. The
/// order is fixed up front: a long process whose turn has come is not
/// displaced by a shorter one arriving later.
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

impl SchedulingPolicy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn schedule(&self, processes: &mut [Process]) -> Timeline {
        reset_all(processes);
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| processes[i].burst_time);
        run_in_order(&order, processes)
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Priority scheduling (non-preemptive).
///
/// Processes execute in ascending priority value (lower value = higher
/// priority), each to completion.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl SchedulingPolicy for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn schedule(&self, processes: &mut [Process]) -> Timeline {
        reset_all(processes);
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| processes[i].priority);
        run_in_order(&order, processes)
    }

    fn description(&self) -> &'static str {
        "Priority Scheduling"
    }
}

/// Shared dispatch loop: run each process to completion in the given order,
/// emitting an idle segment whenever the next process has not yet arrived.
fn run_in_order(order: &[usize], processes: &mut [Process]) -> Timeline {
    let mut timeline = Timeline::new();
    let mut current_time = 0;

    for &idx in order {
        let process = &mut processes[idx];
        if current_time < process.arrival_time {
            timeline.push(Occupant::Idle, process.arrival_time - current_time);
            current_time = process.arrival_time;
        }

        process.start_time = Some(current_time);
        current_time += process.burst_time;
        process.remaining_time = 0;
        process.finish_time = Some(current_time);

        timeline.push(Occupant::Process(process.id), process.burst_time);
    }

    timeline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Segment;

    fn by_id(processes: &[Process], id: u32) -> &Process {
        processes.iter().find(|p| p.id == id).unwrap()
    }

    #[test]
    fn test_fcfs_two_processes() {
        // P1(arrival 0, burst 5), P2(arrival 1, burst 3)
        let mut processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
        let timeline = Fcfs.schedule(&mut processes);

        assert_eq!(
            timeline.segments(),
            &[
                Segment {
                    occupant: Occupant::Process(1),
                    duration: 5
                },
                Segment {
                    occupant: Occupant::Process(2),
                    duration: 3
                },
            ]
        );

        let p1 = by_id(&processes, 1);
        assert_eq!(p1.waiting_time(), Some(0));
        assert_eq!(p1.turnaround_time(), Some(5));

        let p2 = by_id(&processes, 2);
        assert_eq!(p2.start_time, Some(5));
        assert_eq!(p2.waiting_time(), Some(4));
        assert_eq!(p2.turnaround_time(), Some(7));
    }

    #[test]
    fn test_fcfs_is_order_preserving() {
        let mut processes = vec![
            Process::new(1, 0, 4),
            Process::new(2, 2, 2),
            Process::new(3, 3, 3),
        ];
        Fcfs.schedule(&mut processes);

        // Back-to-back: each start equals the previous finish
        assert_eq!(by_id(&processes, 1).finish_time, by_id(&processes, 2).start_time);
        assert_eq!(by_id(&processes, 2).finish_time, by_id(&processes, 3).start_time);
    }

    #[test]
    fn test_fcfs_emits_idle_gap() {
        let mut processes = vec![Process::new(1, 3, 2)];
        let timeline = Fcfs.schedule(&mut processes);

        assert_eq!(timeline.segments()[0].occupant, Occupant::Idle);
        assert_eq!(timeline.segments()[0].duration, 3);
        assert_eq!(timeline.makespan(), 5);
        assert_eq!(processes[0].start_time, Some(3));
        assert_eq!(processes[0].waiting_time(), Some(0));
    }

    #[test]
    fn test_fcfs_sorts_by_arrival_not_input_order() {
        let mut processes = vec![Process::new(1, 4, 2), Process::new(2, 0, 3)];
        let timeline = Fcfs.schedule(&mut processes);

        assert_eq!(timeline.segments()[0].occupant, Occupant::Process(2));
        assert_eq!(by_id(&processes, 2).start_time, Some(0));
        assert_eq!(by_id(&processes, 1).start_time, Some(4));
    }

    #[test]
    fn test_sjf_executes_shortest_first() {
        let mut processes = vec![
            Process::new(1, 0, 6),
            Process::new(2, 0, 2),
            Process::new(3, 0, 4),
        ];
        let timeline = Sjf.schedule(&mut processes);

        let order: Vec<Occupant> = timeline.iter().map(|s| s.occupant).collect();
        assert_eq!(
            order,
            vec![
                Occupant::Process(2),
                Occupant::Process(3),
                Occupant::Process(1)
            ]
        );
        assert_eq!(by_id(&processes, 2).finish_time, Some(2));
        assert_eq!(by_id(&processes, 1).finish_time, Some(12));
    }

    #[test]
    fn test_sjf_ties_preserve_input_order() {
        let mut processes = vec![
            Process::new(1, 0, 3),
            Process::new(2, 0, 3),
            Process::new(3, 0, 3),
        ];
        let timeline = Sjf.schedule(&mut processes);

        let order: Vec<Occupant> = timeline.iter().map(|s| s.occupant).collect();
        assert_eq!(
            order,
            vec![
                Occupant::Process(1),
                Occupant::Process(2),
                Occupant::Process(3)
            ]
        );
    }

    #[test]
    fn test_priority_executes_lowest_value_first() {
        let mut processes = vec![
            Process::new(1, 0, 2).with_priority(3),
            Process::new(2, 0, 2).with_priority(1),
            Process::new(3, 0, 2).with_priority(2),
        ];
        let timeline = Priority.schedule(&mut processes);

        let order: Vec<Occupant> = timeline.iter().map(|s| s.occupant).collect();
        assert_eq!(
            order,
            vec![
                Occupant::Process(2),
                Occupant::Process(3),
                Occupant::Process(1)
            ]
        );
    }

    #[test]
    fn test_batch_waiting_and_response_coincide() {
        // Run-to-completion: response time always equals waiting time
        let mut processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 8),
        ];
        Fcfs.schedule(&mut processes);
        for p in &processes {
            assert_eq!(p.waiting_time(), p.response_time());
        }
    }

    #[test]
    fn test_schedule_resets_previous_run() {
        let mut processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
        let first = Fcfs.schedule(&mut processes);
        let second = Fcfs.schedule(&mut processes);
        assert_eq!(first, second);
    }
}
