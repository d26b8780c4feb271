//! Simulation performance metrics.
//!
//! Derives per-process reports and aggregate indicators from a completed
//! process set.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest finish time |
//! | Avg Turnaround | mean(finish - arrival) |
//! | Avg Waiting | mean(turnaround - burst) |
//! | Avg Response | mean(first dispatch - arrival) |
//! | CPU Utilization | sum(burst) / makespan x 100 |
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::{Process, ProcessId};

/// Per-process result row for the report renderer.
///
/// All fields are plain values: a report exists only for a process that
/// completed simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessReport {
    /// Process identifier.
    pub id: ProcessId,
    /// Arrival time.
    pub arrival_time: i64,
    /// Burst time.
    pub burst_time: i64,
    /// Priority value.
    pub priority: i32,
    /// Completion time.
    pub finish_time: i64,
    /// finish - arrival.
    pub turnaround_time: i64,
    /// turnaround - burst.
    pub waiting_time: i64,
    /// first dispatch - arrival.
    pub response_time: i64,
}

impl ProcessReport {
    /// Builds the report row for a completed process.
    ///
    /// Returns `None` if the process has not finished simulation.
    pub fn from_process(process: &Process) -> Option<Self> {
        Some(Self {
            id: process.id,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            finish_time: process.finish_time?,
            turnaround_time: process.turnaround_time()?,
            waiting_time: process.waiting_time()?,
            response_time: process.response_time()?,
        })
    }
}

/// Aggregate simulation indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationKpi {
    /// Latest finish time across all processes.
    pub makespan: i64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Fraction of the makespan spent executing, as a percentage.
    pub cpu_utilization: f64,
}

impl SimulationKpi {
    /// Computes aggregates from a simulated process set.
    ///
    /// Unfinished processes are skipped; an empty or entirely unfinished
    /// set yields all-zero indicators.
    pub fn calculate(processes: &[Process]) -> Self {
        let mut total_turnaround = 0;
        let mut total_waiting = 0;
        let mut total_response = 0;
        let mut total_burst = 0;
        let mut makespan = 0;
        let mut counted = 0usize;

        for process in processes {
            let (Some(turnaround), Some(waiting), Some(response), Some(finish)) = (
                process.turnaround_time(),
                process.waiting_time(),
                process.response_time(),
                process.finish_time,
            ) else {
                continue;
            };

            counted += 1;
            total_turnaround += turnaround;
            total_waiting += waiting;
            total_response += response;
            total_burst += process.burst_time;
            makespan = makespan.max(finish);
        }

        if counted == 0 {
            return Self {
                makespan: 0,
                avg_turnaround_time: 0.0,
                avg_waiting_time: 0.0,
                avg_response_time: 0.0,
                cpu_utilization: 0.0,
            };
        }

        let n = counted as f64;
        let cpu_utilization = if makespan > 0 {
            total_burst as f64 / makespan as f64 * 100.0
        } else {
            0.0
        };

        Self {
            makespan,
            avg_turnaround_time: total_turnaround as f64 / n,
            avg_waiting_time: total_waiting as f64 / n,
            avg_response_time: total_response as f64 / n,
            cpu_utilization,
        }
    }

    /// Report rows for every completed process, in input order.
    pub fn reports(processes: &[Process]) -> Vec<ProcessReport> {
        processes.iter().filter_map(ProcessReport::from_process).collect()
    }
}
