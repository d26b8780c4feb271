//! Request-driven simulation runner.
//!
//! Bundles the Input Collector contract (`SimulationRequest`), validation,
//! policy construction, and metrics into one entry point.
//!
//! # Flow
//!
//! 1. Validate the process set and policy configuration.
//! 2. Build the configured policy and run the simulation.
//! 3. Package processes, timeline, and aggregates for the report renderer.

use serde::{Deserialize, Serialize};

use super::{ProcessReport, SimulationKpi};
use crate::models::{Process, Timeline};
use crate::policies::PolicyConfig;
use crate::validation::{validate_request, ValidationError};

/// Input container for one simulation.
///
/// Deserializes directly from scenario data, so an external input collector
/// can hand over a JSON document and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to simulate.
    pub processes: Vec<Process>,
    /// Policy selection and per-policy configuration.
    pub policy: PolicyConfig,
}

impl SimulationRequest {
    /// Creates a new simulation request.
    pub fn new(processes: Vec<Process>, policy: PolicyConfig) -> Self {
        Self { processes, policy }
    }
}

/// Completed simulation: mutated processes, timeline, and aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// The process set with timing fields filled in.
    pub processes: Vec<Process>,
    /// The execution timeline (Gantt sequence).
    pub timeline: Timeline,
    /// Aggregate indicators.
    pub kpi: SimulationKpi,
}

impl SimulationOutcome {
    /// Per-process report rows, in input order.
    pub fn reports(&self) -> Vec<ProcessReport> {
        SimulationKpi::reports(&self.processes)
    }
}

/// Simulation entry point.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::policies::PolicyConfig;
/// use cpu_sched::scheduler::{SimulationRequest, Simulator};
///
/// let request = SimulationRequest::new(
///     vec![Process::new(1, 0, 5), Process::new(2, 1, 3)],
///     PolicyConfig::Fcfs,
/// );
/// let outcome = Simulator::new().run(request).unwrap();
/// assert_eq!(outcome.kpi.makespan, 8);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator;

impl Simulator {
    /// Creates a simulator.
    pub fn new() -> Self {
        Self
    }

    /// Validates and runs the request.
    ///
    /// On validation failure the process set is returned untouched inside
    /// the error; no scheduling occurs.
    pub fn run(&self, request: SimulationRequest) -> Result<SimulationOutcome, Vec<ValidationError>> {
        validate_request(&request.processes, &request.policy)?;

        let SimulationRequest {
            mut processes,
            policy,
        } = request;

        let timeline = policy.build().schedule(&mut processes);
        let kpi = SimulationKpi::calculate(&processes);

        Ok(SimulationOutcome {
            processes,
            timeline,
            kpi,
        })
    }
}
