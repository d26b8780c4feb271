//! Discrete-time CPU scheduling simulator.
//!
//! Given processes with arrival time, CPU burst length, and optional
//! priority, computes an execution timeline (Gantt sequence) and
//! per-process performance metrics under a chosen scheduling policy.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Timeline`, `Segment`, `Occupant`
//! - **`policies`**: The scheduling engine: `SchedulingPolicy` trait,
//!   `PolicyConfig`, and the eight policy implementations
//! - **`scheduler`**: Request-driven runner and KPI calculation
//! - **`validation`**: Input integrity checks (ids, times, quanta)
//! - **`workload`**: Reproducible random process-set generation
//!
//! # Design
//!
//! The simulation is an offline, single-resource, discrete-event
//! computation: single-threaded, synchronous, and deterministic. Policies
//! exclusively own the process set for the duration of one `schedule` call
//! and either run whole bursts (non-preemptive family) or single ticks
//! (preemptive and feedback family).
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4
//! - Arpaci-Dusseau & Arpaci-Dusseau (2018), "Operating Systems: Three Easy
//!   Pieces", Ch. 7-8

pub mod models;
pub mod policies;
pub mod scheduler;
pub mod validation;
pub mod workload;
