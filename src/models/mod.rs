//! Simulation domain models.
//!
//! Core data types for representing a CPU scheduling problem and its
//! solution: the [`Process`] entity carrying inputs and computed timing
//! fields, and the [`Timeline`] recording who occupied the CPU when.
//!
//! # Lifecycle
//!
//! | Phase | Actor | Access |
//! |-------|-------|--------|
//! | Construction | Input Collector | immutable inputs only |
//! | Simulation | Scheduling policy | mutates timing fields |
//! | Reporting | Metrics / renderer | read-only |

mod process;
mod timeline;

pub use process::{Process, ProcessId};
pub use timeline::{Occupant, Segment, Timeline};
