//! Input validation for simulation requests.
//!
//! Checks structural integrity of the process set and the policy
//! configuration before any scheduling occurs. Detects:
//! - Empty process sets
//! - Duplicate process ids
//! - Negative arrival times, non-positive bursts, negative priorities
//! - Non-positive or missing quanta
//! - Empty multilevel configurations
//!
//! The policies themselves do not re-validate: they are total functions
//! over well-formed input, and [`crate::scheduler::Simulator`] runs this
//! check before dispatching to them.

use std::collections::HashSet;

use crate::models::Process;
use crate::policies::{PolicyConfig, QueueDiscipline};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The request carries no processes.
    EmptyProcessSet,
    /// Two processes share the same id.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrivalTime,
    /// A process has a zero or negative burst.
    NonPositiveBurstTime,
    /// A process has a negative priority value.
    NegativePriority,
    /// A quantum is zero, negative, or missing where required.
    NonPositiveQuantum,
    /// A multilevel policy is configured with no levels.
    NoQueueLevels,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a simulation request.
///
/// Checks:
/// 1. The process set is non-empty
/// 2. Process ids are unique
/// 3. Every arrival time is non-negative
/// 4. Every burst time is strictly positive
/// 5. Every priority value is non-negative
/// 6. Round-robin quanta (top-level, per multilevel-queue level, per MLFQ
///    level) are present and strictly positive
/// 7. Multilevel policies have at least one level
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(processes: &[Process], policy: &PolicyConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "At least one process is required",
        ));
    }

    let mut ids = HashSet::new();
    for process in processes {
        if !ids.insert(process.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process id: {}", process.id),
            ));
        }
        if process.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrivalTime,
                format!(
                    "Process {} arrives at {}, before the simulation epoch",
                    process.id, process.arrival_time
                ),
            ));
        }
        if process.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurstTime,
                format!(
                    "Process {} has burst {}, expected > 0",
                    process.id, process.burst_time
                ),
            ));
        }
        if process.priority < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativePriority,
                format!(
                    "Process {} has priority {}, expected >= 0",
                    process.id, process.priority
                ),
            ));
        }
    }

    validate_policy(policy, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_policy(policy: &PolicyConfig, errors: &mut Vec<ValidationError>) {
    match policy {
        PolicyConfig::Fcfs
        | PolicyConfig::Sjf
        | PolicyConfig::Srtf
        | PolicyConfig::Priority
        | PolicyConfig::PreemptivePriority => {}
        PolicyConfig::RoundRobin { quantum } => {
            if *quantum <= 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NonPositiveQuantum,
                    format!("Round-robin quantum is {quantum}, expected > 0"),
                ));
            }
        }
        PolicyConfig::MultilevelQueue { levels } => {
            if levels.is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NoQueueLevels,
                    "Multilevel queue needs at least one level",
                ));
            }
            for (index, level) in levels.iter().enumerate() {
                if level.discipline == QueueDiscipline::RoundRobin {
                    match level.quantum {
                        Some(q) if q > 0 => {}
                        Some(q) => errors.push(ValidationError::new(
                            ValidationErrorKind::NonPositiveQuantum,
                            format!("Queue {index} quantum is {q}, expected > 0"),
                        )),
                        None => errors.push(ValidationError::new(
                            ValidationErrorKind::NonPositiveQuantum,
                            format!("Queue {index} uses round-robin but has no quantum"),
                        )),
                    }
                }
            }
        }
        PolicyConfig::MultilevelFeedback { quanta } => {
            if quanta.is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NoQueueLevels,
                    "Multilevel feedback queue needs at least one level",
                ));
            }
            for (index, &quantum) in quanta.iter().enumerate() {
                if quantum <= 0 {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::NonPositiveQuantum,
                        format!("Level {index} quantum is {quantum}, expected > 0"),
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::LevelConfig;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5).with_priority(1),
            Process::new(2, 1, 3).with_priority(2),
        ]
    }

    fn kinds(errors: &[ValidationError]) -> Vec<&ValidationErrorKind> {
        errors.iter().map(|e| &e.kind).collect()
    }

    #[test]
    fn test_valid_request() {
        assert!(validate_request(&sample_processes(), &PolicyConfig::Fcfs).is_ok());
        assert!(
            validate_request(&sample_processes(), &PolicyConfig::RoundRobin { quantum: 2 }).is_ok()
        );
    }

    #[test]
    fn test_empty_process_set() {
        let errors = validate_request(&[], &PolicyConfig::Fcfs).unwrap_err();
        assert!(kinds(&errors).contains(&&ValidationErrorKind::EmptyProcessSet));
    }

    #[test]
    fn test_duplicate_process_id() {
        let processes = vec![Process::new(1, 0, 5), Process::new(1, 1, 3)];
        let errors = validate_request(&processes, &PolicyConfig::Fcfs).unwrap_err();
        assert!(kinds(&errors).contains(&&ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_negative_arrival_rejected() {
        let processes = vec![Process::new(1, -1, 5)];
        let errors = validate_request(&processes, &PolicyConfig::Fcfs).unwrap_err();
        assert!(kinds(&errors).contains(&&ValidationErrorKind::NegativeArrivalTime));
    }

    #[test]
    fn test_non_positive_burst_rejected() {
        let processes = vec![Process::new(1, 0, 0), Process::new(2, 0, -4)];
        let errors = validate_request(&processes, &PolicyConfig::Fcfs).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::NonPositiveBurstTime)
                .count(),
            2
        );
    }

    #[test]
    fn test_negative_priority_rejected() {
        let processes = vec![Process::new(1, 0, 5).with_priority(-2)];
        let errors = validate_request(&processes, &PolicyConfig::Priority).unwrap_err();
        assert!(kinds(&errors).contains(&&ValidationErrorKind::NegativePriority));
    }

    #[test]
    fn test_non_positive_rr_quantum() {
        let errors =
            validate_request(&sample_processes(), &PolicyConfig::RoundRobin { quantum: 0 })
                .unwrap_err();
        assert!(kinds(&errors).contains(&&ValidationErrorKind::NonPositiveQuantum));
    }

    #[test]
    fn test_multilevel_queue_missing_rr_quantum() {
        let policy = PolicyConfig::MultilevelQueue {
            levels: vec![
                LevelConfig::fcfs(),
                LevelConfig {
                    discipline: QueueDiscipline::RoundRobin,
                    quantum: None,
                },
            ],
        };
        let errors = validate_request(&sample_processes(), &policy).unwrap_err();
        assert!(kinds(&errors).contains(&&ValidationErrorKind::NonPositiveQuantum));
    }

    #[test]
    fn test_multilevel_queue_no_levels() {
        let policy = PolicyConfig::MultilevelQueue { levels: Vec::new() };
        let errors = validate_request(&sample_processes(), &policy).unwrap_err();
        assert!(kinds(&errors).contains(&&ValidationErrorKind::NoQueueLevels));
    }

    #[test]
    fn test_mlfq_invalid_quanta() {
        let policy = PolicyConfig::MultilevelFeedback {
            quanta: vec![2, 0, -1],
        };
        let errors = validate_request(&sample_processes(), &policy).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::NonPositiveQuantum)
                .count(),
            2
        );
    }

    #[test]
    fn test_multiple_errors_accumulate() {
        let processes = vec![Process::new(1, -1, 0)];
        let errors =
            validate_request(&processes, &PolicyConfig::RoundRobin { quantum: -5 }).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
