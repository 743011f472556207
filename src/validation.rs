//! Input validation for simulation runs.
//!
//! Checks structural integrity of a process set before simulation.
//! Detects:
//! - Duplicate process IDs
//! - Zero burst times
//!
//! These checks belong to the caller: the simulation entry point assumes
//! pre-filtered input and does not re-validate.

use std::collections::HashSet;

use crate::models::Process;

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
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has no CPU work to do.
    ZeroBurst,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set for simulation.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. Every process has a positive burst time
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for process in processes {
        if !ids.insert(process.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", process.id),
            ));
        }

        if process.burst_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("Process '{}' has zero burst time", process.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Drops processes with no CPU work, keeping the rest in order.
///
/// Mirrors the pre-simulation filter a form-driven caller applies before
/// handing input to the runner.
pub fn filter_runnable(processes: Vec<Process>) -> Vec<Process> {
    processes
        .into_iter()
        .filter(|p| p.burst_time > 0)
        .collect()
}
