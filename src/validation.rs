//! Advisory input checks for the presentation layer.
//!
//! The engines accept whatever they are given and enforce only the hard
//! configuration errors (zero quantum, zero frame count, mismatched
//! Banker's vectors). Everything else that makes an input questionable is
//! collected here in one pass, so a form can surface every problem inline
//! at once:
//!
//! - Duplicate process ids (engine behavior over duplicates is undefined)
//! - Zero burst times (a process the tick loops can never finish)
//! - Banker's vectors disagreeing with the resource-kind count

use std::collections::HashSet;

use crate::models::{BankerProcess, Process};

/// Validation result: `Ok(())` or every detected issue.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same id.
    DuplicateId,
    /// A process declares a burst time of zero.
    ZeroBurst,
    /// A Banker's vector disagrees with the resource-kind count.
    VectorLengthMismatch,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a scheduling input set.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }
        if p.burst_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("Process '{}' has a burst time of 0", p.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a Banker's-algorithm state.
pub fn validate_banker(available: &[u32], processes: &[BankerProcess]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }
        for (name, len) in [("allocation", p.allocation.len()), ("max", p.max.len())] {
            if len != available.len() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::VectorLengthMismatch,
                    format!(
                        "Process '{}' {name} vector has length {len}, expected {}",
                        p.id,
                        available.len()
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
