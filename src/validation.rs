//! Input validation for laboratory scheduling.
//!
//! Checks rooms and requests before a run. The engine does not call
//! this; it places whatever it is given. Detects:
//! - Duplicate laboratory or request IDs
//! - Preferred or excluded slots outside the slot space
//! - Requests larger than every laboratory
//!
//! A preferred slot that is also excluded is not an error: exclusion wins.

use std::collections::HashSet;

use crate::models::{Laboratory, Request};
use crate::scheduler::SlotSpace;

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
    /// Two entities share the same ID.
    DuplicateId,
    /// A request names a slot the slot space does not contain.
    SlotOutOfRange,
    /// No laboratory can seat the class.
    NoFittingLaboratory,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates rooms and requests against a slot space.
///
/// Checks:
/// 1. No duplicate laboratory IDs
/// 2. No duplicate request IDs
/// 3. Every preferred and excluded slot lies in `slot_space`
/// 4. Every request fits into at least one laboratory (skipped when there
///    are no laboratories; the engine treats that as an empty run)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    laboratories: &[Laboratory],
    requests: &[Request],
    slot_space: &SlotSpace,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut lab_ids = HashSet::new();
    for lab in laboratories {
        if !lab_ids.insert(lab.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate laboratory ID: {}", lab.id),
            ));
        }
    }

    let mut request_ids = HashSet::new();
    for req in requests {
        if !request_ids.insert(req.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate request ID: {}", req.id),
            ));
        }
    }

    for req in requests {
        let stray = req
            .preferred_slots
            .iter()
            .chain(req.excluded_slots.iter())
            .filter(|slot| !slot_space.contains(slot));
        for slot in stray {
            errors.push(ValidationError::new(
                ValidationErrorKind::SlotOutOfRange,
                format!("Request '{}' names slot {} outside the slot space", req.class_id, slot),
            ));
        }
    }

    let largest = laboratories.iter().map(|l| l.capacity).max();
    if let Some(largest) = largest {
        for req in requests.iter().filter(|r| r.student_count > largest) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoFittingLaboratory,
                format!(
                    "Request '{}' needs {} seats, largest laboratory has {}",
                    req.class_id, req.student_count, largest
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LabId, RequestId, TimeSlot};

    fn sample_labs() -> Vec<Laboratory> {
        vec![
            Laboratory::new(LabId(1), "A301", 40),
            Laboratory::new(LabId(2), "B201", 50),
        ]
    }

    fn sample_requests() -> Vec<Request> {
        vec![
            Request::new(RequestId(1), "B210307", 33, "Zhu")
                .with_preferred([TimeSlot::new(9, 0, 0)])
                .with_excluded([TimeSlot::new(9, 0, 1)]),
            Request::new(RequestId(2), "B210308", 36, "Hu"),
        ]
    }

    #[test]
    fn test_valid_input() {
        let result = validate_input(&sample_labs(), &sample_requests(), &SlotSpace::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_preferred_and_excluded_overlap_is_allowed() {
        let requests = vec![Request::new(RequestId(1), "C1", 20, "T")
            .with_preferred([TimeSlot::new(9, 0, 0)])
            .with_excluded([TimeSlot::new(9, 0, 0)])];
        assert!(validate_input(&sample_labs(), &requests, &SlotSpace::default()).is_ok());
    }

    #[test]
    fn test_duplicate_lab_id() {
        let labs = vec![
            Laboratory::new(LabId(1), "A301", 40),
            Laboratory::new(LabId(1), "A302", 40),
        ];
        let errors = validate_input(&labs, &sample_requests(), &SlotSpace::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("laboratory")));
    }

    #[test]
    fn test_duplicate_request_id() {
        let requests = vec![
            Request::new(RequestId(1), "C1", 20, "T"),
            Request::new(RequestId(1), "C2", 20, "T"),
        ];
        let errors = validate_input(&sample_labs(), &requests, &SlotSpace::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("request")));
    }

    #[test]
    fn test_slot_out_of_range() {
        let requests = vec![Request::new(RequestId(1), "C1", 20, "T")
            .with_preferred([TimeSlot::new(11, 0, 0)])
            .with_excluded([TimeSlot::new(9, 5, 0)])];
        let errors = validate_input(&sample_labs(), &requests, &SlotSpace::default()).unwrap_err();
        let stray = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::SlotOutOfRange)
            .count();
        assert_eq!(stray, 2);
    }

    #[test]
    fn test_no_fitting_laboratory() {
        let requests = vec![Request::new(RequestId(1), "BIG", 51, "T")];
        let errors = validate_input(&sample_labs(), &requests, &SlotSpace::default()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NoFittingLaboratory);
    }

    #[test]
    fn test_no_labs_skips_capacity_check() {
        assert!(validate_input(&[], &sample_requests(), &SlotSpace::default()).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let labs = vec![
            Laboratory::new(LabId(1), "A301", 40),
            Laboratory::new(LabId(1), "A302", 40),
        ];
        let requests = vec![Request::new(RequestId(1), "BIG", 99, "T")
            .with_preferred([TimeSlot::new(1, 0, 0)])];
        let errors = validate_input(&labs, &requests, &SlotSpace::default()).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
