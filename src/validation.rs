//! Input validation for timetables and curriculum plans.
//!
//! Checks structural integrity of data received from the external
//! system before it is planned or checked for conflicts. Detects:
//! - Duplicate IDs
//! - Start hours that are not on the teaching grid
//! - Sessions that end before they start
//! - Missing professor names
//! - Unschedulable or repeated curriculum terms
//! - Subjects with no weekly hours
//!
//! The conflict detector does not require these checks to pass; it is
//! total over its input. Run them to catch bad upstream data.

use std::collections::HashSet;

use crate::models::{grid, is_valid_term, CurriculumPlan, SessionAssignment};

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
    /// A session starts at an hour that is not a grid slot.
    InvalidStartHour,
    /// A session's end hour is not after its start hour.
    InvalidTimeRange,
    /// A session has no professor.
    MissingProfessor,
    /// A curriculum term number cannot be scheduled.
    InvalidTerm,
    /// A curriculum lists the same term twice.
    DuplicateTerm,
    /// A subject has zero weekly hours.
    EmptySubject,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the assignments of a timetable.
///
/// Checks:
/// 1. No duplicate assignment IDs
/// 2. Every start hour is a grid slot
/// 3. Every end hour is after its start hour
/// 4. Every assignment names a professor
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_assignments(assignments: &[SessionAssignment]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for a in assignments {
        if !ids.insert(a.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate assignment ID: {}", a.id),
            ));
        }

        if !grid::is_valid_start_hour(a.start_hour) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidStartHour,
                format!(
                    "Assignment '{}' starts at hour {}, which is not a teaching slot",
                    a.id, a.start_hour
                ),
            ));
        }

        if a.end_hour <= a.start_hour {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeRange,
                format!(
                    "Assignment '{}' ends at {} but starts at {}",
                    a.id, a.end_hour, a.start_hour
                ),
            ));
        }

        if a.professor.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingProfessor,
                format!("Assignment '{}' has no professor", a.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the structure of a curriculum plan.
///
/// Hour quotas are not checked here; see
/// [`validate_term_hours`](crate::planner::validate_term_hours).
pub fn validate_curriculum(plan: &CurriculumPlan) -> ValidationResult {
    let mut errors = Vec::new();
    let mut terms = HashSet::new();

    for term in &plan.terms {
        if !is_valid_term(term.term_number) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTerm,
                format!(
                    "Plan '{}' defines term {}, which cannot be scheduled",
                    plan.id, term.term_number
                ),
            ));
        }

        if !terms.insert(term.term_number) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateTerm,
                format!("Plan '{}' defines term {} twice", plan.id, term.term_number),
            ));
        }

        for subject in &term.subjects {
            if subject.weekly_hours == 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::EmptySubject,
                    format!(
                        "Subject '{}' in term {} has no weekly hours",
                        subject.name, term.term_number
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CurriculumTerm, Weekday};

    fn sample_assignments() -> Vec<SessionAssignment> {
        vec![
            SessionAssignment::new("1", Weekday::Monday, 7)
                .with_professor("Ana")
                .with_room("101"),
            SessionAssignment::new("2", Weekday::Monday, 11)
                .with_professor("Bruno")
                .with_room("102"),
        ]
    }

    #[test]
    fn test_valid_assignments() {
        assert!(validate_assignments(&sample_assignments()).is_ok());
        assert!(validate_assignments(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_assignment_id() {
        let mut input = sample_assignments();
        input.push(input[0].clone());
        let errors = validate_assignments(&input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
    }

    #[test]
    fn test_off_grid_hour() {
        let input = vec![SessionAssignment::new("x", Weekday::Friday, 15).with_professor("Ana")];
        let errors = validate_assignments(&input).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidStartHour));
    }

    #[test]
    fn test_inverted_range() {
        let input = vec![SessionAssignment::new("x", Weekday::Friday, 9)
            .with_professor("Ana")
            .with_end_hour(9)];
        let errors = validate_assignments(&input).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidTimeRange));
    }

    #[test]
    fn test_multiple_assignment_errors() {
        // Blank professor + off-grid hour
        let input = vec![SessionAssignment::new("x", Weekday::Monday, 6).with_professor("  ")];
        let errors = validate_assignments(&input).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingProfessor));
    }

    #[test]
    fn test_valid_curriculum() {
        let plan = CurriculumPlan::new("ISC")
            .with_term(CurriculumTerm::new(1).with_subject("A", 35))
            .with_term(CurriculumTerm::new(7).with_subject("B", 35));
        assert!(validate_curriculum(&plan).is_ok());
    }

    #[test]
    fn test_curriculum_errors() {
        let plan = CurriculumPlan::new("ISC")
            .with_term(CurriculumTerm::new(6).with_subject("Internship", 35))
            .with_term(CurriculumTerm::new(1).with_subject("A", 0))
            .with_term(CurriculumTerm::new(1).with_subject("B", 35));
        let errors = validate_curriculum(&plan).unwrap_err();
        let kinds: Vec<_> = errors.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                ValidationErrorKind::InvalidTerm,
                ValidationErrorKind::EmptySubject,
                ValidationErrorKind::DuplicateTerm,
            ]
        );
    }
}
