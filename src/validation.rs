//! Input validation for timetable generation.
//!
//! Checks structural integrity of teacher profiles and class
//! requirements before scheduling. Detects:
//! - Duplicate teacher IDs
//! - Duplicate (class, subject) requirement pairs
//! - Requirements with zero weekly hours
//! - Preferred-teacher references to unknown teachers
//! - Availability entries outside the weekly grid
//!
//! These are data-shape problems a caller should fix at the source;
//! constraint infeasibility is reported separately by the scheduler
//! as [`crate::error::SchedulingError`].

use std::collections::HashSet;

use crate::models::week::{DAYS_PER_WEEK, PERIODS_PER_DAY};
use crate::models::{ClassRequirement, TeacherProfile};

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
    /// Two teachers share the same ID.
    DuplicateTeacherId,
    /// Two requirements share the same (class, subject) pair.
    DuplicateRequirement,
    /// A requirement asks for zero hours per week.
    ZeroHours,
    /// A requirement pins a teacher that doesn't exist.
    UnknownPreferredTeacher,
    /// An availability entry lies outside the weekly grid.
    AvailabilityOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a generation run.
///
/// Checks:
/// 1. No duplicate teacher IDs
/// 2. No duplicate (class, subject) requirement pairs
/// 3. All requirements ask for at least one hour per week
/// 4. All preferred-teacher references point to existing teachers
/// 5. All availability entries address cells on the 5×7 grid
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    teachers: &[TeacherProfile],
    requirements: &[ClassRequirement],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut teacher_ids = HashSet::new();
    for t in teachers {
        if !teacher_ids.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateTeacherId,
                format!("Duplicate teacher ID: {}", t.id),
            ));
        }

        for (&day, periods) in &t.availability {
            if day >= DAYS_PER_WEEK {
                errors.push(ValidationError::new(
                    ValidationErrorKind::AvailabilityOutOfRange,
                    format!("Teacher '{}' availability names day {day}", t.id),
                ));
            }
            for &p in periods {
                if p >= PERIODS_PER_DAY {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::AvailabilityOutOfRange,
                        format!("Teacher '{}' availability names period {p} on day {day}", t.id),
                    ));
                }
            }
        }
    }

    let mut pairs = HashSet::new();
    for r in requirements {
        if !pairs.insert((r.class_id.as_str(), r.subject_id.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateRequirement,
                format!(
                    "Duplicate requirement for class '{}', subject '{}'",
                    r.class_id, r.subject_id
                ),
            ));
        }

        if r.hours_per_week == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroHours,
                format!(
                    "Requirement for class '{}', subject '{}' has zero hours",
                    r.class_id, r.subject_id
                ),
            ));
        }

        if let Some(tid) = &r.preferred_teacher_id {
            if !teacher_ids.contains(tid.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownPreferredTeacher,
                    format!(
                        "Requirement for class '{}', subject '{}' references unknown teacher '{tid}'",
                        r.class_id, r.subject_id
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

    fn sample_teachers() -> Vec<TeacherProfile> {
        vec![
            TeacherProfile::new("T1").with_subject("MATH"),
            TeacherProfile::new("T2").with_subject("PHYS"),
        ]
    }

    fn sample_requirements() -> Vec<ClassRequirement> {
        vec![
            ClassRequirement::new("A", "MATH", 3),
            ClassRequirement::new("A", "PHYS", 2).lab(),
            ClassRequirement::new("B", "MATH", 2).with_preferred_teacher("T1"),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_teachers(), &sample_requirements()).is_ok());
    }

    #[test]
    fn test_duplicate_teacher_id() {
        let teachers = vec![TeacherProfile::new("T1"), TeacherProfile::new("T1")];
        let errors = validate_input(&teachers, &sample_requirements()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateTeacherId));
    }

    #[test]
    fn test_duplicate_requirement_pair() {
        let requirements = vec![
            ClassRequirement::new("A", "MATH", 3),
            ClassRequirement::new("A", "MATH", 1),
        ];
        let errors = validate_input(&sample_teachers(), &requirements).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateRequirement));
    }

    #[test]
    fn test_zero_hours() {
        let requirements = vec![ClassRequirement::new("A", "MATH", 0)];
        let errors = validate_input(&sample_teachers(), &requirements).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::ZeroHours));
    }

    #[test]
    fn test_unknown_preferred_teacher() {
        let requirements = vec![ClassRequirement::new("A", "MATH", 2).with_preferred_teacher("T99")];
        let errors = validate_input(&sample_teachers(), &requirements).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownPreferredTeacher
                && e.message.contains("T99")));
    }

    #[test]
    fn test_availability_out_of_range() {
        let teachers = vec![
            TeacherProfile::new("T1").with_availability(7, vec![0]),
            TeacherProfile::new("T2").with_availability(0, vec![9]),
        ];
        let errors = validate_input(&teachers, &sample_requirements()).unwrap_err();
        let count = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::AvailabilityOutOfRange)
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_multiple_errors_collected() {
        let teachers = vec![TeacherProfile::new("T1"), TeacherProfile::new("T1")];
        let requirements = vec![
            ClassRequirement::new("A", "MATH", 0),
            ClassRequirement::new("A", "MATH", 2).with_preferred_teacher("T9"),
        ];
        let errors = validate_input(&teachers, &requirements).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
