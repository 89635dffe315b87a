//! Scheduling error taxonomy.
//!
//! Every error aborts the whole generation run; no partial timetable
//! is ever returned. Variants carry the failing class/subject/teacher
//! IDs as structured fields so callers can pattern-match without
//! parsing messages.

use std::fmt;

/// A terminal scheduling failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    /// The input requirement set is empty.
    NoClassRequirements,
    /// The input teacher set is empty.
    NoTeachers,
    /// A requirement pins a teacher who does not list the subject in
    /// their competence set.
    InvalidPreferredTeacher {
        class_id: String,
        subject_id: String,
        teacher_id: String,
    },
    /// No teacher at all is competent for a required subject.
    NoTeacherForSubject {
        class_id: String,
        subject_id: String,
    },
    /// Exhaustive candidate search found no feasible slot for a session.
    NoFeasibleSlot {
        class_id: String,
        subject_id: String,
    },
}

impl fmt::Display for SchedulingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoClassRequirements => write!(f, "no class/subject requirements defined"),
            Self::NoTeachers => write!(f, "no teachers defined"),
            Self::InvalidPreferredTeacher {
                class_id,
                subject_id,
                teacher_id,
            } => write!(
                f,
                "assigned teacher '{teacher_id}' for subject '{subject_id}' in class \
                 '{class_id}' does not have this subject in their profile"
            ),
            Self::NoTeacherForSubject {
                class_id,
                subject_id,
            } => write!(
                f,
                "no teacher available to teach subject '{subject_id}' for class '{class_id}'"
            ),
            Self::NoFeasibleSlot {
                class_id,
                subject_id,
            } => write!(
                f,
                "cannot schedule all sessions for class '{class_id}', subject '{subject_id}': \
                 constraints too tight or insufficient teacher availability"
            ),
        }
    }
}

impl std::error::Error for SchedulingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_contains_context() {
        let e = SchedulingError::NoFeasibleSlot {
            class_id: "CSE-3A".into(),
            subject_id: "MATH".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("CSE-3A"));
        assert!(msg.contains("MATH"));
    }

    #[test]
    fn test_variants_are_matchable() {
        let e = SchedulingError::InvalidPreferredTeacher {
            class_id: "A".into(),
            subject_id: "S".into(),
            teacher_id: "T".into(),
        };
        match e {
            SchedulingError::InvalidPreferredTeacher { teacher_id, .. } => {
                assert_eq!(teacher_id, "T");
            }
            _ => panic!("wrong variant"),
        }
    }
}
