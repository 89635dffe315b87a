//! Requirement expansion into atomic sessions.
//!
//! Each class requirement expands into the individual sessions the
//! slot search places one at a time: one request per lecture hour, one
//! per two-hour lab block. Expansion also resolves each session's
//! candidate teacher set — all competent teachers, or exactly the
//! pinned one — so the search never consults raw profiles.
//!
//! An odd lab hour count leaves a remainder hour that is NOT
//! scheduled: a lab hour only exists as half of a contiguous block.

use crate::error::SchedulingError;
use crate::models::ClassRequirement;

use super::index::TeacherIndex;

/// What kind of session a request is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionKind {
    /// One period.
    Lecture,
    /// Two contiguous periods not straddling a break.
    Lab,
}

impl SessionKind {
    /// Periods the session occupies.
    pub(crate) fn duration(self) -> usize {
        match self {
            Self::Lecture => 1,
            Self::Lab => 2,
        }
    }
}

/// One atomic unit of placement work.
#[derive(Debug, Clone)]
pub(crate) struct SessionRequest {
    pub(crate) class_id: String,
    pub(crate) subject_id: String,
    pub(crate) kind: SessionKind,
    /// Teachers the session may go to, ascending by ID (or exactly the
    /// preferred teacher).
    pub(crate) candidate_teachers: Vec<String>,
}

/// Expands a class's requirements into (lab, lecture) session lists.
///
/// Candidate teacher sets are resolved here, before any slot search
/// for the class: a pinned teacher lacking competence fails with
/// [`SchedulingError::InvalidPreferredTeacher`], and a subject nobody
/// can teach fails with [`SchedulingError::NoTeacherForSubject`].
pub(crate) fn expand_class_requirements(
    requirements: &[&ClassRequirement],
    index: &TeacherIndex,
) -> Result<(Vec<SessionRequest>, Vec<SessionRequest>), SchedulingError> {
    let mut labs = Vec::new();
    let mut lectures = Vec::new();

    for req in requirements {
        let candidates = resolve_candidates(req, index)?;

        if req.is_lab {
            // Odd remainder hour dropped; see module docs.
            let blocks = req.hours_per_week / 2;
            for _ in 0..blocks {
                labs.push(SessionRequest {
                    class_id: req.class_id.clone(),
                    subject_id: req.subject_id.clone(),
                    kind: SessionKind::Lab,
                    candidate_teachers: candidates.clone(),
                });
            }
        } else {
            for _ in 0..req.hours_per_week {
                lectures.push(SessionRequest {
                    class_id: req.class_id.clone(),
                    subject_id: req.subject_id.clone(),
                    kind: SessionKind::Lecture,
                    candidate_teachers: candidates.clone(),
                });
            }
        }
    }

    Ok((labs, lectures))
}

fn resolve_candidates(
    req: &ClassRequirement,
    index: &TeacherIndex,
) -> Result<Vec<String>, SchedulingError> {
    let competent = index.teachers_for(&req.subject_id);

    if let Some(preferred) = &req.preferred_teacher_id {
        if !competent.iter().any(|id| id == preferred) {
            return Err(SchedulingError::InvalidPreferredTeacher {
                class_id: req.class_id.clone(),
                subject_id: req.subject_id.clone(),
                teacher_id: preferred.clone(),
            });
        }
        return Ok(vec![preferred.clone()]);
    }

    if competent.is_empty() {
        return Err(SchedulingError::NoTeacherForSubject {
            class_id: req.class_id.clone(),
            subject_id: req.subject_id.clone(),
        });
    }
    Ok(competent.to_vec())
}
