//! Candidate slot search and selection.
//!
//! For a session, enumerates every feasible (day, period, teacher)
//! combination against the current grid state, then picks the one
//! whose teacher carries the least load on that day. Enumeration is
//! ascending day, then period, then teacher ID; ties on load keep the
//! first candidate in that order, so selection is fully deterministic.

use crate::models::week::{break_follows, DAYS_PER_WEEK, PERIODS_PER_DAY};

use super::index::TeacherIndex;
use super::session::{SessionKind, SessionRequest};
use super::state::ScheduleState;

/// A feasible placement for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CandidateSlot {
    pub(crate) day: usize,
    /// First occupied period; a lab also occupies `period + 1`.
    pub(crate) period: usize,
    pub(crate) teacher_id: String,
}

/// Enumerates feasible slots for a session.
pub(crate) fn find_candidates(
    session: &SessionRequest,
    index: &TeacherIndex,
    state: &ScheduleState,
) -> Vec<CandidateSlot> {
    match session.kind {
        SessionKind::Lecture => lecture_candidates(session, index, state),
        SessionKind::Lab => lab_candidates(session, index, state),
    }
}

/// Feasible (day, period, teacher) tuples for a one-period lecture.
fn lecture_candidates(
    session: &SessionRequest,
    index: &TeacherIndex,
    state: &ScheduleState,
) -> Vec<CandidateSlot> {
    let mut candidates = Vec::new();

    for day in 0..DAYS_PER_WEEK {
        for period in 0..PERIODS_PER_DAY {
            if !state.class_cell_free(&session.class_id, day, period) {
                continue;
            }

            for tid in &session.candidate_teachers {
                if !index.is_available(tid, day, period) {
                    continue;
                }
                if state.teacher_busy(tid, day, period) {
                    continue;
                }
                if state.teacher_hours(tid, day) + 1 > index.max_hours(tid) {
                    continue;
                }
                candidates.push(CandidateSlot {
                    day,
                    period,
                    teacher_id: tid.clone(),
                });
            }
        }
    }

    candidates
}

/// Feasible (day, start period, teacher) tuples for a two-period lab.
///
/// A lab occupies `period` and `period + 1` and may not start on a
/// period followed by a break, which restricts starts to the
/// contiguous pairs (0,1), (2,3), (4,5).
fn lab_candidates(
    session: &SessionRequest,
    index: &TeacherIndex,
    state: &ScheduleState,
) -> Vec<CandidateSlot> {
    let mut candidates = Vec::new();

    for day in 0..DAYS_PER_WEEK {
        for period in 0..PERIODS_PER_DAY - 1 {
            if break_follows(period) {
                continue;
            }

            if !state.class_cell_free(&session.class_id, day, period)
                || !state.class_cell_free(&session.class_id, day, period + 1)
            {
                continue;
            }

            for tid in &session.candidate_teachers {
                if !index.is_available(tid, day, period)
                    || !index.is_available(tid, day, period + 1)
                {
                    continue;
                }
                if state.teacher_busy(tid, day, period) || state.teacher_busy(tid, day, period + 1)
                {
                    continue;
                }
                if state.teacher_hours(tid, day) + 2 > index.max_hours(tid) {
                    continue;
                }
                candidates.push(CandidateSlot {
                    day,
                    period,
                    teacher_id: tid.clone(),
                });
            }
        }
    }

    candidates
}

/// Picks the candidate whose teacher has the least load on that day.
///
/// Strict `<` comparison keeps the first minimal candidate in
/// enumeration order, so ties resolve by day, then period, then
/// teacher ID.
pub(crate) fn select_least_loaded<'a>(
    candidates: &'a [CandidateSlot],
    state: &ScheduleState,
) -> Option<&'a CandidateSlot> {
    let mut best: Option<&CandidateSlot> = None;
    let mut best_load = u32::MAX;

    for c in candidates {
        let load = state.teacher_hours(&c.teacher_id, c.day);
        if load < best_load {
            best = Some(c);
            best_load = load;
        }
    }

    best
}
