//! Timetable (solution) model.
//!
//! A timetable is the complete set of slot assignments produced by one
//! generation run. Each assignment binds one class, subject, and
//! teacher to one (day, period) cell; a two-period lab block appears
//! as two assignments on consecutive periods. Assignments are ordered
//! by ascending (class, day, period).

use serde::{Deserialize, Serialize};

use super::week::{DAYS_PER_WEEK, PERIODS_PER_DAY};

/// One scheduled cell of the weekly grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Class taking the session.
    pub class_id: String,
    /// Subject taught.
    pub subject_id: String,
    /// Teacher taking the session.
    pub teacher_id: String,
    /// Day index (0..4).
    pub day: usize,
    /// Period index (0..6).
    pub period: usize,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(
        class_id: impl Into<String>,
        subject_id: impl Into<String>,
        teacher_id: impl Into<String>,
        day: usize,
        period: usize,
    ) -> Self {
        Self {
            class_id: class_id.into(),
            subject_id: subject_id.into(),
            teacher_id: teacher_id.into(),
            day,
            period,
        }
    }
}

/// A complete weekly timetable.
///
/// Wraps the flat assignment list with grid-oriented queries. The
/// per-class and per-teacher grid views mirror how the timetable is
/// rendered: one 5×7 matrix per class or teacher.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timetable {
    /// All assignments, ordered by ascending (class, day, period).
    pub assignments: Vec<Assignment>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an assignment list.
    pub fn from_assignments(assignments: Vec<Assignment>) -> Self {
        Self { assignments }
    }

    /// Number of assignments (lab blocks count as two).
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// All assignments for a class.
    pub fn assignments_for_class(&self, class_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.class_id == class_id)
            .collect()
    }

    /// All assignments for a teacher.
    pub fn assignments_for_teacher(&self, teacher_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.teacher_id == teacher_id)
            .collect()
    }

    /// The assignment occupying a class's cell, if any.
    pub fn assignment_at(&self, class_id: &str, day: usize, period: usize) -> Option<&Assignment> {
        self.assignments
            .iter()
            .find(|a| a.class_id == class_id && a.day == day && a.period == period)
    }

    /// A class's week as a day×period grid of cell references.
    ///
    /// Assignments addressing cells outside the 5×7 grid are skipped.
    pub fn class_grid(&self, class_id: &str) -> Vec<Vec<Option<&Assignment>>> {
        let mut grid = vec![vec![None; PERIODS_PER_DAY]; DAYS_PER_WEEK];
        for a in self.assignments.iter().filter(|a| {
            a.class_id == class_id && a.day < DAYS_PER_WEEK && a.period < PERIODS_PER_DAY
        }) {
            grid[a.day][a.period] = Some(a);
        }
        grid
    }

    /// A teacher's week as a day×period grid of cell references.
    ///
    /// Assignments addressing cells outside the 5×7 grid are skipped.
    pub fn teacher_grid(&self, teacher_id: &str) -> Vec<Vec<Option<&Assignment>>> {
        let mut grid = vec![vec![None; PERIODS_PER_DAY]; DAYS_PER_WEEK];
        for a in self.assignments.iter().filter(|a| {
            a.teacher_id == teacher_id && a.day < DAYS_PER_WEEK && a.period < PERIODS_PER_DAY
        }) {
            grid[a.day][a.period] = Some(a);
        }
        grid
    }

    /// Hours a teacher is assigned on a given day.
    pub fn teacher_hours_on(&self, teacher_id: &str, day: usize) -> u32 {
        self.assignments
            .iter()
            .filter(|a| a.teacher_id == teacher_id && a.day == day)
            .count() as u32
    }
}
