//! Mutable grid state for one generation run.
//!
//! Owns the per-class occupancy grids, per-teacher busy grids, and
//! per-teacher daily hour counters. Created empty at the start of a
//! run, mutated only by [`ScheduleState::commit`], and consumed into
//! the final [`Timetable`] at the end. Nothing outlives the run.

use std::collections::HashMap;

use crate::models::week::{DAYS_PER_WEEK, PERIODS_PER_DAY};
use crate::models::{Assignment, Timetable};

/// Occupant of one class grid cell.
#[derive(Debug, Clone)]
struct SlotEntry {
    subject_id: String,
    teacher_id: String,
}

/// All mutable scheduling state for one run.
#[derive(Debug)]
pub(crate) struct ScheduleState {
    /// class → day×period occupancy.
    class_cells: HashMap<String, Vec<Vec<Option<SlotEntry>>>>,
    /// teacher → day×period busy flags.
    teacher_busy: HashMap<String, Vec<Vec<bool>>>,
    /// teacher → hours committed per day.
    teacher_hours: HashMap<String, Vec<u32>>,
    /// Class IDs in output order (ascending).
    class_ids: Vec<String>,
}

impl ScheduleState {
    /// Creates empty grids for the given classes and teachers.
    ///
    /// `class_ids` must already be sorted; it fixes the order
    /// assignments are emitted in.
    pub(crate) fn new(class_ids: Vec<String>, teacher_ids: &[String]) -> Self {
        let class_cells = class_ids
            .iter()
            .map(|cid| {
                (
                    cid.clone(),
                    vec![vec![None; PERIODS_PER_DAY]; DAYS_PER_WEEK],
                )
            })
            .collect();
        let teacher_busy = teacher_ids
            .iter()
            .map(|tid| {
                (
                    tid.clone(),
                    vec![vec![false; PERIODS_PER_DAY]; DAYS_PER_WEEK],
                )
            })
            .collect();
        let teacher_hours = teacher_ids
            .iter()
            .map(|tid| (tid.clone(), vec![0; DAYS_PER_WEEK]))
            .collect();

        Self {
            class_cells,
            teacher_busy,
            teacher_hours,
            class_ids,
        }
    }

    /// Whether a class's cell is unoccupied.
    pub(crate) fn class_cell_free(&self, class_id: &str, day: usize, period: usize) -> bool {
        self.class_cells
            .get(class_id)
            .is_some_and(|grid| grid[day][period].is_none())
    }

    /// Whether a teacher is already committed at (day, period).
    pub(crate) fn teacher_busy(&self, teacher_id: &str, day: usize, period: usize) -> bool {
        self.teacher_busy
            .get(teacher_id)
            .is_some_and(|grid| grid[day][period])
    }

    /// Hours a teacher has committed on a day so far.
    pub(crate) fn teacher_hours(&self, teacher_id: &str, day: usize) -> u32 {
        self.teacher_hours
            .get(teacher_id)
            .map(|hours| hours[day])
            .unwrap_or(0)
    }

    /// Commits a session: occupies `duration` contiguous class cells
    /// starting at `period`, marks the teacher busy there, and adds
    /// the duration to the teacher's daily load.
    pub(crate) fn commit(
        &mut self,
        class_id: &str,
        subject_id: &str,
        teacher_id: &str,
        day: usize,
        period: usize,
        duration: usize,
    ) {
        for p in period..period + duration {
            if let Some(grid) = self.class_cells.get_mut(class_id) {
                grid[day][p] = Some(SlotEntry {
                    subject_id: subject_id.to_string(),
                    teacher_id: teacher_id.to_string(),
                });
            }
            if let Some(grid) = self.teacher_busy.get_mut(teacher_id) {
                grid[day][p] = true;
            }
        }
        if let Some(hours) = self.teacher_hours.get_mut(teacher_id) {
            hours[day] += duration as u32;
        }
    }

    /// Consumes the grids into the final timetable, emitting occupied
    /// cells in ascending (class, day, period) order.
    pub(crate) fn into_timetable(self) -> Timetable {
        let mut assignments = Vec::new();
        for cid in &self.class_ids {
            let grid = &self.class_cells[cid];
            for (day, row) in grid.iter().enumerate() {
                for (period, cell) in row.iter().enumerate() {
                    if let Some(entry) = cell {
                        assignments.push(Assignment::new(
                            cid.clone(),
                            entry.subject_id.clone(),
                            entry.teacher_id.clone(),
                            day,
                            period,
                        ));
                    }
                }
            }
        }
        Timetable::from_assignments(assignments)
    }
}
