//! Normalized teacher lookup tables.
//!
//! Built once per run from the raw teacher profiles. Normalization
//! fills the gaps the input may leave open: days absent from a
//! profile's availability map become fully available, and a zero or
//! missing daily cap becomes the default of 4 hours.

use std::collections::HashMap;

use crate::models::week::{DAYS_PER_WEEK, PERIODS_PER_DAY};
use crate::models::TeacherProfile;

const DEFAULT_MAX_HOURS_PER_DAY: u32 = 4;

/// Competence, availability, and load caps, keyed for slot search.
#[derive(Debug)]
pub(crate) struct TeacherIndex {
    /// subject → teacher IDs competent in it, ascending by ID.
    by_subject: HashMap<String, Vec<String>>,
    /// teacher → day×period availability matrix.
    availability: HashMap<String, Vec<Vec<bool>>>,
    /// teacher → daily hour cap.
    max_hours: HashMap<String, u32>,
    /// All teacher IDs, ascending.
    teacher_ids: Vec<String>,
}

impl TeacherIndex {
    /// Builds the index from raw profiles.
    pub(crate) fn build(teachers: &[TeacherProfile]) -> Self {
        let mut by_subject: HashMap<String, Vec<String>> = HashMap::new();
        let mut availability = HashMap::new();
        let mut max_hours = HashMap::new();
        let mut teacher_ids = Vec::with_capacity(teachers.len());

        for t in teachers {
            teacher_ids.push(t.id.clone());

            let cap = if t.max_hours_per_day == 0 {
                DEFAULT_MAX_HOURS_PER_DAY
            } else {
                t.max_hours_per_day
            };
            max_hours.insert(t.id.clone(), cap);

            let mut matrix = vec![vec![false; PERIODS_PER_DAY]; DAYS_PER_WEEK];
            for (day, row) in matrix.iter_mut().enumerate() {
                match t.availability.get(&day) {
                    // Day absent from the map: fully available.
                    None => row.fill(true),
                    Some(periods) => {
                        for &p in periods {
                            if p < PERIODS_PER_DAY {
                                row[p] = true;
                            }
                        }
                    }
                }
            }
            availability.insert(t.id.clone(), matrix);

            for subject in &t.subjects {
                by_subject
                    .entry(subject.clone())
                    .or_default()
                    .push(t.id.clone());
            }
        }

        // Stable candidate enumeration order: ascending teacher ID.
        for ids in by_subject.values_mut() {
            ids.sort();
        }
        teacher_ids.sort();

        Self {
            by_subject,
            availability,
            max_hours,
            teacher_ids,
        }
    }

    /// Teachers competent in a subject, ascending by ID.
    pub(crate) fn teachers_for(&self, subject_id: &str) -> &[String] {
        self.by_subject
            .get(subject_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether a teacher can be scheduled at (day, period).
    pub(crate) fn is_available(&self, teacher_id: &str, day: usize, period: usize) -> bool {
        self.availability
            .get(teacher_id)
            .is_some_and(|m| m[day][period])
    }

    /// A teacher's daily hour cap.
    pub(crate) fn max_hours(&self, teacher_id: &str) -> u32 {
        self.max_hours
            .get(teacher_id)
            .copied()
            .unwrap_or(DEFAULT_MAX_HOURS_PER_DAY)
    }

    /// All known teacher IDs, ascending.
    pub(crate) fn teacher_ids(&self) -> &[String] {
        &self.teacher_ids
    }
}
