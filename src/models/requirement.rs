//! Class subject requirement model.
//!
//! A requirement states how many hours per week a class takes a
//! subject, whether those hours are lab hours (scheduled as contiguous
//! two-period blocks), and optionally which teacher must take them.
//! The (class, subject) pair is unique across the input set.

use serde::{Deserialize, Serialize};

/// Weekly hours of one subject for one class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassRequirement {
    /// Class (section) identifier, e.g. `"CSE-3A"`.
    pub class_id: String,
    /// Subject identifier.
    pub subject_id: String,
    /// Hours per week (≥ 1).
    pub hours_per_week: u32,
    /// Whether the hours are lab hours. Lab hours are scheduled in
    /// two-period blocks; an odd remainder hour is not scheduled.
    #[serde(default)]
    pub is_lab: bool,
    /// Teacher who must take this subject for this class. When set,
    /// that teacher must list the subject in their competence set.
    #[serde(default)]
    pub preferred_teacher_id: Option<String>,
}

impl ClassRequirement {
    /// Creates a lecture requirement.
    pub fn new(
        class_id: impl Into<String>,
        subject_id: impl Into<String>,
        hours_per_week: u32,
    ) -> Self {
        Self {
            class_id: class_id.into(),
            subject_id: subject_id.into(),
            hours_per_week,
            is_lab: false,
            preferred_teacher_id: None,
        }
    }

    /// Marks the hours as lab hours.
    pub fn lab(mut self) -> Self {
        self.is_lab = true;
        self
    }

    /// Pins the requirement to a specific teacher.
    pub fn with_preferred_teacher(mut self, teacher_id: impl Into<String>) -> Self {
        self.preferred_teacher_id = Some(teacher_id.into());
        self
    }
}
