//! Teacher profile model.
//!
//! A teacher profile is an immutable snapshot of one teacher's subject
//! competence, weekly availability, and daily workload cap. Profiles
//! are read once at the start of a generation run; the engine never
//! consults any other source about a teacher.
//!
//! # Availability
//!
//! Availability maps a day index (0..4) to the periods (0..6) the
//! teacher can be scheduled on that day. A day absent from the map
//! means the teacher is fully available that day; an empty profile
//! map means fully available all week.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn default_max_hours() -> u32 {
    4
}

/// A teacher with competence, availability, and a daily hour cap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherProfile {
    /// Unique teacher identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Subject IDs this teacher is qualified to teach.
    #[serde(default)]
    pub subjects: Vec<String>,
    /// Day index → available period indices. Missing days are fully
    /// available.
    #[serde(default)]
    pub availability: HashMap<usize, Vec<usize>>,
    /// Maximum teaching hours per day (default 4).
    #[serde(default = "default_max_hours")]
    pub max_hours_per_day: u32,
}

impl TeacherProfile {
    /// Creates a profile with full availability and the default daily cap.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            subjects: Vec::new(),
            availability: HashMap::new(),
            max_hours_per_day: default_max_hours(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a subject to the competence set.
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.subjects.push(subject_id.into());
        self
    }

    /// Restricts availability on one day to the given periods.
    ///
    /// Days never set remain fully available.
    pub fn with_availability(mut self, day: usize, periods: impl Into<Vec<usize>>) -> Self {
        self.availability.insert(day, periods.into());
        self
    }

    /// Sets the daily teaching hour cap.
    pub fn with_max_hours_per_day(mut self, hours: u32) -> Self {
        self.max_hours_per_day = hours;
        self
    }

    /// Whether this teacher is qualified for a subject.
    pub fn teaches(&self, subject_id: &str) -> bool {
        self.subjects.iter().any(|s| s == subject_id)
    }
}
