//! Timetabling domain models.
//!
//! Provides the input and output types for weekly timetable generation.
//! Inputs are immutable snapshots for the duration of one run: teacher
//! profiles (competence, availability, daily hour caps) and per-class
//! subject requirements. The output is a flat list of slot assignments
//! wrapped in a [`Timetable`] with grid-oriented query helpers.
//!
//! # Grid Geometry
//!
//! The week is a fixed 5×7 grid (see [`week`]): days 0..4, periods 0..6,
//! with breaks after periods 1, 3, and 5. Lab blocks occupy two
//! contiguous periods and may not straddle a break.

pub mod week;

mod requirement;
mod teacher;
mod timetable;

pub use requirement::ClassRequirement;
pub use teacher::TeacherProfile;
pub use timetable::{Assignment, Timetable};
