//! Weekly timetable generation for schools and colleges.
//!
//! Assigns teaching sessions — single-period lectures and contiguous
//! two-period lab blocks — to day/period slots on a fixed weekly grid
//! (5 days × 7 periods), subject to teacher availability, per-teacher
//! daily hour caps, and slot exclusivity for both classes and teachers.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TeacherProfile`, `ClassRequirement`,
//!   `Assignment`, `Timetable`, weekly grid constants
//! - **`scheduler`**: The generation engine — `TimetableGenerator`,
//!   `generate_full_timetable`
//! - **`validation`**: Input integrity checks (duplicate IDs, dangling
//!   teacher references, out-of-range availability)
//! - **`error`**: The scheduling error taxonomy
//!
//! # Algorithm
//!
//! A single-pass greedy assignment: per class, lab blocks are placed
//! first, then lectures, each into the feasible slot whose teacher
//! carries the least load on that day. Session order within a class is
//! shuffled by a seeded PRNG, so identical inputs and seed always
//! reproduce the same timetable. There is no backtracking; an
//! unsatisfiable session aborts the whole run.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
