//! The timetable generation engine.
//!
//! A single-pass greedy scheduler over the weekly grid. Classes are
//! processed in ascending ID order; within a class, lab blocks are
//! placed before lectures, and the session order within each kind is
//! shuffled by a seeded PRNG. Each session goes to the feasible slot
//! whose teacher has the least load on that day; commits are final.
//!
//! Not optimal and not maximal: an unsatisfiable session aborts the
//! whole run rather than triggering backtracking.
//!
//! # Usage
//!
//! ```
//! use timegrid::models::{ClassRequirement, TeacherProfile};
//! use timegrid::scheduler::generate_full_timetable;
//!
//! let teachers = vec![TeacherProfile::new("T1").with_subject("MATH")];
//! let requirements = vec![ClassRequirement::new("CSE-3A", "MATH", 3)];
//!
//! let timetable = generate_full_timetable(&teachers, &requirements, 42).unwrap();
//! assert_eq!(timetable.assignment_count(), 3);
//! ```
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"

mod candidates;
mod generator;
mod index;
mod session;
mod state;

pub use generator::{generate_full_timetable, TimetableGenerator};
