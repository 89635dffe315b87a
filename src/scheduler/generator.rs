//! Generation run orchestration.
//!
//! Drives one full generation: build the teacher index, expand each
//! class's requirements, shuffle session order with the seeded PRNG,
//! and place labs then lectures class by class. Classes are processed
//! in ascending ID order; each class's commits contend with later
//! classes only through the shared teacher grids. The run either
//! completes fully or returns the first error — there is no partial
//! result.

use itertools::Itertools;
use log::{debug, info, trace};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::SchedulingError;
use crate::models::{ClassRequirement, TeacherProfile, Timetable};

use super::candidates::{find_candidates, select_least_loaded};
use super::index::TeacherIndex;
use super::session::expand_class_requirements;
use super::state::ScheduleState;

/// Seed used when none is supplied.
const DEFAULT_SEED: u64 = 42;

/// The timetable generation engine.
///
/// Pure with respect to external state: reads nothing but its
/// arguments, writes nothing but its return value. The seed fixes the
/// session shuffling order, so identical inputs and seed always
/// produce an identical timetable.
///
/// # Example
///
/// ```
/// use timegrid::models::{ClassRequirement, TeacherProfile};
/// use timegrid::scheduler::TimetableGenerator;
///
/// let teachers = vec![TeacherProfile::new("T1").with_subject("MATH")];
/// let requirements = vec![ClassRequirement::new("CSE-3A", "MATH", 2)];
///
/// let generator = TimetableGenerator::new().with_seed(7);
/// let timetable = generator.generate(&teachers, &requirements).unwrap();
/// assert_eq!(timetable.assignment_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TimetableGenerator {
    seed: u64,
}

impl TimetableGenerator {
    /// Creates a generator with the default seed.
    pub fn new() -> Self {
        Self { seed: DEFAULT_SEED }
    }

    /// Sets the PRNG seed for session ordering.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates a full timetable for all classes.
    pub fn generate(
        &self,
        teachers: &[TeacherProfile],
        requirements: &[ClassRequirement],
    ) -> Result<Timetable, SchedulingError> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        self.generate_with_rng(teachers, requirements, &mut rng)
    }

    /// Generates with a caller-supplied PRNG.
    ///
    /// The RNG only shuffles the order in which a class's otherwise
    /// equal sessions are attempted; feasibility logic never draws
    /// from it.
    pub fn generate_with_rng<R: Rng>(
        &self,
        teachers: &[TeacherProfile],
        requirements: &[ClassRequirement],
        rng: &mut R,
    ) -> Result<Timetable, SchedulingError> {
        if requirements.is_empty() {
            return Err(SchedulingError::NoClassRequirements);
        }
        if teachers.is_empty() {
            return Err(SchedulingError::NoTeachers);
        }

        let index = TeacherIndex::build(teachers);

        let by_class = requirements
            .iter()
            .map(|r| (r.class_id.clone(), r))
            .into_group_map();
        let mut class_ids: Vec<String> = by_class.keys().cloned().collect();
        class_ids.sort();

        info!(
            "scheduling {} classes against {} teachers",
            class_ids.len(),
            teachers.len()
        );

        let mut state = ScheduleState::new(class_ids.clone(), index.teacher_ids());

        for class_id in &class_ids {
            let (mut labs, mut lectures) = expand_class_requirements(&by_class[class_id], &index)?;
            labs.shuffle(rng);
            lectures.shuffle(rng);

            debug!(
                "class {class_id}: {} lab blocks, {} lectures",
                labs.len(),
                lectures.len()
            );

            for session in labs.iter().chain(lectures.iter()) {
                let candidates = find_candidates(session, &index, &state);
                let slot = select_least_loaded(&candidates, &state).ok_or_else(|| {
                    SchedulingError::NoFeasibleSlot {
                        class_id: session.class_id.clone(),
                        subject_id: session.subject_id.clone(),
                    }
                })?;

                trace!(
                    "class {class_id}: {} -> day {} period {} teacher {}",
                    session.subject_id,
                    slot.day,
                    slot.period,
                    slot.teacher_id
                );

                state.commit(
                    class_id,
                    &session.subject_id,
                    &slot.teacher_id,
                    slot.day,
                    slot.period,
                    session.kind.duration(),
                );
            }
        }

        let timetable = state.into_timetable();
        info!("scheduled {} assignments", timetable.assignment_count());
        Ok(timetable)
    }
}

impl Default for TimetableGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates a full timetable in one call.
///
/// Convenience wrapper over [`TimetableGenerator`] with an explicit
/// seed.
pub fn generate_full_timetable(
    teachers: &[TeacherProfile],
    requirements: &[ClassRequirement],
    seed: u64,
) -> Result<Timetable, SchedulingError> {
    TimetableGenerator::new()
        .with_seed(seed)
        .generate(teachers, requirements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::week::{break_follows, DAYS_PER_WEEK};
    use std::collections::HashSet;

    fn full_time_teacher(id: &str, subjects: &[&str]) -> TeacherProfile {
        let mut t = TeacherProfile::new(id);
        for s in subjects {
            t = t.with_subject(*s);
        }
        t
    }

    /// No two assignments share a class cell or a teacher cell.
    fn assert_conflict_free(timetable: &Timetable) {
        let mut class_cells = HashSet::new();
        let mut teacher_cells = HashSet::new();
        for a in &timetable.assignments {
            assert!(
                class_cells.insert((a.class_id.clone(), a.day, a.period)),
                "class double-booked at {:?}",
                (&a.class_id, a.day, a.period)
            );
            assert!(
                teacher_cells.insert((a.teacher_id.clone(), a.day, a.period)),
                "teacher double-booked at {:?}",
                (&a.teacher_id, a.day, a.period)
            );
        }
    }

    #[test]
    fn test_single_class_lectures() {
        // One fully available teacher, three lecture hours.
        let teachers = vec![full_time_teacher("T1", &["MATH"])];
        let requirements = vec![ClassRequirement::new("A", "MATH", 3)];

        let t = generate_full_timetable(&teachers, &requirements, 42).unwrap();
        assert_eq!(t.assignment_count(), 3);
        assert_conflict_free(&t);
        for day in 0..DAYS_PER_WEEK {
            assert!(t.teacher_hours_on("T1", day) <= 4);
        }
        assert!(t.assignments.iter().all(|a| a.subject_id == "MATH"));
    }

    #[test]
    fn test_single_lab_block() {
        let teachers = vec![full_time_teacher("T1", &["PHYS"])];
        let requirements = vec![ClassRequirement::new("A", "PHYS", 2).lab()];

        let t = generate_full_timetable(&teachers, &requirements, 42).unwrap();
        assert_eq!(t.assignment_count(), 2);

        let first = &t.assignments[0];
        let second = &t.assignments[1];
        assert_eq!(first.day, second.day);
        assert_eq!(first.period + 1, second.period);
        assert!(!break_follows(first.period));
        assert_eq!(first.teacher_id, second.teacher_id);
    }

    #[test]
    fn test_subject_without_any_teacher() {
        let teachers = vec![full_time_teacher("T1", &["MATH"])];
        let requirements = vec![ClassRequirement::new("A", "CHEM", 2)];

        let err = generate_full_timetable(&teachers, &requirements, 42).unwrap_err();
        assert_eq!(
            err,
            SchedulingError::NoTeacherForSubject {
                class_id: "A".into(),
                subject_id: "CHEM".into(),
            }
        );
    }

    #[test]
    fn test_incompetent_preferred_teacher_fails_before_search() {
        let teachers = vec![
            full_time_teacher("T1", &["MATH"]),
            full_time_teacher("T2", &["CHEM"]),
        ];
        let requirements = vec![
            ClassRequirement::new("A", "CHEM", 2).with_preferred_teacher("T1"),
        ];

        let err = generate_full_timetable(&teachers, &requirements, 42).unwrap_err();
        assert_eq!(
            err,
            SchedulingError::InvalidPreferredTeacher {
                class_id: "A".into(),
                subject_id: "CHEM".into(),
                teacher_id: "T1".into(),
            }
        );
    }

    #[test]
    fn test_empty_requirements() {
        let teachers = vec![full_time_teacher("T1", &["MATH"])];
        let err = generate_full_timetable(&teachers, &[], 42).unwrap_err();
        assert_eq!(err, SchedulingError::NoClassRequirements);
    }

    #[test]
    fn test_empty_teachers() {
        let requirements = vec![ClassRequirement::new("A", "MATH", 1)];
        let err = generate_full_timetable(&[], &requirements, 42).unwrap_err();
        assert_eq!(err, SchedulingError::NoTeachers);
    }

    #[test]
    fn test_preference_honored_everywhere() {
        let teachers = vec![
            full_time_teacher("T1", &["MATH"]),
            full_time_teacher("T2", &["MATH"]),
        ];
        let requirements = vec![
            ClassRequirement::new("A", "MATH", 4).with_preferred_teacher("T2"),
        ];

        let t = generate_full_timetable(&teachers, &requirements, 42).unwrap();
        assert_eq!(t.assignment_count(), 4);
        assert!(t.assignments.iter().all(|a| a.teacher_id == "T2"));
    }

    #[test]
    fn test_determinism_same_seed() {
        let teachers = vec![
            full_time_teacher("T1", &["MATH", "PHYS"]),
            full_time_teacher("T2", &["MATH", "CHEM"]),
        ];
        let requirements = vec![
            ClassRequirement::new("A", "MATH", 3),
            ClassRequirement::new("A", "PHYS", 2).lab(),
            ClassRequirement::new("B", "MATH", 2),
            ClassRequirement::new("B", "CHEM", 3),
        ];

        let a = generate_full_timetable(&teachers, &requirements, 7).unwrap();
        let b = generate_full_timetable(&teachers, &requirements, 7).unwrap();
        assert_eq!(a.assignments, b.assignments);
    }

    #[test]
    fn test_multi_class_teacher_contention() {
        // One teacher shared by three classes: 3 + 3 + 3 hours fits the
        // weekly capacity of 5 days × 4 hours, but never concurrently.
        let teachers = vec![full_time_teacher("T1", &["MATH"])];
        let requirements = vec![
            ClassRequirement::new("A", "MATH", 3),
            ClassRequirement::new("B", "MATH", 3),
            ClassRequirement::new("C", "MATH", 3),
        ];

        let t = generate_full_timetable(&teachers, &requirements, 42).unwrap();
        assert_eq!(t.assignment_count(), 9);
        assert_conflict_free(&t);
        for day in 0..DAYS_PER_WEEK {
            assert!(t.teacher_hours_on("T1", day) <= 4);
        }
    }

    #[test]
    fn test_labs_and_lectures_mixed() {
        let teachers = vec![
            full_time_teacher("T1", &["MATH", "PHYS"]),
            full_time_teacher("T2", &["PHYS", "CHEM"]),
        ];
        let requirements = vec![
            ClassRequirement::new("A", "PHYS", 4).lab(),
            ClassRequirement::new("A", "MATH", 3),
            ClassRequirement::new("A", "CHEM", 2),
        ];

        let t = generate_full_timetable(&teachers, &requirements, 42).unwrap();
        // 2 lab blocks (4 cells) + 5 lectures.
        assert_eq!(t.assignment_count(), 9);
        assert_conflict_free(&t);

        // Each lab block is contiguous with a legal start.
        let phys: Vec<_> = t
            .assignments
            .iter()
            .filter(|a| a.subject_id == "PHYS")
            .collect();
        assert_eq!(phys.len(), 4);
        for pair in phys.chunks(2) {
            assert_eq!(pair[0].day, pair[1].day);
            assert_eq!(pair[0].period + 1, pair[1].period);
            assert!(!break_follows(pair[0].period));
        }
    }

    #[test]
    fn test_infeasible_overload_fails() {
        // 8 hours for one class but the only teacher may work 1 hour/day.
        let teachers = vec![full_time_teacher("T1", &["MATH"]).with_max_hours_per_day(1)];
        let requirements = vec![ClassRequirement::new("A", "MATH", 8)];

        let err = generate_full_timetable(&teachers, &requirements, 42).unwrap_err();
        assert_eq!(
            err,
            SchedulingError::NoFeasibleSlot {
                class_id: "A".into(),
                subject_id: "MATH".into(),
            }
        );
    }

    #[test]
    fn test_load_balancing_spreads_days() {
        // Three hours with an idle week ahead: each lands on a fresh day.
        let teachers = vec![full_time_teacher("T1", &["MATH"])];
        let requirements = vec![ClassRequirement::new("A", "MATH", 3)];

        let t = generate_full_timetable(&teachers, &requirements, 42).unwrap();
        let days: HashSet<usize> = t.assignments.iter().map(|a| a.day).collect();
        assert_eq!(days.len(), 3);
    }

    #[test]
    fn test_injected_rng_controls_ordering() {
        let teachers = vec![full_time_teacher("T1", &["MATH", "PHYS"])];
        let requirements = vec![
            ClassRequirement::new("A", "MATH", 2),
            ClassRequirement::new("A", "PHYS", 2),
        ];

        let generator = TimetableGenerator::new();
        let mut rng = SmallRng::seed_from_u64(3);
        let a = generator
            .generate_with_rng(&teachers, &requirements, &mut rng)
            .unwrap();
        let mut rng = SmallRng::seed_from_u64(3);
        let b = generator
            .generate_with_rng(&teachers, &requirements, &mut rng)
            .unwrap();
        assert_eq!(a.assignments, b.assignments);
    }

    #[test]
    fn test_classes_processed_in_ascending_id_order() {
        // Both classes want the same single teacher at full stretch;
        // output order is by class ID regardless of input order.
        let teachers = vec![full_time_teacher("T1", &["MATH"])];
        let requirements = vec![
            ClassRequirement::new("B", "MATH", 1),
            ClassRequirement::new("A", "MATH", 1),
        ];

        let t = generate_full_timetable(&teachers, &requirements, 42).unwrap();
        let classes: Vec<&str> = t.assignments.iter().map(|a| a.class_id.as_str()).collect();
        assert_eq!(classes, ["A", "B"]);
    }
}
