//! Condition predicates over student records
//!
//! A condition is a pure `fn(&Student) -> bool`. A record satisfies a set of
//! conditions iff it satisfies every one of them, so an empty set is the
//! identity filter.

use crate::student::Student;

/// A boolean predicate over a single student record
pub type Condition = fn(&Student) -> bool;

/// Check whether one student satisfies every condition
pub fn meets_all(student: &Student, conditions: &[Condition]) -> bool {
    conditions.iter().all(|condition| condition(student))
}

/// Select, preserving input order, every student satisfying all conditions
pub fn filter<'a>(students: &[&'a Student], conditions: &[Condition]) -> Vec<&'a Student> {
    students
        .iter()
        .filter(|student| meets_all(student, conditions))
        .copied()
        .collect()
}

pub fn all_students(_: &Student) -> bool {
    true
}

pub fn is_male(s: &Student) -> bool {
    s.sex == "M"
}

pub fn is_female(s: &Student) -> bool {
    s.sex == "F"
}

pub fn is_esl(s: &Student) -> bool {
    s.status == "ESL"
}

pub fn is_remedial(s: &Student) -> bool {
    s.status == "Remedial"
}

pub fn is_gifted(s: &Student) -> bool {
    s.status == "Gifted"
}

/// The empty status string denotes the default instructional status
pub fn is_normal(s: &Student) -> bool {
    s.status.is_empty()
}

pub fn scored_below_400(s: &Student) -> bool {
    s.score < 400
}

pub fn scored_400_to_499(s: &Student) -> bool {
    (400..=499).contains(&s.score)
}

pub fn scored_above_499(s: &Student) -> bool {
    s.score > 499
}
