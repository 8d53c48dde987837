//! Conflict detection between courses
//!
//! Every predicate is total: a course without time information never
//! overlaps anything.

use crate::catalog::models::Course;
use crate::times::models::{Days, Hours, DAYS};

/// True if both segments share at least one canonical day
///
/// Checked per token, so `Tu` and `Th` never match each other.
#[must_use]
pub fn days_overlap(a: &Days, b: &Days) -> bool {
    DAYS.iter().any(|day| a.contains(*day) && b.contains(*day))
}

/// Half-open overlap, intervals touching at an endpoint don't overlap
#[must_use]
pub fn hours_overlap(a: &Hours, b: &Hours) -> bool {
    a.start.max(b.start) < a.end.min(b.end)
}

/// True if both courses meet on a same day at overlapping hours
#[must_use]
pub fn time_conflict(a: &Course, b: &Course) -> bool {
    match (&a.time, &b.time) {
        (Some(ta), Some(tb)) => {
            days_overlap(&ta.days, &tb.days) && hours_overlap(&ta.hours, &tb.hours)
        }
        _ => false,
    }
}

/// Courses of different terms never conflict
#[must_use]
pub fn course_conflict(a: &Course, b: &Course) -> bool {
    a.term == b.term && time_conflict(a, b)
}

/// True if `course` conflicts with any of the `selected` courses
pub fn has_conflict<'a>(course: &Course, selected: impl IntoIterator<Item = &'a Course>) -> bool {
    selected
        .into_iter()
        .any(|other| course_conflict(course, other))
}

/// Selected courses in conflict with `course`
pub fn conflicts_with<'a>(
    course: &Course,
    selected: impl IntoIterator<Item = &'a Course>,
) -> Vec<&'a Course> {
    selected
        .into_iter()
        .filter(|other| course_conflict(course, other))
        .collect()
}
