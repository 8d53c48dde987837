//! Courses chosen by the user
//!
//! The set itself never checks for conflicts: callers only offer `toggle`
//! for courses whose state allows it.

use crate::catalog::models::Course;
use crate::conflict::has_conflict;

/// Ordered selection, most recently added first, unique by course id
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet<'c> {
    courses: Vec<&'c Course>,
}

impl<'c> SelectionSet<'c> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, course: &Course) -> bool {
        self.courses.iter().any(|member| member.id == course.id)
    }

    /// Remove `course` if selected, otherwise put it in front
    #[must_use]
    pub fn toggle(mut self, course: &'c Course) -> Self {
        if self.contains(course) {
            self.courses.retain(|member| member.id != course.id);
        } else {
            self.courses.insert(0, course);
        }

        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &'c Course> + '_ {
        self.courses.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl<'s, 'c> IntoIterator for &'s SelectionSet<'c> {
    type Item = &'c Course;
    type IntoIter = std::iter::Copied<std::slice::Iter<'s, &'c Course>>;

    fn into_iter(self) -> Self::IntoIter {
        self.courses.iter().copied()
    }
}

/// Where a course stands relative to a selection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CourseState {
    Selected,
    /// Not selected and in conflict with a selected course
    Blocked,
    Available,
}

impl CourseState {
    /// Blocked courses can't be toggled, deselecting is always allowed
    #[must_use]
    pub fn offers_toggle(self) -> bool {
        !matches!(self, Self::Blocked)
    }
}

/// Compute the state of `course`, from the whole selection
#[must_use]
pub fn state_of(course: &Course, selection: &SelectionSet<'_>) -> CourseState {
    if selection.contains(course) {
        CourseState::Selected
    } else if has_conflict(course, selection.iter()) {
        CourseState::Blocked
    } else {
        CourseState::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::{RawCourse, Term};

    fn course(id: &str, term: Term, meets: &str) -> Course {
        Course::enrich(
            id,
            &RawCourse {
                term,
                number: id.to_owned(),
                title: String::new(),
                meets: meets.to_owned(),
            },
        )
    }

    fn ids(selection: &SelectionSet<'_>) -> Vec<String> {
        selection.iter().map(|course| course.id.clone()).collect()
    }

    #[test]
    fn toggle_prepends_and_removes() {
        let a = course("a", Term::Fall, "M 9:00-9:50");
        let b = course("b", Term::Fall, "Tu 9:00-9:50");
        let c = course("c", Term::Fall, "W 9:00-9:50");

        let selection = SelectionSet::new().toggle(&a).toggle(&b).toggle(&c);
        assert_eq!(ids(&selection), ["c", "b", "a"]);

        let selection = selection.toggle(&b);
        assert_eq!(ids(&selection), ["c", "a"]);
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn member_toggled_twice_moves_to_front() {
        let a = course("a", Term::Fall, "M 9:00-9:50");
        let b = course("b", Term::Fall, "Tu 9:00-9:50");
        let c = course("c", Term::Fall, "W 9:00-9:50");

        let selection = SelectionSet::new().toggle(&a).toggle(&b).toggle(&c);
        assert_eq!(ids(&selection), ["c", "b", "a"]);

        let selection = selection.toggle(&b).toggle(&b);
        assert_eq!(ids(&selection), ["b", "c", "a"]);
    }

    #[test]
    fn membership_is_by_id() {
        let a = course("a", Term::Fall, "M 9:00-9:50");
        let copy = a.clone();

        let selection = SelectionSet::new().toggle(&a);
        assert!(selection.contains(&copy));
        assert!(selection.toggle(&copy).is_empty());
    }

    #[test]
    fn states_follow_the_selection() {
        let a = course("a", Term::Fall, "MWF 9:00-9:50");
        let b = course("b", Term::Fall, "MWF 9:30-10:20");
        let c = course("c", Term::Winter, "MWF 9:00-9:50");

        let empty = SelectionSet::new();
        assert_eq!(state_of(&b, &empty), CourseState::Available);

        let selection = empty.toggle(&a);
        assert_eq!(state_of(&a, &selection), CourseState::Selected);
        assert_eq!(state_of(&b, &selection), CourseState::Blocked);
        assert_eq!(state_of(&c, &selection), CourseState::Available);
        assert!(!state_of(&b, &selection).offers_toggle());
        assert!(state_of(&a, &selection).offers_toggle());

        let selection = selection.toggle(&a);
        assert_eq!(state_of(&b, &selection), CourseState::Available);
    }

    #[test]
    fn toggle_does_not_validate() {
        let a = course("a", Term::Fall, "MWF 9:00-9:50");
        let b = course("b", Term::Fall, "MWF 9:30-10:20");

        let selection = SelectionSet::new().toggle(&a).toggle(&b);
        assert_eq!(ids(&selection), ["b", "a"]);
    }
}
