use crate::catalog::models::Course;
use crate::selection::{state_of, CourseState, SelectionSet};
use crate::utils::{self, models::Position};

/// Widths of the columns: course, title, days, hours, state
const WIDTHS: [usize; 5] = [15, 40, 9, 13, 11];

/// Label of a state in the table
#[must_use]
pub fn state_label(state: CourseState) -> &'static str {
    match state {
        CourseState::Selected => "selected",
        CourseState::Blocked => "conflict",
        CourseState::Available => "",
    }
}

/// Days and hours of a course, or its raw meeting time when not understood
#[must_use]
pub fn describe_time(course: &Course) -> (String, String) {
    match &course.time {
        Some(time) => (
            time.days.to_string(),
            format!(
                "{}-{}",
                utils::format_minutes(time.hours.start),
                utils::format_minutes(time.hours.end)
            ),
        ),
        None => (course.meets.clone(), String::new()),
    }
}

/// Render the courses as a table, with their state relative to `selection`
#[must_use]
pub fn table<'c>(
    courses: impl IntoIterator<Item = &'c Course>,
    selection: &SelectionSet<'_>,
) -> String {
    let mut lines = vec![
        utils::line_table(&WIDTHS, &Position::Top),
        utils::row_table(&WIDTHS, &["Course", "Title", "Days", "Hours", "State"]),
    ];

    for course in courses {
        let (days, hours) = describe_time(course);
        let state = state_label(state_of(course, selection));
        lines.push(utils::line_table(&WIDTHS, &Position::Middle));
        lines.push(utils::row_table(
            &WIDTHS,
            &[
                course.label().as_str(),
                course.title.as_str(),
                days.as_str(),
                hours.as_str(),
                state,
            ],
        ));
    }

    lines.push(utils::line_table(&WIDTHS, &Position::Bottom));

    lines.join("\n")
}
