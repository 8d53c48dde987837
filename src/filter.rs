use dialoguer::{Error, Select};
use tracing::{debug, info};

use crate::catalog::models::{Catalog, Course, Term};
use crate::conflict::conflicts_with;
use crate::display;
use crate::selection::{state_of, CourseState, SelectionSet};

const DISCLAIMER: &str = "(ENTER to toggle, ESC when done)";

/// Ask for the term to browse, Fall is proposed first
pub fn term() -> Result<Term, Error> {
    let names = Term::ALL.map(Term::name);
    let choice = Select::new()
        .with_prompt("Pick a term")
        .items(&names)
        .default(0)
        .interact()?;

    Ok(Term::ALL[choice])
}

/// Build a selection among the courses of `term`
///
/// Only courses that are selected or free of conflicts are offered, the
/// states are recomputed after every toggle.
pub fn courses(catalog: &Catalog, term: Term) -> Result<SelectionSet<'_>, Error> {
    let term_courses = catalog.term_courses(term).collect::<Vec<_>>();
    let mut selection = SelectionSet::new();
    let mut cursor = 0;

    loop {
        println!("{}", display::table(term_courses.iter().copied(), &selection));
        log_blocked(&term_courses, &selection);

        let offered = term_courses
            .iter()
            .copied()
            .filter(|course| state_of(course, &selection).offers_toggle())
            .collect::<Vec<_>>();
        if offered.is_empty() {
            return Ok(selection);
        }

        let items = offered
            .iter()
            .map(|course| item(course, &selection))
            .collect::<Vec<_>>();
        let Some(choice) = Select::new()
            .with_prompt(format!("Pick your courses {DISCLAIMER}"))
            .items(&items)
            .default(cursor.min(items.len() - 1))
            .interact_opt()?
        else {
            return Ok(selection);
        };

        let course = offered[choice];
        selection = selection.toggle(course);
        info!(id = %course.id, selected = selection.contains(course), "toggled");
        cursor = choice;
    }
}

/// Names showed to the users
fn item(course: &Course, selection: &SelectionSet<'_>) -> String {
    let mark = match state_of(course, selection) {
        CourseState::Selected => 'x',
        _ => ' ',
    };
    let (days, hours) = display::describe_time(course);

    format!("[{mark}] {} - {} {days} {hours}", course.label(), course.title)
}

fn log_blocked(courses: &[&Course], selection: &SelectionSet<'_>) {
    for course in courses {
        let blockers = conflicts_with(course, selection.iter());
        if !selection.contains(course) && !blockers.is_empty() {
            let ids = blockers
                .iter()
                .map(|blocker| blocker.id.as_str())
                .collect::<Vec<_>>();
            debug!(id = %course.id, conflicts = ?ids, "blocked");
        }
    }
}
