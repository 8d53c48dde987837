use std::io;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use ::ics::{
    escape_text,
    properties::{Categories, Description, DtEnd, DtStart, RRule, Summary},
    Event, ICalendar,
};
use thiserror::Error;
use tracing::{info, warn};

use crate::catalog::models::Course;

/// Floating local time, as no timezone is known for the catalog
const DATETIME_FORMAT: &str = "%Y%m%dT%H%M%S";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("can't write the calendar: {0}")]
    Io(#[from] io::Error),

    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("a term of {0} weeks doesn't fit in the calendar")]
    InvalidWeeks(u32),
}

/// Read the first day of the term, i.e.: 2024-09-23
pub fn parse_first_day(date: &str) -> Result<NaiveDate, ExportError> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| ExportError::InvalidDate(date.to_owned()))
}

/// Build a calendar with one weekly event per course
///
/// Courses without a usable meeting time are skipped. The term lasts at
/// least one week.
pub fn build<'c>(
    courses: impl IntoIterator<Item = &'c Course>,
    first_day: NaiveDate,
    weeks: u32,
) -> Result<ICalendar<'static>, ExportError> {
    let last_day = (weeks > 0)
        .then(|| Duration::try_weeks(i64::from(weeks)))
        .flatten()
        .and_then(|length| first_day.checked_add_signed(length - Duration::days(1)))
        .ok_or(ExportError::InvalidWeeks(weeks))?;

    let mut calendar = ICalendar::new("2.0", "-//scheduler//EN");
    let dtstamp = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();

    for course in courses {
        match event(course, first_day, last_day, &dtstamp) {
            Some(event) => calendar.add_event(event),
            None => warn!(id = %course.id, meets = %course.meets, "course not exported"),
        }
    }

    Ok(calendar)
}

/// Weekly event of a course, from its first meeting on or after `first_day`
fn event(
    course: &Course,
    first_day: NaiveDate,
    last_day: NaiveDate,
    dtstamp: &str,
) -> Option<Event<'static>> {
    let time = course.time.as_ref()?;
    let start = time_of_day(time.hours.start)?;
    let end = time_of_day(time.hours.end)?;
    if start >= end {
        return None;
    }

    let day = first_day
        .iter_days()
        .take(7)
        .find(|date| time.days.iter().any(|day| day.weekday() == date.weekday()))?;
    let byday = time
        .days
        .iter()
        .map(|day| day.ical())
        .collect::<Vec<_>>()
        .join(",");
    let until = NaiveDateTime::new(last_day, NaiveTime::from_hms_opt(23, 59, 59)?);

    let mut event = Event::new(uuid::Uuid::new_v4().to_string(), dtstamp.to_owned());
    event.push(DtStart::new(
        NaiveDateTime::new(day, start).format(DATETIME_FORMAT).to_string(),
    ));
    event.push(DtEnd::new(
        NaiveDateTime::new(day, end).format(DATETIME_FORMAT).to_string(),
    ));
    event.push(RRule::new(format!(
        "FREQ=WEEKLY;BYDAY={byday};UNTIL={}",
        until.format(DATETIME_FORMAT)
    )));
    event.push(Summary::new(escape_text(course.label()).into_owned()));
    event.push(Description::new(escape_text(course.title.clone()).into_owned()));
    event.push(Categories::new(course.term.name()));

    Some(event)
}

fn time_of_day(minutes: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
}

/// Write the calendar to `filename`, adding the `.ics` extension if needed
pub fn export(calendar: &ICalendar<'_>, filename: &mut String) -> Result<(), ExportError> {
    if !filename.ends_with(".ics") {
        filename.push_str(".ics");
    }

    calendar.save_file(&*filename)?;
    info!(filename = %filename, "calendar exported");

    Ok(())
}
