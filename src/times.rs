use crate::times::models::{Day, Days, Hours, MeetingTime};

pub mod models;

/// Parse a meeting-time string such as `"MWF 9:00-9:50"`
///
/// Accepted form, spaces only (no tabs):
/// - optional leading spaces
/// - one or more day tokens (`M`, `Tu`, `W`, `Th`, `F`) with no separator
/// - at least one space
/// - a start time `H:MM` or `HH:MM`
/// - spaces and/or a single hyphen
/// - an end time, same format
/// - optional trailing spaces
///
/// Returns `None` when the string doesn't match, this is not an error.
/// Hours and minutes are not range checked.
#[must_use]
pub fn parse_meeting_time(text: &str) -> Option<MeetingTime> {
    let mut scanner = Scanner::new(text);

    scanner.spaces();
    let days = scanner.days()?;
    if scanner.spaces() == 0 {
        return None;
    }
    let start = scanner.time()?;
    scanner.separator()?;
    let end = scanner.time()?;
    scanner.spaces();

    scanner.is_done().then(|| MeetingTime {
        days,
        hours: Hours { start, end },
    })
}

/// Cursor over the meeting-time string
struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text }
    }

    fn is_done(&self) -> bool {
        self.rest.is_empty()
    }

    /// Skip spaces, returns how many were skipped
    fn spaces(&mut self) -> usize {
        let trimmed = self.rest.trim_start_matches(' ');
        let skipped = self.rest.len() - trimmed.len();
        self.rest = trimmed;

        skipped
    }

    /// Take the longest run of day tokens
    fn days(&mut self) -> Option<Days> {
        let segment = self.rest;
        while let Some((_, tail)) = Day::strip_prefix(self.rest) {
            self.rest = tail;
        }

        let matched = &segment[..segment.len() - self.rest.len()];
        (!matched.is_empty()).then(|| Days::new(matched))
    }

    /// Take between `min` and `max` ASCII digits
    fn digits(&mut self, min: usize, max: usize) -> Option<u32> {
        let count = self
            .rest
            .bytes()
            .take(max)
            .take_while(u8::is_ascii_digit)
            .count();
        if count < min {
            return None;
        }

        let (number, tail) = self.rest.split_at(count);
        self.rest = tail;

        number.parse().ok()
    }

    fn literal(&mut self, c: char) -> Option<()> {
        self.rest = self.rest.strip_prefix(c)?;
        Some(())
    }

    /// `H:MM` or `HH:MM`, as minutes since midnight
    fn time(&mut self) -> Option<u32> {
        let hour = self.digits(1, 2)?;
        self.literal(':')?;
        let minute = self.digits(2, 2)?;

        Some(hour * 60 + minute)
    }

    /// Spaces around at most one hyphen, at least one character in total
    fn separator(&mut self) -> Option<()> {
        let before = self.spaces();
        let hyphen = self.literal('-').is_some();
        let after = self.spaces();

        (hyphen || before + after > 0).then_some(())
    }
}
