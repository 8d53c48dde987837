use std::fmt;

use chrono::Weekday;
use serde::Serialize;

/// Canonical day tokens, in week order
pub const DAYS: [Day; 5] = [Day::M, Day::Tu, Day::W, Day::Th, Day::F];

/// A weekday on which a course can meet
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Day {
    M,
    Tu,
    W,
    Th,
    F,
}

impl Day {
    /// Token as written in a meeting-time string
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::M => "M",
            Self::Tu => "Tu",
            Self::W => "W",
            Self::Th => "Th",
            Self::F => "F",
        }
    }

    #[must_use]
    pub fn weekday(self) -> Weekday {
        match self {
            Self::M => Weekday::Mon,
            Self::Tu => Weekday::Tue,
            Self::W => Weekday::Wed,
            Self::Th => Weekday::Thu,
            Self::F => Weekday::Fri,
        }
    }

    /// Two letters code used by iCalendar recurrence rules
    #[must_use]
    pub fn ical(self) -> &'static str {
        match self {
            Self::M => "MO",
            Self::Tu => "TU",
            Self::W => "WE",
            Self::Th => "TH",
            Self::F => "FR",
        }
    }

    /// Match one day token at the start of `text`, returns the day and the rest
    ///
    /// `T` alone is not a day: `Tu` and `Th` are only ever read as a whole.
    #[must_use]
    pub fn strip_prefix(text: &str) -> Option<(Self, &str)> {
        DAYS.iter()
            .find_map(|day| text.strip_prefix(day.token()).map(|rest| (*day, rest)))
    }
}

/// Days a course meets, exactly as matched in the meeting-time string
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Days(String);

impl Days {
    /// Wrap an already matched day segment
    pub(crate) fn new(segment: &str) -> Self {
        Self(segment.to_owned())
    }

    /// Read a whole string as a non-empty run of day tokens
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let mut rest = text;
        while let Some((_, tail)) = Day::strip_prefix(rest) {
            rest = tail;
        }

        (rest.is_empty() && !text.is_empty()).then(|| Self::new(text))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the canonical token of `day` appears in the segment
    #[must_use]
    pub fn contains(&self, day: Day) -> bool {
        self.0.contains(day.token())
    }

    /// Iterate over the tokens of the segment, in string order
    pub fn iter(&self) -> impl Iterator<Item = Day> + '_ {
        let mut rest = self.0.as_str();
        std::iter::from_fn(move || {
            let (day, tail) = Day::strip_prefix(rest)?;
            rest = tail;
            Some(day)
        })
    }
}

impl fmt::Display for Days {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Half-open interval of minutes since midnight
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Hours {
    pub start: u32,
    pub end: u32,
}

/// Parsed form of a meeting-time string
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MeetingTime {
    pub days: Days,
    pub hours: Hours,
}
