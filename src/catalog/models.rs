use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::times::{self, models::MeetingTime};

/// Academic term, keyed `F`, `W` or `S` in the catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    #[serde(rename = "F")]
    Fall,
    #[serde(rename = "W")]
    Winter,
    #[serde(rename = "S")]
    Spring,
}

impl Term {
    pub const ALL: [Self; 3] = [Self::Fall, Self::Winter, Self::Spring];

    /// Key used by the catalog
    #[must_use]
    pub fn key(self) -> char {
        match self {
            Self::Fall => 'F',
            Self::Winter => 'W',
            Self::Spring => 'S',
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Fall => "Fall",
            Self::Winter => "Winter",
            Self::Spring => "Spring",
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Term {
    type Err = String;

    /// Accept the key or the full name, whatever the case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|term| {
                wanted.eq_ignore_ascii_case(term.name())
                    || wanted.eq_ignore_ascii_case(&term.key().to_string())
            })
            .ok_or_else(|| format!("unknown term `{wanted}`, expected one of F, W, S"))
    }
}

/// Course as supplied by the catalog
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCourse {
    pub term: Term,
    /// Course code, i.e.: 213
    pub number: String,
    pub title: String,
    /// Meeting time, i.e.: MWF 9:00-9:50
    pub meets: String,
}

/// Catalog as supplied by the data source
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCatalog {
    pub title: String,
    pub courses: BTreeMap<String, RawCourse>,
}

/// Course with its parsed meeting time
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Course {
    /// Key of the course in the catalog
    #[serde(skip)]
    pub id: String,

    pub term: Term,
    pub number: String,
    pub title: String,
    pub meets: String,

    /// Days and hours, `None` when `meets` couldn't be parsed
    #[serde(flatten)]
    pub time: Option<MeetingTime>,
}

impl Course {
    /// Attach the parsed meeting time to a copy of `raw`
    #[must_use]
    pub fn enrich(id: &str, raw: &RawCourse) -> Self {
        Self {
            id: id.to_owned(),
            term: raw.term,
            number: raw.number.clone(),
            title: raw.title.clone(),
            meets: raw.meets.clone(),
            time: times::parse_meeting_time(&raw.meets),
        }
    }

    /// Name showed to the users, i.e.: Fall CS 213
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} CS {}", self.term, self.number)
    }
}

/// Catalog whose courses carry their parsed meeting time
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub title: String,
    pub courses: BTreeMap<String, Course>,
}

impl Catalog {
    /// Courses of a term, ordered by key
    pub fn term_courses(&self, term: Term) -> impl Iterator<Item = &Course> {
        self.courses.values().filter(move |course| course.term == term)
    }
}
