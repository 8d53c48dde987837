use proptest::prelude::*;
use regex::Regex;

use scheduler::catalog::models::{Course, RawCourse, Term};
use scheduler::conflict::{days_overlap, hours_overlap};
use scheduler::selection::SelectionSet;
use scheduler::times::{models::Days, models::Hours, parse_meeting_time};

/// Pattern the meeting-time grammar was first written as
const REFERENCE: &str =
    r"^ *((?:M|Tu|W|Th|F)+) +([0-9][0-9]?):([0-9][0-9]) *[ -] *([0-9][0-9]?):([0-9][0-9]) *$";

fn reference(text: &str) -> Option<(String, u32, u32)> {
    let captures = Regex::new(REFERENCE).unwrap().captures(text)?;
    let number = |i: usize| captures[i].parse::<u32>().unwrap();

    Some((
        captures[1].to_owned(),
        number(2) * 60 + number(3),
        number(4) * 60 + number(5),
    ))
}

fn course(id: usize) -> Course {
    Course::enrich(
        &id.to_string(),
        &RawCourse {
            term: Term::Fall,
            number: id.to_string(),
            title: String::new(),
            meets: format!("M {id}:00-{id}:50"),
        },
    )
}

proptest! {
    #[test]
    fn parser_agrees_with_reference(
        text in " {0,2}(M|Tu|W|Th|F|T|h|m){0,4} {0,2}[0-9]{0,3}:?[0-9]{0,3} {0,2}-{0,2} {0,2}[0-9]{0,3}:?[0-9]{0,3} {0,2}"
    ) {
        let parsed = parse_meeting_time(&text)
            .map(|time| (time.days.as_str().to_owned(), time.hours.start, time.hours.end));
        prop_assert_eq!(parsed, reference(&text));
    }

    #[test]
    fn valid_strings_parse_to_minutes(
        days in "(M|Tu|W|Th|F){1,5}",
        h1 in 0u32..24, m1 in 0u32..60,
        h2 in 0u32..24, m2 in 0u32..60,
    ) {
        let time = parse_meeting_time(&format!("{days} {h1}:{m1:02}-{h2}:{m2:02}")).unwrap();
        prop_assert_eq!(time.days.as_str(), days.as_str());
        prop_assert_eq!(time.hours, Hours { start: h1 * 60 + m1, end: h2 * 60 + m2 });
    }

    #[test]
    fn overlaps_are_symmetric(
        a in "(M|Tu|W|Th|F){1,5}",
        b in "(M|Tu|W|Th|F){1,5}",
        s1 in 0u32..1440, e1 in 0u32..1440,
        s2 in 0u32..1440, e2 in 0u32..1440,
    ) {
        let (a, b) = (Days::parse(&a).unwrap(), Days::parse(&b).unwrap());
        prop_assert_eq!(days_overlap(&a, &b), days_overlap(&b, &a));

        let (h1, h2) = (Hours { start: s1, end: e1 }, Hours { start: s2, end: e2 });
        prop_assert_eq!(hours_overlap(&h1, &h2), hours_overlap(&h2, &h1));
    }

    #[test]
    fn toggle_is_its_own_inverse(
        members in proptest::sample::subsequence((0..8).collect::<Vec<usize>>(), 0..8),
        candidate in 0usize..8,
    ) {
        let courses = (0..8).map(course).collect::<Vec<_>>();
        let selection = members
            .iter()
            .fold(SelectionSet::new(), |selection, i| selection.toggle(&courses[*i]));

        let twice = selection.clone().toggle(&courses[candidate]).toggle(&courses[candidate]);

        let ids = |set: &SelectionSet<'_>| set.iter().map(|c| c.id.clone()).collect::<Vec<_>>();
        let candidate_id = courses[candidate].id.clone();
        let expected = if selection.contains(&courses[candidate]) {
            // Back in front, the others keep their order
            std::iter::once(candidate_id.clone())
                .chain(ids(&selection).into_iter().filter(|id| *id != candidate_id))
                .collect()
        } else {
            ids(&selection)
        };
        prop_assert_eq!(ids(&twice), expected);
    }
}
