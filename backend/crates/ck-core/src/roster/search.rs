//! Client-side roster search.

use crate::{Attendee, Touchpoint};

/// Keep the records matching every keyword of `query`.
///
/// The query is lower-cased and split on whitespace. A record matches when each
/// keyword is a substring of its haystack: name, email, phone and the
/// touchpoint's descriptive field, lower-cased with whitespace collapsed. A
/// blank query returns the roster unchanged and in order.
pub fn search<'a>(
    records: &'a [Attendee],
    query: &str,
    touchpoint: Touchpoint,
) -> Vec<&'a Attendee> {
    let keywords = keywords(query);
    if keywords.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|attendee| {
            let haystack = haystack(attendee, touchpoint);
            keywords.iter().all(|kw| haystack.contains(kw.as_str()))
        })
        .collect()
}

fn keywords(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn haystack(attendee: &Attendee, touchpoint: Touchpoint) -> String {
    [
        attendee.name(),
        attendee.email(),
        attendee.mobile(),
        touchpoint.search_field(attendee).unwrap_or_default(),
    ]
    .join(" ")
    .to_lowercase()
    .split_whitespace()
    .collect::<Vec<_>>()
    .join(" ")
}
