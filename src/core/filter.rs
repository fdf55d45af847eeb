//! # Search Filtering
//!
//! Decides what the list area shows for a given endpoint: a loading
//! indicator, an empty state, a "no matches" message, or the filtered rows.
//! The four views are mutually exclusive and checked in that order.

use crate::core::record::Record;

/// Fields a search term is matched against, when present on a record.
pub const SEARCH_FIELDS: [&str; 3] = ["title", "name", "body"];

/// What the list renderer should draw.
#[derive(Debug, PartialEq)]
pub enum ListView<'a> {
    Loading,
    Empty,
    NoMatches,
    Items {
        /// Records passing the filter, in stored order.
        shown: Vec<&'a Record>,
        /// Number of stored records before filtering.
        total: usize,
    },
}

/// Case-insensitive substring match across the searchable fields (logical OR).
///
/// An empty term matches everything. A record with none of the fields never
/// matches a non-empty term.
pub fn matches(record: &Record, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    SEARCH_FIELDS
        .iter()
        .filter_map(|field| record.text_field(field))
        .any(|value| value.to_lowercase().contains(&needle))
}

pub fn filter_records<'a>(records: &'a [Record], term: &str) -> Vec<&'a Record> {
    records.iter().filter(|r| matches(r, term)).collect()
}

pub fn classify<'a>(items: Option<&'a [Record]>, loading: bool, term: &str) -> ListView<'a> {
    if loading {
        return ListView::Loading;
    }
    let records = match items {
        Some(records) if !records.is_empty() => records,
        _ => return ListView::Empty,
    };
    let shown = filter_records(records, term);
    if shown.is_empty() {
        return ListView::NoMatches;
    }
    ListView::Items {
        shown,
        total: records.len(),
    }
}
