use std::collections::{BTreeSet, HashMap, HashSet};

use chrono::NaiveDate;
use thiserror::Error;

use super::filter::Selection;
use super::model::{Category, ImmdRecord};

// ---------------------------------------------------------------------------
// SeriesSet – chart-ready columns pivoted out of the flat record table
// ---------------------------------------------------------------------------

/// Values of one location, aligned with [`SeriesSet::dates`].
/// `None` marks a date with no data for this location.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub location: String,
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSet {
    /// The measurement column the values were taken from.
    pub category: Category,
    /// Distinct dates of the input, ascending.
    pub dates: Vec<NaiveDate>,
    /// One series per location, in order of first appearance.
    pub series: Vec<Series>,
    /// Set when no cell holds a value for `category`.
    pub no_data: bool,
}

impl SeriesSet {
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.location.as_str())
    }

    pub fn get(&self, location: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.location == location)
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SeriesError {
    #[error("record {index}: missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("records {first} and {second} both describe {location} on {date}")]
    DuplicateKey {
        date: NaiveDate,
        location: String,
        first: usize,
        second: usize,
    },
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Pivot `records` into one value column per location for the selected
/// category.
///
/// * Dates are the sorted distinct dates of the input.
/// * Locations keep the order in which they first appear.
/// * A `(date, location)` pair with no record, or a record without the
///   selected category, yields `None`.
/// * Two records for the same `(date, location)` are an error.
pub fn build_series(records: &[ImmdRecord], selection: Selection) -> Result<SeriesSet, SeriesError> {
    let category = selection.category();

    let mut dates: BTreeSet<NaiveDate> = BTreeSet::new();
    let mut locations: Vec<&str> = Vec::new();
    let mut seen_locations: HashSet<&str> = HashSet::new();
    let mut by_key: HashMap<(NaiveDate, &str), usize> = HashMap::new();

    for (index, rec) in records.iter().enumerate() {
        let location = rec.location.as_str();
        if location.trim().is_empty() {
            return Err(SeriesError::MissingField {
                index,
                field: "location",
            });
        }

        dates.insert(rec.date);

        if seen_locations.insert(location) {
            locations.push(location);
        }

        if let Some(first) = by_key.insert((rec.date, location), index) {
            return Err(SeriesError::DuplicateKey {
                date: rec.date,
                location: location.to_string(),
                first,
                second: index,
            });
        }
    }

    let dates: Vec<NaiveDate> = dates.into_iter().collect();

    let series: Vec<Series> = locations
        .iter()
        .map(|&location| Series {
            location: location.to_string(),
            values: dates
                .iter()
                .map(|&date| {
                    by_key
                        .get(&(date, location))
                        .and_then(|&i| records[i].value(category))
                })
                .collect(),
        })
        .collect();

    let no_data = series.iter().all(|s| s.values.iter().all(Option::is_none));
    if no_data && !records.is_empty() {
        log::warn!("no '{category}' values in {} records", records.len());
    }
    log::debug!(
        "built '{category}' series: {} dates x {} locations",
        dates.len(),
        series.len()
    );

    Ok(SeriesSet {
        category,
        dates,
        series,
        no_data,
    })
}
