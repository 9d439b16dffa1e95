//! History: the date-ordered series shown on the chart.
//!
//! Invariants:
//! - readings are sorted by date, ascending
//! - at most one reading per date; a reading whose date is already present is
//!   ignored rather than overwriting the existing value

use chrono::NaiveDate;
use serde::Serialize;

use super::reading::Reading;

/// First month of the built-in series.
const SEED_START: (i32, u32) = (2023, 4);

/// Published values for April 2023 through March 2024.
const SEED_VALUES: [f64; 12] = [
    57.2, 58.7, 57.8, 57.7, 58.6, 57.5, 55.5, 56.0, 56.9, 56.5, 56.9, 56.3,
];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct History {
    readings: Vec<Reading>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed twelve-month series every run starts from.
    pub fn seeded() -> Self {
        let (year, month) = SEED_START;
        let readings = SEED_VALUES
            .iter()
            .enumerate()
            .filter_map(|(i, &value)| {
                let offset = month - 1 + i as u32;
                let date = NaiveDate::from_ymd_opt(year + (offset / 12) as i32, offset % 12 + 1, 1)?;
                Some(Reading::new(date, value))
            })
            .collect();
        Self { readings }
    }

    /// Insert `reading` at its sorted position.
    ///
    /// Returns `false` and leaves the history untouched when a reading for the
    /// same date already exists.
    pub fn insert(&mut self, reading: Reading) -> bool {
        match self.readings.binary_search_by_key(&reading.date, |r| r.date) {
            Ok(_) => false,
            Err(pos) => {
                self.readings.insert(pos, reading);
                true
            }
        }
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.readings
            .binary_search_by_key(&date, |r| r.date)
            .is_ok()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&Reading> {
        self.readings
            .binary_search_by_key(&date, |r| r.date)
            .ok()
            .map(|i| &self.readings[i])
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn first(&self) -> Option<&Reading> {
        self.readings.first()
    }

    pub fn last(&self) -> Option<&Reading> {
        self.readings.last()
    }

    /// The reading before the latest one, if any.
    pub fn previous(&self) -> Option<&Reading> {
        self.readings.iter().rev().nth(1)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reading> {
        self.readings.iter()
    }

    pub fn as_slice(&self) -> &[Reading] {
        &self.readings
    }
}

impl FromIterator<Reading> for History {
    /// Builds a history by inserting each reading in turn; later duplicates of
    /// a date are dropped.
    fn from_iter<I: IntoIterator<Item = Reading>>(iter: I) -> Self {
        let mut history = History::new();
        for reading in iter {
            history.insert(reading);
        }
        history
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Reading;
    type IntoIter = std::slice::Iter<'a, Reading>;

    fn into_iter(self) -> Self::IntoIter {
        self.readings.iter()
    }
}
