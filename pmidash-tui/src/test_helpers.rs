//! Test helpers for creating dashboard data

use chrono::NaiveDate;
use pmidash_core::data::Source;
use pmidash_core::domain::{History, Reading};
use pmidash_report::LoadedHistory;

use crate::app::AppState;

/// Seeded history, nothing fetched.
pub fn seeded_only() -> LoadedHistory {
    LoadedHistory {
        history: History::seeded(),
        fetched: None,
        appended: false,
    }
}

/// Seeded history plus a fresh April 2024 reading from Investing.com.
pub fn with_april() -> LoadedHistory {
    let reading = Reading::new(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(), 57.0);
    let mut history = History::seeded();
    history.insert(reading);
    LoadedHistory {
        history,
        fetched: Some((Source::Investing, reading)),
        appended: true,
    }
}

pub fn test_app() -> AppState {
    AppState::new(seeded_only(), "india_pmi_data.csv".into())
}
