//! Integration tests for the load → export pipeline.
//!
//! These tests run the full per-run flow against fixture sources and check
//! the CSV artifact a user would download.

use chrono::NaiveDate;
use pmidash_core::data::{
    parse_calendar_page, FallbackResolver, FetchError, Source, SourceFetcher, UnavailableFetcher,
};
use pmidash_core::domain::Reading;
use pmidash_report::{
    export_history_csv, load_history, save_history_csv, ChartModel, LoadOptions,
};

struct FixturePage(&'static str);

impl SourceFetcher for FixturePage {
    fn source(&self) -> Source {
        Source::Investing
    }

    fn fetch(&self) -> Result<Reading, FetchError> {
        parse_calendar_page(self.0, NaiveDate::from_ymd_opt(2024, 4, 12).unwrap())
    }
}

const PAGE: &str = r#"<table id="economicCalendarData"><tbody>
<tr><td>Apr 01, 2024 (Mar)</td><td>Manufacturing PMI</td><td>59.1</td><td>57.0</td><td>56.9</td></tr>
</tbody></table>"#;

fn default_chain(first: Box<dyn SourceFetcher>) -> FallbackResolver {
    let mut fetchers = vec![first];
    for s in &Source::PRIORITY[1..] {
        fetchers.push(Box::new(UnavailableFetcher::new(*s)) as Box<dyn SourceFetcher>);
    }
    FallbackResolver::new(fetchers)
}

#[test]
fn fetched_month_lands_in_exported_csv() {
    let resolver = default_chain(Box::new(FixturePage(PAGE)));
    let loaded = load_history(&resolver, &LoadOptions::default());
    assert!(loaded.appended);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("india_pmi_data.csv");
    save_history_csv(&loaded.history, &path).unwrap();

    let csv = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 14);
    assert_eq!(lines[0], "Date,Value");
    assert_eq!(lines[13], "2024-04-01,57.0");
}

#[test]
fn failed_fetch_exports_seeded_history_only() {
    let resolver = default_chain(Box::new(FixturePage("<html>maintenance</html>")));
    let loaded = load_history(&resolver, &LoadOptions::default());
    assert!(loaded.fetched.is_none());

    let csv = export_history_csv(&loaded.history).unwrap();
    assert_eq!(csv.lines().count(), 13);
    assert!(csv.ends_with("2024-03-01,56.3\n"));
}

#[test]
fn chart_model_reflects_appended_month() {
    let resolver = default_chain(Box::new(FixturePage(PAGE)));
    let loaded = load_history(&resolver, &LoadOptions::default());
    let model = ChartModel::from_history(&loaded.history);

    assert_eq!(model.points.len(), 13);
    assert_eq!(model.x_labels.last().map(String::as_str), Some("Apr 2024"));
}
