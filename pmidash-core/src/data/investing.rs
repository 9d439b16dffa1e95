//! Investing.com economic-calendar source.
//!
//! Fetches the India Manufacturing PMI calendar page and reads the headline
//! value out of the `#economicCalendarData` table. The page layout is not a
//! published API and changes without notice; every mismatch surfaces as a
//! no-data [`FetchError`] rather than a panic.
//!
//! The reading is dated to the first day of the *current* month. The page also
//! prints the release date, but it is not parsed.

use std::sync::OnceLock;
use std::time::Duration;

use chrono::NaiveDate;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use super::provider::{FetchError, Source, SourceFetcher};
use crate::config::FetchConfig;
use crate::domain::Reading;

/// `id` attribute of the calendar table.
pub const TABLE_ID: &str = "economicCalendarData";

/// Text a row must contain to be considered.
pub const ROW_NEEDLE: &str = "Manufacturing PMI";

fn table_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("table#economicCalendarData").expect("static selector"))
}

fn row_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("tr").expect("static selector"))
}

fn cell_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("td").expect("static selector"))
}

fn value_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([0-9]{2}\.[0-9]|[0-9]{2})").expect("static regex"))
}

/// First substring of `text` that looks like a PMI value: two ASCII digits,
/// optionally followed by a point and one digit.
pub fn extract_value(text: &str) -> Option<&str> {
    value_pattern().find(text).map(|m| m.as_str())
}

/// Read the headline value out of a calendar page.
///
/// Rows whose text contains [`ROW_NEEDLE`] are tried in document order. For
/// each, the second-to-last `td` is trimmed and matched against the value
/// pattern; the first row that yields a value wins. Rows with fewer than two
/// cells, or without a match, are skipped.
pub fn parse_calendar_page(html: &str, as_of: NaiveDate) -> Result<Reading, FetchError> {
    let doc = Html::parse_document(html);
    let table = doc
        .select(table_selector())
        .next()
        .ok_or_else(|| FetchError::TableNotFound {
            table_id: TABLE_ID.to_string(),
        })?;

    let mut rows_checked = 0;
    for row in table.select(row_selector()) {
        if !element_text(&row).contains(ROW_NEEDLE) {
            continue;
        }
        rows_checked += 1;

        let cells: Vec<ElementRef> = row.select(cell_selector()).collect();
        if cells.len() < 2 {
            continue;
        }
        let cell_text = element_text(&cells[cells.len() - 2]);
        let Some(matched) = extract_value(cell_text.trim()) else {
            continue;
        };

        let value: f64 = matched.parse().map_err(|_| FetchError::InvalidValue {
            text: matched.to_string(),
        })?;
        if value == 0.0 {
            return Err(FetchError::ZeroValue {
                text: matched.to_string(),
            });
        }
        return Ok(Reading::for_month_of(as_of, value));
    }

    if rows_checked == 0 {
        Err(FetchError::RowNotFound {
            needle: ROW_NEEDLE.to_string(),
        })
    } else {
        Err(FetchError::ValueNotFound { rows_checked })
    }
}

fn element_text(el: &ElementRef) -> String {
    el.text().collect()
}

/// Investing.com fetcher.
///
/// A client that fails to build (for example an invalid `user_agent`) is kept
/// as its error and reported by every `fetch` as a transport failure, so the
/// rest of the chain still runs.
pub struct InvestingFetcher {
    client: Result<reqwest::blocking::Client, String>,
    url: String,
}

impl InvestingFetcher {
    pub fn new(config: &FetchConfig) -> Self {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(|e| {
                warn!(error = %e, "could not build HTTP client for Investing.com");
                e.to_string()
            });

        Self {
            client,
            url: config.investing_url.clone(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Download the calendar page body.
    ///
    /// The body is returned whatever the status code; a block page simply
    /// fails to contain the table.
    fn fetch_page(&self) -> Result<String, FetchError> {
        let client = self
            .client
            .as_ref()
            .map_err(|e| FetchError::Transport(e.clone()))?;
        let resp = client.get(&self.url).send()?;
        let status = resp.status();
        if !status.is_success() {
            debug!(%status, url = %self.url, "non-success status from calendar page");
        }
        Ok(resp.text()?)
    }

    /// Fetch and parse, dating the reading to the month of `as_of`.
    pub fn fetch_as_of(&self, as_of: NaiveDate) -> Result<Reading, FetchError> {
        let body = self.fetch_page()?;
        parse_calendar_page(&body, as_of)
    }
}

impl SourceFetcher for InvestingFetcher {
    fn source(&self) -> Source {
        Source::Investing
    }

    fn fetch(&self) -> Result<Reading, FetchError> {
        self.fetch_as_of(chrono::Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::provider::FailureKind;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 17).unwrap()
    }

    fn page(rows: &str) -> String {
        format!(
            r#"<html><body>
            <table id="economicCalendarData" class="genTbl">
              <thead><tr><th>Release Date</th><th>Time</th><th>Actual</th><th>Forecast</th><th>Previous</th></tr></thead>
              <tbody>{rows}</tbody>
            </table>
            </body></html>"#
        )
    }

    #[test]
    fn extracts_value_with_decimal() {
        assert_eq!(extract_value("56.1"), Some("56.1"));
        assert_eq!(extract_value("PMI: 58.7 (prelim)"), Some("58.7"));
    }

    #[test]
    fn extracts_two_digit_value_without_decimal() {
        assert_eq!(extract_value("57"), Some("57"));
        assert_eq!(extract_value("57."), Some("57"));
    }

    #[test]
    fn rejects_text_without_two_digits() {
        assert_eq!(extract_value(""), None);
        assert_eq!(extract_value("5.1"), None);
        assert_eq!(extract_value("n/a"), None);
    }

    #[test]
    fn parses_second_to_last_cell_of_matching_row() {
        let html = page(
            r#"<tr><td>Apr 01, 2024 (Mar) Manufacturing PMI</td><td>10:30</td><td>59.1</td><td>57.0</td><td>56.9</td></tr>"#,
        );
        let reading = parse_calendar_page(&html, as_of()).unwrap();
        assert_eq!(reading.value, 57.0);
        assert_eq!(reading.date, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
    }

    #[test]
    fn row_text_match_spans_cells() {
        let html = page(
            r#"<tr><td><span>India</span> <b>Manufacturing PMI</b></td><td> 58.3 </td><td>56.5</td></tr>"#,
        );
        let reading = parse_calendar_page(&html, as_of()).unwrap();
        assert_eq!(reading.value, 58.3);
    }

    #[test]
    fn missing_table_is_no_data() {
        let html = "<html><body><table id=\"other\"><tr><td>Manufacturing PMI</td><td>56.0</td><td>x</td></tr></table></body></html>";
        let err = parse_calendar_page(html, as_of()).unwrap_err();
        assert!(matches!(err, FetchError::TableNotFound { .. }));
        assert_eq!(err.kind(), FailureKind::NoData);
    }

    #[test]
    fn missing_row_is_no_data() {
        let html = page(r#"<tr><td>Services PMI</td><td>60.1</td><td>61.0</td></tr>"#);
        let err = parse_calendar_page(&html, as_of()).unwrap_err();
        assert!(matches!(err, FetchError::RowNotFound { .. }));
    }

    #[test]
    fn unmatched_cell_is_no_data() {
        let html = page(r#"<tr><td>Manufacturing PMI</td><td>&nbsp;</td><td>56.9</td></tr>"#);
        let err = parse_calendar_page(&html, as_of()).unwrap_err();
        assert!(matches!(err, FetchError::ValueNotFound { rows_checked: 1 }));
        assert_eq!(err.kind(), FailureKind::NoData);
    }

    #[test]
    fn single_cell_row_is_skipped() {
        let html = page(r#"<tr><td>Manufacturing PMI 57.5</td></tr>"#);
        let err = parse_calendar_page(&html, as_of()).unwrap_err();
        assert!(matches!(err, FetchError::ValueNotFound { rows_checked: 1 }));
    }

    #[test]
    fn later_matching_row_is_used_when_first_has_no_value() {
        let html = page(
            r#"<tr><td>May 02, 2024 (Apr) Manufacturing PMI</td><td>58.0</td><td></td><td>57.5</td></tr>
               <tr><td>Apr 01, 2024 (Mar) Manufacturing PMI</td><td>59.1</td><td>57.0</td><td>56.9</td></tr>"#,
        );
        let reading = parse_calendar_page(&html, as_of()).unwrap();
        assert_eq!(reading.value, 57.0);
    }

    #[test]
    fn zero_value_is_no_data() {
        let html = page(
            r#"<tr><td>Manufacturing PMI</td><td>00</td><td>56.9</td></tr>
               <tr><td>Manufacturing PMI</td><td>57.0</td><td>56.9</td></tr>"#,
        );
        let err = parse_calendar_page(&html, as_of()).unwrap_err();
        assert!(matches!(err, FetchError::ZeroValue { .. }));
        assert_eq!(err.kind(), FailureKind::NoData);
    }

    #[test]
    fn non_ascii_digits_are_not_values() {
        assert_eq!(extract_value("\u{0665}\u{0666}.\u{0661}"), None);
        let html = page(
            r#"<tr><td>Manufacturing PMI</td><td>٥٦.١</td><td>x</td></tr>
               <tr><td>Manufacturing PMI</td><td>57.0</td><td>56.9</td></tr>"#,
        );
        assert_eq!(parse_calendar_page(&html, as_of()).unwrap().value, 57.0);
    }

    #[test]
    fn garbage_input_never_panics() {
        for html in ["", "<<<>>>", "<table id=\"economicCalendarData\">", "\u{0}\u{1}"] {
            assert!(parse_calendar_page(html, as_of()).is_err());
        }
    }

    #[test]
    fn fetcher_uses_configured_url() {
        let cfg = FetchConfig {
            investing_url: "http://127.0.0.1:9/calendar".into(),
            ..FetchConfig::default()
        };
        let fetcher = InvestingFetcher::new(&cfg);
        assert_eq!(fetcher.url(), "http://127.0.0.1:9/calendar");
        assert_eq!(fetcher.source(), Source::Investing);
    }

    #[test]
    fn unreachable_host_is_an_error() {
        // Port 9 (discard) on loopback is closed on test machines.
        let cfg = FetchConfig {
            investing_url: "http://127.0.0.1:9/calendar".into(),
            timeout_secs: Some(2),
            ..FetchConfig::default()
        };
        let fetcher = InvestingFetcher::new(&cfg);
        assert!(fetcher.fetch().is_err());
    }

    #[test]
    fn invalid_user_agent_fails_at_fetch_time() {
        let cfg = FetchConfig {
            user_agent: "bad\nagent".into(),
            ..FetchConfig::default()
        };
        let fetcher = InvestingFetcher::new(&cfg);
        let err = fetcher.fetch().unwrap_err();
        assert_eq!(err.kind(), FailureKind::Transport);
    }
}
