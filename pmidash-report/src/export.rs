//! Export: CSV, JSON, and Markdown renderings of the PMI history.
//!
//! - **CSV**: `Date,Value`, one row per month, ISO dates
//! - **JSON**: a single reading, for scripting against `pmidash latest`
//! - **Markdown**: the history table with a headline summary

use std::path::Path;

use anyhow::{Context, Result};
use pmidash_core::data::Source;
use pmidash_core::domain::{History, Reading};

use crate::summary::Summary;

// ─── CSV export ─────────────────────────────────────────────────────

pub const CSV_HEADER: [&str; 2] = ["Date", "Value"];

/// Export the history as CSV with `Date` and `Value` columns.
pub fn export_history_csv(history: &History) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(CSV_HEADER)?;
    for r in history {
        wtr.write_record([r.date.format("%Y-%m-%d").to_string(), format!("{:.1}", r.value)])?;
    }
    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// Write the CSV export to `path`, creating parent directories as needed.
pub fn save_history_csv(history: &History, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    let csv = export_history_csv(history)?;
    std::fs::write(path, csv).with_context(|| format!("failed to write {}", path.display()))
}

// ─── JSON export ────────────────────────────────────────────────────

#[derive(serde::Serialize)]
struct ReadingRecord<'a> {
    source: &'a str,
    date: String,
    value: f64,
}

/// Serialize a fetched reading and its source to pretty JSON.
pub fn export_reading_json(source: Source, reading: &Reading) -> Result<String> {
    let record = ReadingRecord {
        source: source.name(),
        date: reading.date.format("%Y-%m-%d").to_string(),
        value: reading.value,
    };
    serde_json::to_string_pretty(&record).context("failed to serialize reading to JSON")
}

// ─── Markdown report ────────────────────────────────────────────────

/// Markdown report: summary table followed by the full history.
pub fn generate_report(history: &History) -> String {
    let mut md = String::with_capacity(1024);

    md.push_str("# India Manufacturing PMI\n\n");

    if let Some(s) = Summary::from_history(history) {
        md.push_str("## Summary\n\n");
        md.push_str("| Field | Value |\n");
        md.push_str("| --- | --- |\n");
        md.push_str(&format!(
            "| Latest | {:.1} ({}) |\n",
            s.latest.value,
            s.latest.date.format("%b %Y")
        ));
        if let Some(change) = s.change {
            md.push_str(&format!("| Change | {:+.1} |\n", change));
        }
        md.push_str(&format!("| Regime | {} |\n", s.regime.label()));
        md.push_str(&format!(
            "| High | {:.1} ({}) |\n",
            s.high.value,
            s.high.date.format("%b %Y")
        ));
        md.push_str(&format!(
            "| Low | {:.1} ({}) |\n",
            s.low.value,
            s.low.date.format("%b %Y")
        ));
        md.push_str(&format!(
            "| Expansion streak | {} |\n",
            Summary::expansion_streak(history)
        ));
        md.push_str(&format!("| Months | {} |\n", s.months));
        md.push('\n');
    }

    md.push_str("## History\n\n");
    md.push_str("| Date | Value |\n");
    md.push_str("| --- | --- |\n");
    for r in history {
        md.push_str(&format!("| {} | {:.1} |\n", r.date.format("%Y-%m-%d"), r.value));
    }

    md
}
