//! Application state for the dashboard page.

use std::path::PathBuf;

use pmidash_report::{save_history_csv, ChartModel, LoadedHistory, Summary};

/// Severity of the status-bar message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

pub struct AppState {
    pub running: bool,
    pub loaded: LoadedHistory,
    pub chart: ChartModel,
    pub summary: Option<Summary>,
    /// Whether the export panel is expanded.
    pub export_open: bool,
    /// Where the CSV is written.
    pub export_path: PathBuf,
    /// Path of the last successful export in this session.
    pub last_export: Option<PathBuf>,
    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(loaded: LoadedHistory, export_path: PathBuf) -> Self {
        let chart = ChartModel::from_history(&loaded.history);
        let summary = Summary::from_history(&loaded.history);
        let mut app = Self {
            running: true,
            loaded,
            chart,
            summary,
            export_open: false,
            export_path,
            last_export: None,
            status_message: None,
        };
        app.set_status(app.fetch_status());
        app
    }

    /// One-line description of what the fetch contributed.
    ///
    /// Never mentions failures: an outage and "nothing new" read the same.
    pub fn fetch_status(&self) -> String {
        match (&self.loaded.fetched, self.loaded.appended) {
            (Some((source, reading)), true) => format!(
                "Latest {:.1} for {} from {}",
                reading.value,
                reading.date.format("%b %Y"),
                source
            ),
            _ => "Showing stored history".to_string(),
        }
    }

    pub fn toggle_export(&mut self) {
        self.export_open = !self.export_open;
    }

    /// Write the CSV export, reporting the outcome in the status bar.
    pub fn export_csv(&mut self) {
        match save_history_csv(&self.loaded.history, &self.export_path) {
            Ok(()) => {
                self.set_status(format!(
                    "Saved {} rows to {}",
                    self.loaded.history.len(),
                    self.export_path.display()
                ));
                self.last_export = Some(self.export_path.clone());
            }
            Err(e) => self.set_error(format!("Export failed: {e:#}")),
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{seeded_only, with_april};

    #[test]
    fn status_names_fresh_reading() {
        let app = AppState::new(with_april(), PathBuf::from("x.csv"));
        let (msg, level) = app.status_message.clone().unwrap();
        assert_eq!(msg, "Latest 57.0 for Apr 2024 from Investing.com");
        assert_eq!(level, StatusLevel::Info);
        assert_eq!(app.chart.points.len(), 13);
    }

    #[test]
    fn status_is_neutral_without_fresh_reading() {
        let app = AppState::new(seeded_only(), PathBuf::from("x.csv"));
        assert_eq!(app.fetch_status(), "Showing stored history");
        assert_eq!(app.summary.as_ref().unwrap().months, 12);
    }

    #[test]
    fn toggle_export_flips_panel() {
        let mut app = AppState::new(seeded_only(), PathBuf::from("x.csv"));
        assert!(!app.export_open);
        app.toggle_export();
        assert!(app.export_open);
        app.toggle_export();
        assert!(!app.export_open);
    }

    #[test]
    fn export_writes_file_and_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("india_pmi_data.csv");
        let mut app = AppState::new(seeded_only(), path.clone());

        app.export_csv();

        assert_eq!(app.last_export.as_deref(), Some(path.as_path()));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 13);
        assert_eq!(app.status_message.unwrap().1, StatusLevel::Info);
    }

    #[test]
    fn failed_export_sets_error_status() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be overwritten as a file.
        let mut app = AppState::new(seeded_only(), dir.path().to_path_buf());

        app.export_csv();

        assert!(app.last_export.is_none());
        let (msg, level) = app.status_message.unwrap();
        assert_eq!(level, StatusLevel::Error);
        assert!(msg.starts_with("Export failed"));
    }
}
