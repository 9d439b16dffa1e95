//! Chart model: the PMI trend line and its reference levels, as plain data.
//!
//! Renderers (the TUI) only draw what this produces. X coordinates are days
//! since the common era so months keep their true spacing.

use chrono::{Datelike, NaiveDate};
use pmidash_core::domain::{History, NEUTRAL_LEVEL, STRONG_EXPANSION_LEVEL};

pub const CHART_TITLE: &str = "India Manufacturing PMI";
pub const X_LABEL: &str = "Date";
pub const Y_LABEL: &str = "PMI Value";

/// A horizontal dashed line across the whole chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceLine {
    pub value: f64,
    pub label: &'static str,
}

pub const REFERENCE_LINES: [ReferenceLine; 2] = [
    ReferenceLine {
        value: NEUTRAL_LEVEL,
        label: "Neutral (50)",
    },
    ReferenceLine {
        value: STRONG_EXPANSION_LEVEL,
        label: "Strong Expansion (55)",
    },
];

/// Vertical headroom above and below the plotted range.
const Y_PADDING: f64 = 1.0;

/// Horizontal padding when the series has fewer than two points.
const X_PADDING_DAYS: f64 = 15.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// (x, value) pairs sorted by x.
    pub points: Vec<(f64, f64)>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    /// Tick labels for first, middle and last month.
    pub x_labels: Vec<String>,
    /// Tick labels for lower bound, midpoint, upper bound.
    pub y_labels: Vec<String>,
    pub references: Vec<ReferenceLine>,
}

impl ChartModel {
    pub fn from_history(history: &History) -> Self {
        let points: Vec<(f64, f64)> = history
            .iter()
            .map(|r| (date_to_x(r.date), r.value))
            .collect();

        let x_bounds = match (history.first(), history.last()) {
            (Some(a), Some(b)) if a.date < b.date => [date_to_x(a.date), date_to_x(b.date)],
            (Some(a), _) => {
                let x = date_to_x(a.date);
                [x - X_PADDING_DAYS, x + X_PADDING_DAYS]
            }
            _ => [0.0, 1.0],
        };

        // Always include both reference levels so the lines are visible.
        let (lo, hi) = points.iter().fold(
            (NEUTRAL_LEVEL, STRONG_EXPANSION_LEVEL),
            |(lo, hi), &(_, v)| (lo.min(v), hi.max(v)),
        );
        let y_bounds = [(lo - Y_PADDING).floor(), (hi + Y_PADDING).ceil()];

        let x_labels = match (history.first(), history.last()) {
            (Some(a), Some(b)) => {
                let mid = history.as_slice()[history.len() / 2].date;
                vec![month_label(a.date), month_label(mid), month_label(b.date)]
            }
            _ => Vec::new(),
        };

        let y_mid = (y_bounds[0] + y_bounds[1]) / 2.0;
        let y_labels = vec![
            format!("{:.0}", y_bounds[0]),
            format!("{:.1}", y_mid),
            format!("{:.0}", y_bounds[1]),
        ];

        Self {
            title: CHART_TITLE,
            x_label: X_LABEL,
            y_label: Y_LABEL,
            points,
            x_bounds,
            y_bounds,
            x_labels,
            y_labels,
            references: REFERENCE_LINES.to_vec(),
        }
    }

    /// Endpoints of a reference line spanning the x range.
    pub fn reference_segment(&self, line: &ReferenceLine) -> [(f64, f64); 2] {
        [(self.x_bounds[0], line.value), (self.x_bounds[1], line.value)]
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

pub fn date_to_x(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// Short month label, e.g. `Apr 2023`.
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}
