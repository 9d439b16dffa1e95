//! Headline statistics over a history.

use pmidash_core::domain::{History, Reading, Regime};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub latest: Reading,
    pub previous: Option<Reading>,
    /// Latest minus previous, in index points.
    pub change: Option<f64>,
    pub regime: Regime,
    pub high: Reading,
    pub low: Reading,
    pub months: usize,
}

impl Summary {
    /// `None` for an empty history.
    pub fn from_history(history: &History) -> Option<Self> {
        let latest = *history.last()?;
        let previous = history.previous().copied();
        let mut high = latest;
        let mut low = latest;
        for r in history {
            // Ties keep the earliest month.
            if r.value > high.value || (r.value == high.value && r.date < high.date) {
                high = *r;
            }
            if r.value < low.value || (r.value == low.value && r.date < low.date) {
                low = *r;
            }
        }

        Some(Self {
            latest,
            previous,
            change: previous.map(|p| round1(latest.value - p.value)),
            regime: latest.regime(),
            high,
            low,
            months: history.len(),
        })
    }

    /// Months in the history at or above the neutral level.
    pub fn expansion_streak(history: &History) -> usize {
        history
            .iter()
            .rev()
            .take_while(|r| r.regime() != Regime::Contraction)
            .count()
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
