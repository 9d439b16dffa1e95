//! Reading: a single PMI observation.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Headline value separating contraction from expansion.
pub const NEUTRAL_LEVEL: f64 = 50.0;

/// Headline value at and above which the sector is in strong expansion.
pub const STRONG_EXPANSION_LEVEL: f64 = 55.0;

/// One monthly PMI print.
///
/// `date` is always the first day of the month the value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub date: NaiveDate,
    pub value: f64,
}

impl Reading {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }

    /// Build a reading dated to the first day of the month containing `day`.
    pub fn for_month_of(day: NaiveDate, value: f64) -> Self {
        Self {
            date: month_start(day),
            value,
        }
    }

    pub fn regime(&self) -> Regime {
        Regime::classify(self.value)
    }
}

/// First day of the month containing `day`.
pub fn month_start(day: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month, so this cannot fail.
    day.with_day(1).unwrap_or(day)
}

/// Where a PMI value sits relative to the two reference levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Regime {
    Contraction,
    Expansion,
    StrongExpansion,
}

impl Regime {
    pub fn classify(value: f64) -> Self {
        if value >= STRONG_EXPANSION_LEVEL {
            Regime::StrongExpansion
        } else if value >= NEUTRAL_LEVEL {
            Regime::Expansion
        } else {
            Regime::Contraction
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Regime::Contraction => "contraction",
            Regime::Expansion => "expansion",
            Regime::StrongExpansion => "strong expansion",
        }
    }
}
