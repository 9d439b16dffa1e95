//! Source fetcher trait and structured error types.
//!
//! The SourceFetcher trait abstracts over the sites a PMI reading can come from
//! so the resolver can walk them in priority order and tests can substitute
//! doubles.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Reading;

/// Sites a reading can be fetched from, in default priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Investing,
    EconomicTimes,
    Moneycontrol,
    SpGlobal,
    TradingView,
}

impl Source {
    /// All sources, highest priority first.
    pub const PRIORITY: [Source; 5] = [
        Source::Investing,
        Source::EconomicTimes,
        Source::Moneycontrol,
        Source::SpGlobal,
        Source::TradingView,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Source::Investing => "Investing.com",
            Source::EconomicTimes => "Economic Times",
            Source::Moneycontrol => "Moneycontrol",
            Source::SpGlobal => "S&P Global",
            Source::TradingView => "TradingView",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a fetch produced no reading.
///
/// Callers outside the resolver only ever see "no data"; the variants exist so
/// logs can tell an outage apart from a page that simply has nothing new.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("table '#{table_id}' not found in page")]
    TableNotFound { table_id: String },

    #[error("no row containing '{needle}'")]
    RowNotFound { needle: String },

    #[error("no value matching the PMI pattern in {rows_checked} candidate row(s)")]
    ValueNotFound { rows_checked: usize },

    #[error("could not parse '{text}' as a PMI value")]
    InvalidValue { text: String },

    #[error("PMI value '{text}' is zero")]
    ZeroValue { text: String },

    #[error("{site} fetcher is not implemented")]
    Unavailable { site: Source },
}

/// Coarse classification of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The source answered but had nothing usable.
    NoData,
    /// Network or HTTP failure before any content was inspected.
    Transport,
    /// Content was found but could not be turned into a reading.
    Parse,
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Transport(_) => FailureKind::Transport,
            Self::InvalidValue { .. } => FailureKind::Parse,
            Self::TableNotFound { .. }
            | Self::RowNotFound { .. }
            | Self::ValueNotFound { .. }
            | Self::ZeroValue { .. }
            | Self::Unavailable { .. } => FailureKind::NoData,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Transport(e.to_string())
    }
}

/// A site that can produce the current PMI reading.
pub trait SourceFetcher: Send + Sync {
    fn source(&self) -> Source;

    /// Attempt one retrieval. Blocking; performs at most one request.
    fn fetch(&self) -> Result<Reading, FetchError>;
}
