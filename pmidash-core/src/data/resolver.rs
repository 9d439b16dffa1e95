//! Fallback resolver: walks the source chain until one yields a reading.
//!
//! Sources are tried strictly in order, one at a time, with no retries. The
//! first success wins and later sources are never contacted. Every failure is
//! logged and collapsed to "no data"; callers that need to know *why* nothing
//! came back can use [`FallbackResolver::resolve_with_diagnostics`].

use tracing::{debug, info, warn};

use super::investing::InvestingFetcher;
use super::provider::{FailureKind, FetchError, Source, SourceFetcher};
use super::stub::UnavailableFetcher;
use crate::config::FetchConfig;
use crate::domain::Reading;

/// One failed source in a resolution.
#[derive(Debug)]
pub struct SourceAttempt {
    pub source: Source,
    pub error: FetchError,
}

/// Outcome of a resolution, with the failures that preceded it.
#[derive(Debug, Default)]
pub struct Resolution {
    /// Winning source and its reading.
    pub reading: Option<(Source, Reading)>,
    /// Sources that were tried and failed, in the order they were tried.
    pub failures: Vec<SourceAttempt>,
}

impl Resolution {
    pub fn reading(&self) -> Option<Reading> {
        self.reading.map(|(_, r)| r)
    }

    pub fn source(&self) -> Option<Source> {
        self.reading.map(|(s, _)| s)
    }

    /// True when at least one source failed at the network or parse level
    /// rather than simply having nothing to offer.
    pub fn had_errors(&self) -> bool {
        self.failures
            .iter()
            .any(|a| a.error.kind() != FailureKind::NoData)
    }
}

pub struct FallbackResolver {
    fetchers: Vec<Box<dyn SourceFetcher>>,
}

impl FallbackResolver {
    /// Resolver over an explicit chain, highest priority first.
    pub fn new(fetchers: Vec<Box<dyn SourceFetcher>>) -> Self {
        Self { fetchers }
    }

    /// The standard chain: Investing.com, then the placeholder sources.
    pub fn with_default_sources(config: &FetchConfig) -> Self {
        let mut fetchers: Vec<Box<dyn SourceFetcher>> = Vec::with_capacity(Source::PRIORITY.len());
        for source in Source::PRIORITY {
            match source {
                Source::Investing => fetchers.push(Box::new(InvestingFetcher::new(config))),
                other => fetchers.push(Box::new(UnavailableFetcher::new(other))),
            }
        }
        Self::new(fetchers)
    }

    /// Sources in the order they will be tried.
    pub fn sources(&self) -> Vec<Source> {
        self.fetchers.iter().map(|f| f.source()).collect()
    }

    /// First reading any source produces, or `None` if all fail.
    pub fn resolve(&self) -> Option<Reading> {
        self.resolve_with_diagnostics().reading()
    }

    pub fn resolve_with_diagnostics(&self) -> Resolution {
        let mut resolution = Resolution::default();

        for fetcher in &self.fetchers {
            let source = fetcher.source();
            match fetcher.fetch() {
                Ok(reading) => {
                    info!(
                        %source,
                        date = %reading.date,
                        value = reading.value,
                        "PMI reading resolved"
                    );
                    resolution.reading = Some((source, reading));
                    return resolution;
                }
                Err(error) => {
                    match error.kind() {
                        FailureKind::NoData => debug!(%source, %error, "no data from source"),
                        FailureKind::Transport | FailureKind::Parse => {
                            warn!(%source, %error, "source failed")
                        }
                    }
                    resolution.failures.push(SourceAttempt { source, error });
                }
            }
        }

        debug!(
            tried = resolution.failures.len(),
            "no source produced a PMI reading"
        );
        resolution
    }
}
