//! Placeholder fetchers for sources without a scraper yet.

use super::provider::{FetchError, Source, SourceFetcher};
use crate::domain::Reading;

/// A source slot in the fallback chain that never produces a reading.
///
/// Keeps the priority order stable so a real scraper can replace the slot
/// without reshuffling the chain.
#[derive(Debug, Clone, Copy)]
pub struct UnavailableFetcher {
    site: Source,
}

impl UnavailableFetcher {
    pub fn new(site: Source) -> Self {
        Self { site }
    }
}

impl SourceFetcher for UnavailableFetcher {
    fn source(&self) -> Source {
        self.site
    }

    fn fetch(&self) -> Result<Reading, FetchError> {
        Err(FetchError::Unavailable { site: self.site })
    }
}
