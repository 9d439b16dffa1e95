//! History loading for a single run.
//!
//! Every run starts from the seeded series and tries to add one fresh reading:
//! 1. If offline → seeded history only, no network access
//! 2. Otherwise → ask the resolver; a reading for a month not yet in the
//!    history is inserted
//! 3. If no source produces a reading → seeded history, silently
//!
//! A total outage and "nothing new this month" look the same to callers.

use pmidash_core::data::{FallbackResolver, Source};
use pmidash_core::domain::{History, Reading};
use tracing::{debug, info};

/// Options controlling how the history is assembled.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// If true, never make network requests.
    pub offline: bool,
}

/// The history for this run plus where its newest point came from.
#[derive(Debug, Clone)]
pub struct LoadedHistory {
    pub history: History,
    /// Reading returned by the resolver, whether or not it was new.
    pub fetched: Option<(Source, Reading)>,
    /// Whether `fetched` added a month to the history.
    pub appended: bool,
}

impl LoadedHistory {
    fn seeded_only() -> Self {
        Self {
            history: History::seeded(),
            fetched: None,
            appended: false,
        }
    }
}

/// Build this run's history.
pub fn load_history(resolver: &FallbackResolver, opts: &LoadOptions) -> LoadedHistory {
    if opts.offline {
        debug!("offline: using seeded history only");
        return LoadedHistory::seeded_only();
    }

    let resolution = resolver.resolve_with_diagnostics();
    let mut loaded = LoadedHistory::seeded_only();

    if let Some((source, reading)) = resolution.reading {
        loaded.appended = merge_reading(&mut loaded.history, reading);
        loaded.fetched = Some((source, reading));
    } else if resolution.had_errors() {
        debug!(
            failures = resolution.failures.len(),
            "sources failed; continuing with seeded history"
        );
    }

    loaded
}

/// Insert `reading` unless its month is already present.
pub fn merge_reading(history: &mut History, reading: Reading) -> bool {
    let appended = history.insert(reading);
    if appended {
        info!(date = %reading.date, value = reading.value, "appended fresh reading");
    } else {
        debug!(date = %reading.date, "month already in history; reading ignored");
    }
    appended
}
