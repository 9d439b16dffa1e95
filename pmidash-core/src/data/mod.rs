//! PMI sources and the fallback chain over them

pub mod investing;
pub mod provider;
pub mod resolver;
pub mod stub;

pub use investing::{extract_value, parse_calendar_page, InvestingFetcher};
pub use provider::{FailureKind, FetchError, Source, SourceFetcher};
pub use resolver::{FallbackResolver, Resolution, SourceAttempt};
pub use stub::UnavailableFetcher;
