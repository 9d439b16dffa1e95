//! pmidash core: India Manufacturing PMI readings, sources, and history.
//!
//! This crate contains:
//! - Domain types (`Reading`, `History`, `Regime`)
//! - The `SourceFetcher` trait and the Investing.com scraper
//! - Placeholder fetchers for sources without a scraper
//! - The fallback resolver that walks sources in priority order
//! - TOML configuration

pub mod config;
pub mod data;
pub mod domain;

pub use config::DashboardConfig;
pub use data::{FallbackResolver, FetchError, Source, SourceFetcher};
pub use domain::{History, Reading};
