//! pmidash report: per-run pipeline and the artifacts built from it.
//!
//! This crate builds on `pmidash-core` to provide:
//! - History loading: seeded series plus one fresh reading from the resolver
//! - CSV, JSON, and Markdown export
//! - A renderer-agnostic chart model with the 50/55 reference lines
//! - Headline summary statistics

pub mod chart;
pub mod export;
pub mod loader;
pub mod summary;

pub use chart::{ChartModel, ReferenceLine, REFERENCE_LINES};
pub use export::{
    export_history_csv, export_reading_json, generate_report, save_history_csv, CSV_HEADER,
};
pub use loader::{load_history, merge_reading, LoadOptions, LoadedHistory};
pub use summary::Summary;
