//! Domain types for pmidash

pub mod history;
pub mod reading;

pub use history::History;
pub use reading::{month_start, Reading, Regime, NEUTRAL_LEVEL, STRONG_EXPANSION_LEVEL};
