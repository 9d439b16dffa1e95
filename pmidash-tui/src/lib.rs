//! pmidash TUI - single-page India Manufacturing PMI dashboard
//!
//! One screen, top to bottom:
//! - Header with title and description
//! - PMI trend chart with the 50 and 55 reference lines
//! - Collapsible CSV export panel
//! - Source caption and status bar

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;

pub use app::{AppState, StatusLevel};
pub use theme::Theme;

#[cfg(test)]
mod test_helpers;
