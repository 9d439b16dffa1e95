//! Color tokens for the pmidash dashboard
//!
//! # Color Palette
//! - **Series**: Orange (the PMI trend line)
//! - **Neutral**: Gray (the 50 reference line)
//! - **Strong**: Green (the 55 reference line, strong-expansion regime)
//! - **Accent**: Cyan (titles, focus, info messages)
//! - **Warning**: Amber (warnings)
//! - **Negative**: Red (errors, contraction regime)
//! - **Muted**: Steel blue (hints, axis text)

use ratatui::style::{Color, Modifier, Style};

use pmidash_core::domain::Regime;

/// Dashboard palette.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub series: Color,
    pub neutral_line: Color,
    pub strong_line: Color,
    pub accent: Color,
    pub warning: Color,
    pub negative: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            series: Color::Rgb(255, 165, 0),
            neutral_line: Color::Gray,
            strong_line: Color::Rgb(0, 200, 83),
            accent: Color::Rgb(0, 255, 255),
            warning: Color::Rgb(255, 191, 0),
            negative: Color::Rgb(255, 69, 58),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Color for a regime label (contraction / expansion / strong expansion).
    pub fn regime_color(&self, regime: Regime) -> Color {
        match regime {
            Regime::Contraction => self.negative,
            Regime::Expansion => self.text_primary,
            Regime::StrongExpansion => self.strong_line,
        }
    }

    /// Color for a month-on-month change.
    pub fn change_color(&self, change: f64) -> Color {
        if change >= 0.0 {
            self.strong_line
        } else {
            self.negative
        }
    }
}

pub fn title() -> Style {
    Style::default()
        .fg(Theme::default().accent)
        .add_modifier(Modifier::BOLD)
}

pub fn accent() -> Style {
    Style::default().fg(Theme::default().accent)
}

pub fn muted() -> Style {
    Style::default().fg(Theme::default().muted)
}

pub fn text() -> Style {
    Style::default().fg(Theme::default().text_primary)
}

pub fn secondary() -> Style {
    Style::default().fg(Theme::default().text_secondary)
}

pub fn warning() -> Style {
    Style::default().fg(Theme::default().warning)
}

pub fn negative() -> Style {
    Style::default().fg(Theme::default().negative)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color::Rgb(18, 18, 20));
        assert_eq!(theme.series, Color::Rgb(255, 165, 0));
    }

    #[test]
    fn test_regime_color() {
        let theme = Theme::default();
        assert_eq!(theme.regime_color(Regime::Contraction), theme.negative);
        assert_eq!(theme.regime_color(Regime::Expansion), theme.text_primary);
        assert_eq!(theme.regime_color(Regime::StrongExpansion), theme.strong_line);
    }

    #[test]
    fn test_change_color() {
        let theme = Theme::default();
        assert_eq!(theme.change_color(0.7), theme.strong_line);
        assert_eq!(theme.change_color(0.0), theme.strong_line);
        assert_eq!(theme.change_color(-0.6), theme.negative);
    }

    #[test]
    fn test_panel_border() {
        assert_eq!(panel_border(true), accent());
        assert_eq!(panel_border(false), muted());
    }
}
