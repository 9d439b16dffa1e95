//! Top-level UI layout: header, chart, export panel, caption, status bar.

pub mod chart_panel;
pub mod export_panel;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme::{self, Theme};

pub const PAGE_TITLE: &str = "India Manufacturing PMI Dashboard (Live Auto-Fetch)";
pub const DESCRIPTION: &str = "Powered by real-time scraping from Investing.com. \
    Fallbacks for Economic Times, Moneycontrol, S&P Global, and TradingView ready.";
pub const CAPTION: &str = "Live data powered by Investing.com. \
    Fallbacks for ET, S&P Global, TradingView, and Moneycontrol in place.";

/// Draw the entire page.
pub fn draw(f: &mut Frame, app: &AppState) {
    f.render_widget(
        Block::default().style(Style::default().bg(Theme::default().background)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(export_panel::height(app)),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    chart_panel::render(f, chunks[1], app);
    export_panel::render(f, chunks[2], app);
    f.render_widget(
        Paragraph::new(Span::styled(CAPTION, theme::muted())),
        chunks[3],
    );
    status_bar::render(f, chunks[4], app);
}

fn render_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(PAGE_TITLE, theme::title())),
        Line::from(Span::styled(DESCRIPTION, theme::secondary())),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{test_app, with_april};
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;
    use std::path::PathBuf;

    fn render(app: &AppState) -> Buffer {
        let backend = TestBackend::new(120, 36);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn page_shows_title_chart_and_caption() {
        let text = screen_text(&render(&test_app()));
        assert!(text.contains("India Manufacturing PMI Dashboard"));
        assert!(text.contains("PMI Value"));
        assert!(text.contains("Live data powered by Investing.com"));
        assert!(text.contains("Showing stored history"));
    }

    #[test]
    fn whole_frame_uses_theme_background() {
        let buffer = render(&test_app());
        let bg = Theme::default().background;
        assert_eq!(buffer[(0, 0)].bg, bg);
        assert_eq!(buffer[(119, 35)].bg, bg);
    }

    #[test]
    fn collapsed_export_panel_shows_hint_only() {
        let text = screen_text(&render(&test_app()));
        assert!(text.contains("Export Data"));
        assert!(!text.contains("Download CSV"));
    }

    #[test]
    fn expanded_export_panel_offers_download() {
        let mut app = AppState::new(with_april(), PathBuf::from("india_pmi_data.csv"));
        app.toggle_export();
        let text = screen_text(&render(&app));
        assert!(text.contains("Download CSV"));
        assert!(text.contains("india_pmi_data.csv"));
        assert!(text.contains("13 rows"));
    }
}
