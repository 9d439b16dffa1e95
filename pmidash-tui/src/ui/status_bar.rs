//! Bottom status bar: key hints, latest reading summary, status message.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::theme::{self, Theme};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let palette = Theme::default();
    let mut spans: Vec<Span> = Vec::new();

    let hints = if app.export_open {
        " e:Collapse d:Download q:Quit"
    } else {
        " e:Export q:Quit"
    };
    spans.push(Span::styled(hints, theme::muted()));

    if let Some(summary) = &app.summary {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{:.1} ", summary.latest.value),
            theme::text(),
        ));
        if let Some(change) = summary.change {
            spans.push(Span::styled(
                format!("({change:+.1}) "),
                Style::default().fg(palette.change_color(change)),
            ));
        }
        spans.push(Span::styled(
            summary.regime.label(),
            Style::default().fg(palette.regime_color(summary.regime)),
        ));
    }

    spans.push(Span::raw(" | "));

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
