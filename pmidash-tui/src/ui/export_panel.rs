//! Collapsible CSV export panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

/// Rows the panel needs, borders included.
pub fn height(app: &AppState) -> u16 {
    if app.export_open {
        6
    } else {
        3
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let marker = if app.export_open { "▾" } else { "▸" };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(app.export_open))
        .title(format!(" {marker} Export Data "))
        .title_style(theme::panel_border(app.export_open));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = if app.export_open {
        let mut lines = vec![
            Line::from(vec![
                Span::styled("[d] Download CSV", theme::accent()),
                Span::styled(
                    format!(
                        "  {} rows -> {}",
                        app.loaded.history.len(),
                        app.export_path.display()
                    ),
                    theme::text(),
                ),
            ]),
            Line::from(Span::styled("Columns: Date, Value", theme::secondary())),
        ];
        if let Some(path) = &app.last_export {
            lines.push(Line::from(Span::styled(
                format!("Last saved: {}", path.display()),
                theme::muted(),
            )));
        }
        lines
    } else {
        vec![Line::from(Span::styled(
            "Press e to expand",
            theme::muted(),
        ))]
    };

    f.render_widget(Paragraph::new(lines), inner);
}
