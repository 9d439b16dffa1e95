//! PMI trend chart with the neutral and strong-expansion reference lines.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph,
};
use ratatui::Frame;

use pmidash_core::domain::NEUTRAL_LEVEL;
use pmidash_report::ChartModel;

use crate::app::AppState;
use crate::theme::{self, Theme};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let model = &app.chart;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(!app.export_open))
        .title(format!(" {} ", model.title))
        .title_style(theme::title());

    if model.is_empty() {
        let inner = block.inner(area);
        f.render_widget(block, area);
        render_empty(f, inner);
        return;
    }

    render_chart(f, area, model, block);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("No PMI readings to display.", theme::muted())),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_chart(f: &mut Frame, area: Rect, model: &ChartModel, block: Block) {
    // Reference segments must outlive the datasets that borrow them.
    let segments: Vec<[(f64, f64); 2]> = model
        .references
        .iter()
        .map(|line| model.reference_segment(line))
        .collect();
    let datasets = datasets(model, &segments, &Theme::default());

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title(Span::styled(model.x_label, theme::muted()))
                .style(theme::muted())
                .bounds(model.x_bounds)
                .labels(
                    model
                        .x_labels
                        .iter()
                        .map(|l| Span::styled(l.as_str(), theme::muted())),
                ),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled(model.y_label, theme::muted()))
                .style(theme::muted())
                .bounds(model.y_bounds)
                .labels(
                    model
                        .y_labels
                        .iter()
                        .map(|l| Span::styled(l.as_str(), theme::muted())),
                ),
        )
        .legend_position(Some(LegendPosition::BottomRight))
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

    f.render_widget(chart, area);
}

/// PMI line, a marker per month, then one dotted line per reference level.
fn datasets<'a>(
    model: &'a ChartModel,
    segments: &'a [[(f64, f64); 2]],
    palette: &Theme,
) -> Vec<Dataset<'a>> {
    let mut datasets = vec![
        Dataset::default()
            .name("PMI")
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(palette.series))
            .graph_type(GraphType::Line)
            .data(&model.points),
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .style(Style::default().fg(palette.series))
            .graph_type(GraphType::Scatter)
            .data(&model.points),
    ];

    for (line, segment) in model.references.iter().zip(segments) {
        let color = if line.value <= NEUTRAL_LEVEL {
            palette.neutral_line
        } else {
            palette.strong_line
        };
        datasets.push(
            Dataset::default()
                .name(line.label)
                .marker(symbols::Marker::Dot)
                .style(Style::default().fg(color))
                .graph_type(GraphType::Line)
                .data(segment),
        );
    }
    datasets
}
