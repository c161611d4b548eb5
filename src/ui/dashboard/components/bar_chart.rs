//! Bar chart component
//!
//! One bar per top-10-by-cases country, height = confirmed cases, one
//! palette color per country.

use super::super::state::DashboardState;
use super::super::utils::{format_magnitude, series_color};
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph};

/// Render the top-10 confirmed cases bar chart.
pub fn render_bar_chart(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .title("TOP 10 CONFIRMED CASES")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    if state.top_cases.is_empty() {
        let placeholder = Paragraph::new("Waiting for data...")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let count = state.top_cases.len();
    // Bars plus single-cell gaps have to fit the inner width.
    let bar_width = ((inner_width.saturating_sub(count - 1)) / count).clamp(3, 9) as u16;

    let bars: Vec<Bar> = state
        .top_cases
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let label: String = record.country.chars().take(bar_width as usize).collect();
            Bar::default()
                .value(record.cases())
                .text_value(format_magnitude(record.cases()))
                .label(Line::from(label))
                .style(Style::default().fg(series_color(i)))
                .value_style(Style::default().fg(Color::Black).bg(series_color(i)))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);

    f.render_widget(chart, area);
}
