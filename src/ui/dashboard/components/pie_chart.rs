//! Pie chart component
//!
//! One slice per top-10-by-recovered country, sized by recovered count.
//! Each slice is drawn as a braille wedge on its own layer so it gets its
//! own palette color; percentages and labels go in the legend beside it.

use super::super::state::DashboardState;
use super::super::utils::{format_count, render_canvas_layer, series_color};
use crate::map::BrailleCanvas;
use crate::map::geometry::draw_wedge;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use std::f64::consts::TAU;

/// Render the top-10 recovered pie chart with legend.
pub fn render_pie_chart(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .title("TOP 10 RECOVERED")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let total: u64 = state.top_recovered.iter().map(|r| r.recovered()).sum();
    if total == 0 {
        let placeholder = Paragraph::new("Waiting for data...")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width < 10 || inner.height < 4 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(inner);
    let pie_area = chunks[0];

    // Dot-space disc centered in the pie area. A terminal cell is roughly
    // twice as tall as wide, and braille dots are 2x4 per cell, so dot
    // space ends up close to square.
    let dot_w = pie_area.width as i32 * 2;
    let dot_h = pie_area.height as i32 * 4;
    let cx = dot_w / 2;
    let cy = dot_h / 2;
    let radius = (dot_w.min(dot_h) / 2 - 1).max(1);

    let mut start = 0.0_f64;
    let mut legend_lines = Vec::new();
    for (i, record) in state.top_recovered.iter().enumerate() {
        let fraction = record.recovered() as f64 / total as f64;
        let end = start + fraction * TAU;

        let mut layer = BrailleCanvas::new(pie_area.width as usize, pie_area.height as usize);
        draw_wedge(&mut layer, cx, cy, radius, start, end);
        render_canvas_layer(f.buffer_mut(), pie_area, &layer, series_color(i));

        legend_lines.push(Line::from(vec![
            Span::styled("\u{25A0} ", Style::default().fg(series_color(i))),
            Span::styled(
                format!("{:>5.1}% ", fraction * 100.0),
                Style::default().fg(Color::White),
            ),
            Span::styled(record.country.clone(), Style::default().fg(Color::Gray)),
            Span::styled(
                format!(" ({})", format_count(record.recovered())),
                Style::default().fg(Color::DarkGray),
            ),
        ]));

        start = end;
    }

    let legend = Paragraph::new(legend_lines).wrap(Wrap { trim: true });
    f.render_widget(legend, chunks[1]);
}
