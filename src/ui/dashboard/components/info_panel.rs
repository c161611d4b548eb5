//! Dashboard info panel component
//!
//! Renders the sidebar: welcome text, environment and fetch info, and the
//! base-layer selection list (the tile-layer dropdown analog).

use crate::environment::Environment;
use crate::map::BaseLayer;

use super::super::state::DashboardState;
use super::super::utils::format_compact_timestamp;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the sidebar info panel.
pub fn render_info_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut info_lines = Vec::new();

    info_lines.push(Line::from(Span::styled(
        "Top 10 countries by confirmed COVID-19 cases.",
        Style::default().fg(Color::Gray),
    )));
    info_lines.push(Line::from(""));

    // Environment with color coding
    let env_color = match state.environment {
        Environment::Production => Color::Green,
        Environment::Custom { .. } => Color::Yellow,
    };
    info_lines.push(Line::from(Span::styled(
        format!("Env: {}", state.environment),
        Style::default().fg(env_color),
    )));

    // Uptime
    let uptime = state.start_time.elapsed();
    let uptime_string = if uptime.as_secs() >= 3600 {
        format!(
            "Uptime: {}h {}m {}s",
            uptime.as_secs() / 3600,
            (uptime.as_secs() % 3600) / 60,
            uptime.as_secs() % 60
        )
    } else {
        format!(
            "Uptime: {}m {}s",
            uptime.as_secs() / 60,
            uptime.as_secs() % 60
        )
    };
    info_lines.push(Line::from(Span::styled(
        uptime_string,
        Style::default().fg(Color::LightGreen),
    )));

    // Fetch statistics
    let metrics = &state.fetch_metrics;
    info_lines.push(Line::from(Span::styled(
        format!("Countries: {}", metrics.countries_loaded),
        Style::default().fg(Color::LightCyan),
    )));
    info_lines.push(Line::from(vec![
        Span::styled("Fetches: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{} / {}", metrics.fetches_succeeded, metrics.fetches_attempted),
            Style::default().fg(Color::White),
        ),
    ]));
    info_lines.push(Line::from(vec![
        Span::styled("Success: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{:.1}%", metrics.success_rate()),
            Style::default()
                .fg(metrics.success_rate_color())
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    let last_fetch_text = match state.last_fetch_timestamp() {
        Some(timestamp) => format_compact_timestamp(timestamp),
        None => "Never".to_string(),
    };
    info_lines.push(Line::from(vec![
        Span::styled("Last fetch: ", Style::default().fg(Color::Gray)),
        Span::styled(last_fetch_text, Style::default().fg(Color::Yellow)),
    ]));

    // Base layer selection list
    info_lines.push(Line::from(""));
    info_lines.push(Line::from(Span::styled(
        "Base layer [t]:",
        Style::default().fg(Color::Gray),
    )));
    for layer in BaseLayer::ALL {
        let selected = layer == state.base_layer;
        let (glyph, style) = if selected {
            (
                "\u{25B8} ",
                Style::default()
                    .fg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default().fg(Color::DarkGray))
        };
        info_lines.push(Line::from(vec![
            Span::raw(glyph),
            Span::styled(layer.to_string(), style),
        ]));
    }

    let info_block = Block::default()
        .title("DASHBOARD")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let info_paragraph = Paragraph::new(info_lines)
        .block(info_block)
        .wrap(Wrap { trim: true });
    f.render_widget(info_paragraph, area);
}
