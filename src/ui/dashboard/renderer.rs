//! Dashboard main renderer

use super::components::{bar_chart, footer, header, info_panel, logs, map_panel, pie_chart};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(28), Constraint::Percentage(72)])
        .split(main_chunks[1]);

    // Sidebar: info panel above activity log
    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Percentage(40)])
        .split(content_chunks[0]);
    info_panel::render_info_panel(f, sidebar_chunks[0], state);
    logs::render_logs_panel(f, sidebar_chunks[1], state);

    // Main column: bar chart, pie chart, map.
    let chart_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Fill(1),
        ])
        .split(content_chunks[1]);
    bar_chart::render_bar_chart(f, chart_chunks[0], state);
    pie_chart::render_pie_chart(f, chart_chunks[1], state);
    map_panel::render_map_panel(f, chart_chunks[2], state);

    footer::render_footer(f, main_chunks[2]);
}
