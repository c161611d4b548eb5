//! World map component
//!
//! Braille world map with the selected base layer underneath and one marker
//! per top-10-by-cases country on top. Nearby markers collapse into
//! clusters; the selected country gets a tooltip overlay with its counters.

use super::super::state::DashboardState;
use super::super::utils::{format_count, render_canvas_layer};
use crate::country::CountryRecord;
use crate::map::markers::{Cluster, cluster_markers, project_markers};
use crate::map::BaseLayer;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

/// Dot-space distance under which markers merge into one cluster.
const CLUSTER_RADIUS_DOTS: i32 = 6;

fn base_layer_color(layer: BaseLayer) -> Color {
    match layer {
        BaseLayer::Coastline => Color::DarkGray,
        BaseLayer::Graticule => Color::Gray,
        BaseLayer::Plain => Color::Reset,
    }
}

/// Render the world map panel.
pub fn render_map_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title(format!(" WORLD MAP [{}] ", state.base_layer))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width < 4 || inner.height < 2 {
        return;
    }

    // Braille gives 2x4 dot resolution per cell.
    let mut viewport = state.viewport.clone();
    viewport.set_size(inner.width as usize * 2, inner.height as usize * 4);

    let base = state.base_layer.render(&viewport);
    render_canvas_layer(f.buffer_mut(), inner, &base, base_layer_color(state.base_layer));

    let markers = project_markers(&state.top_cases, &viewport);
    let clusters = cluster_markers(&markers, CLUSTER_RADIUS_DOTS);

    for cluster in &clusters {
        render_cluster(f, inner, state, cluster);
    }

    if let Some(record) = state.top_cases.get(state.selected_marker) {
        render_tooltip(f, inner, record);
    }
}

/// Dot space back to cell space. Clusters left of or above the panel would
/// otherwise truncate onto column/row zero, so negatives are rejected
/// before the conversion.
fn cluster_cell(cluster: &Cluster, inner: Rect) -> Option<(u16, u16)> {
    if cluster.px < 0 || cluster.py < 0 {
        return None;
    }
    let cell_x = (cluster.px / 2) as u16;
    let cell_y = (cluster.py / 4) as u16;
    (cell_x < inner.width && cell_y < inner.height).then_some((cell_x, cell_y))
}

/// Draw one cluster: a flag glyph for a single country, a member count
/// otherwise.
fn render_cluster(f: &mut Frame, inner: Rect, state: &DashboardState, cluster: &Cluster) {
    let Some((cell_x, cell_y)) = cluster_cell(cluster, inner) else {
        return;
    };

    let (glyph, style) = if cluster.is_single() {
        let record_index = cluster.members[0];
        let record = &state.top_cases[record_index];
        let selected = record_index == state.selected_marker;
        let glyph = record
            .flag_emoji()
            .unwrap_or_else(|| "\u{25CF}".to_string());
        let style = if selected {
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::LightRed)
        };
        (glyph, style)
    } else {
        let selected = cluster.members.contains(&state.selected_marker);
        let style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightYellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightRed)
                .add_modifier(Modifier::BOLD)
        };
        (format!("({})", cluster.members.len()), style)
    };

    let width = (glyph.chars().count() as u16 + 1).min(inner.width - cell_x);
    let marker_area = Rect::new(inner.x + cell_x, inner.y + cell_y, width, 1);
    f.render_widget(Paragraph::new(Span::styled(glyph, style)), marker_area);
}

/// Tooltip overlay for the selected country, pinned to the top-right
/// corner of the map.
fn render_tooltip(f: &mut Frame, inner: Rect, record: &CountryRecord) {
    let width = 30.min(inner.width);
    let height = 6.min(inner.height);
    if width < 12 || height < 6 {
        return;
    }
    let tooltip_area = Rect::new(inner.x + inner.width - width, inner.y, width, height);

    let flag = record.flag_emoji().unwrap_or_default();
    let lines = vec![
        Line::from(Span::styled(
            format!("{} {}", flag, record.country),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        counter_line("Confirmed", record.cases(), Color::LightYellow),
        counter_line("Active", record.active(), Color::LightBlue),
        counter_line("Recovered", record.recovered(), Color::LightGreen),
        counter_line("Deaths", record.deaths(), Color::LightRed),
    ];

    let tooltip = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Plain)
            .border_style(Style::default().fg(Color::LightYellow)),
    );
    f.render_widget(Clear, tooltip_area);
    f.render_widget(tooltip, tooltip_area);
}

fn counter_line(label: &str, value: u64, color: Color) -> Line<'_> {
    Line::from(vec![
        Span::styled(format!("{:<10}", label), Style::default().fg(Color::Gray)),
        Span::styled(format_count(value), Style::default().fg(color)),
    ])
}
