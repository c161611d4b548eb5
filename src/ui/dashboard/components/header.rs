//! Dashboard header component
//!
//! Renders the title and fetch progress gauge

use super::super::state::{DashboardState, FetchingState};
use crate::events::FetchPhase;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title and fetch-cycle gauge.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title_text = format!("COVID-19 TOP 10 DASHBOARD v{}", version);

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Gauge logic: an in-flight fetch takes priority, then the error state,
    // then the refresh countdown.
    let (progress_text, gauge_color, progress_percent) =
        if state.current_fetch_phase() == FetchPhase::Fetching
            || matches!(state.fetching_state(), FetchingState::Active { .. })
        {
            // Animated gauge, loops every 20 ticks
            let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
            (
                "FETCHING - Requesting country statistics".to_string(),
                Color::LightGreen,
                progress,
            )
        } else if matches!(state.fetching_state(), FetchingState::Stalled) {
            (
                "FETCHING - Slow response from API".to_string(),
                Color::LightYellow,
                100,
            )
        } else if state.last_error.is_some() {
            (
                "FETCH FAILED - press [r] to retry".to_string(),
                Color::LightRed,
                100,
            )
        } else {
            let remaining = state.refresh_info.remaining_secs();
            let text = if remaining > 0 {
                format!("DATA CURRENT - next refresh in {}s", remaining)
            } else {
                "DATA CURRENT".to_string()
            };
            (text, Color::LightBlue, state.refresh_info.progress_percent())
        };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
