//! Dashboard footer component
//!
//! Renders footer with key bindings

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render footer with the key hints.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect) {
    let footer_text =
        "[Q] Quit | [R] Refresh | [T] Base layer | [Tab] Next country | [\u{2190}\u{2191}\u{2192}\u{2193}] Pan | [+/-] Zoom";

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
