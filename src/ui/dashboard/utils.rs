//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::map::BrailleCanvas;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::Color;

/// Fixed pastel palette for chart series, one color per country slot.
pub const PASTEL_PALETTE: [Color; 10] = [
    Color::LightBlue,
    Color::LightGreen,
    Color::LightYellow,
    Color::LightMagenta,
    Color::LightCyan,
    Color::LightRed,
    Color::Blue,
    Color::Green,
    Color::Magenta,
    Color::Cyan,
];

/// Color for a chart series by its rank position.
pub fn series_color(index: usize) -> Color {
    PASTEL_PALETTE[index % PASTEL_PALETTE.len()]
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("Reqwest error") && msg.contains("TimedOut") {
        return "Request timed out".to_string();
    }
    if msg.contains("Reqwest error") && msg.contains("Connect") {
        return "Connection failed".to_string();
    }
    if msg.contains("Reqwest error") {
        return "Network error".to_string();
    }
    msg.to_string()
}

/// Group digits with commas: 1234567 -> "1,234,567"
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Blit one braille canvas into the buffer with a single color, skipping
/// empty cells so earlier layers show through.
pub fn render_canvas_layer(buf: &mut Buffer, area: Rect, canvas: &BrailleCanvas, color: Color) {
    for (row_idx, row_str) in canvas.row_strings().enumerate() {
        if row_idx >= area.height as usize {
            break;
        }
        let y = area.y + row_idx as u16;
        for (col_idx, ch) in row_str.chars().enumerate() {
            if col_idx >= area.width as usize {
                break;
            }
            if ch == '\u{2800}' {
                continue;
            }
            let x = area.x + col_idx as u16;
            buf[(x, y)].set_char(ch).set_fg(color);
        }
    }
}

/// Compact magnitude label for chart axes: 12_345_678 -> "12.3M"
pub fn format_magnitude(value: u64) -> String {
    if value >= 1_000_000_000 {
        format!("{:.1}B", value as f64 / 1e9)
    } else if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1e6)
    } else if value >= 1_000 {
        format!("{:.1}K", value as f64 / 1e3)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_timestamp() {
        assert_eq!(format_compact_timestamp("2026-08-30 14:05:22"), "08-30 14:05");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn count_grouping() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn magnitude_labels() {
        assert_eq!(format_magnitude(950), "950");
        assert_eq!(format_magnitude(12_500), "12.5K");
        assert_eq!(format_magnitude(12_345_678), "12.3M");
        assert_eq!(format_magnitude(2_000_000_000), "2.0B");
    }

    #[test]
    fn palette_covers_top_ten() {
        let colors: Vec<Color> = (0..10).map(series_color).collect();
        assert_eq!(colors.len(), 10);
        assert_eq!(series_color(10), series_color(0));
    }
}
