//! Fetch metrics for display in the dashboard.

use ratatui::prelude::Color;

/// Counters describing the fetch cycle since startup.
#[derive(Debug, Clone, Default)]
pub struct FetchMetrics {
    /// Fetch attempts, successful or not.
    pub fetches_attempted: u64,
    /// Fetches that produced a country table.
    pub fetches_succeeded: u64,
    /// Number of countries in the most recent table.
    pub countries_loaded: usize,
    /// Human-readable outcome of the last fetch.
    pub last_fetch_status: String,
}

impl FetchMetrics {
    /// Success rate as a percentage, 100 when nothing was attempted yet.
    pub fn success_rate(&self) -> f64 {
        if self.fetches_attempted == 0 {
            return 100.0;
        }
        (self.fetches_succeeded as f64 / self.fetches_attempted as f64) * 100.0
    }

    pub fn success_rate_color(&self) -> Color {
        let rate = self.success_rate();
        if rate >= 90.0 {
            Color::Green
        } else if rate >= 50.0 {
            Color::Yellow
        } else {
            Color::Red
        }
    }
}

/// Countdown info for the header gauge between fetches.
#[derive(Debug, Clone, Default)]
pub struct RefreshInfo {
    /// Full wait between automatic refreshes, in seconds.
    pub interval_secs: u64,
    /// Seconds elapsed since the last completed fetch.
    pub since_last_fetch_secs: u64,
}

impl RefreshInfo {
    pub fn remaining_secs(&self) -> u64 {
        self.interval_secs.saturating_sub(self.since_last_fetch_secs)
    }

    /// Progress toward the next automatic refresh, 0-100.
    pub fn progress_percent(&self) -> u16 {
        if self.interval_secs == 0 {
            return 100;
        }
        (((self.since_last_fetch_secs as f64 / self.interval_secs as f64) * 100.0) as u16).min(100)
    }
}
