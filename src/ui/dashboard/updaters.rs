//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from events

use super::state::{DashboardState, FetchingState};

use crate::consts::dashboard_consts::fetching::STALL_THRESHOLD_SECS;
use crate::events::{Event as WorkerEvent, EventType};
use crate::ui::metrics::RefreshInfo;

use std::time::Instant;

impl DashboardState {
    /// Update the dashboard state with a new tick.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            // Add to activity logs for display
            self.add_to_activity_log(event.clone());

            // Process the event for state updates
            self.process_event(&event);
        }

        // Handle stall detection (doesn't need events)
        self.check_fetching_stall();

        // Update the refresh countdown
        self.update_refresh_countdown();
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: &WorkerEvent) {
        match event.event_type {
            EventType::StateChange => {
                if let Some(phase) = event.fetch_phase {
                    self.set_current_fetch_phase(phase);
                }
            }
            EventType::Refresh => {
                if event.msg.contains("Fetching country statistics") {
                    self.fetch_metrics.fetches_attempted += 1;
                    if !matches!(self.fetching_state(), FetchingState::Active { .. }) {
                        self.set_fetching_state(FetchingState::Active {
                            started_at: Instant::now(),
                        });
                    }
                }
            }
            EventType::Success => {
                if event.msg.contains("Fetched") {
                    self.fetch_metrics.fetches_succeeded += 1;
                    self.fetch_metrics.last_fetch_status = "Success".to_string();
                    self.set_last_fetch_timestamp(event.timestamp.clone());
                    self.mark_fetch_completed();
                    self.set_fetching_state(FetchingState::Idle);
                }
            }
            EventType::Error => {
                // The last-success timestamp stays; only the countdown and
                // the status reflect the failure.
                self.fetch_metrics.last_fetch_status = "Failed".to_string();
                self.last_error = Some(event.msg.clone());
                self.mark_fetch_completed();
                self.set_fetching_state(FetchingState::Idle);
            }
            EventType::Waiting => {}
        }
    }

    /// Update the countdown toward the next automatic refresh
    fn update_refresh_countdown(&mut self) {
        let since = self
            .last_fetch_instant()
            .map(|at| at.elapsed().as_secs())
            .unwrap_or(0);
        self.refresh_info = RefreshInfo {
            interval_secs: self.refresh_interval_secs,
            since_last_fetch_secs: since,
        };
    }

    /// Flag fetches that have been running past the stall threshold
    fn check_fetching_stall(&mut self) {
        if let FetchingState::Active { started_at } = self.fetching_state() {
            if started_at.elapsed().as_secs() > STALL_THRESHOLD_SECS {
                self.set_fetching_state(FetchingState::Stalled);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::events::FetchPhase;
    use crate::logging::LogLevel;
    use crate::ui::app::UIConfig;

    fn state() -> DashboardState {
        DashboardState::new(Environment::Production, Instant::now(), UIConfig::default())
    }

    #[test]
    fn success_event_updates_metrics_and_timestamp() {
        let mut state = state();
        state.add_event(WorkerEvent::fetcher_with_level(
            "Fetching country statistics...".to_string(),
            EventType::Refresh,
            LogLevel::Info,
        ));
        state.add_event(WorkerEvent::fetcher_with_level(
            "Fetched 231 countries".to_string(),
            EventType::Success,
            LogLevel::Info,
        ));
        state.update();

        assert_eq!(state.fetch_metrics.fetches_attempted, 1);
        assert_eq!(state.fetch_metrics.fetches_succeeded, 1);
        assert_eq!(state.fetch_metrics.last_fetch_status, "Success");
        assert!(state.last_fetch_timestamp().is_some());
        assert!(matches!(state.fetching_state(), FetchingState::Idle));
    }

    #[test]
    fn error_event_records_failure_without_clearing_table() {
        let mut state = state();
        state.set_records(vec![crate::country::CountryRecord {
            country: "France".to_string(),
            cases: Some(10),
            ..Default::default()
        }]);

        // An earlier successful fetch set the timestamp.
        state.add_event(WorkerEvent::fetcher_with_level(
            "Fetched 1 countries".to_string(),
            EventType::Success,
            LogLevel::Info,
        ));
        state.update();
        let success_timestamp = state.last_fetch_timestamp().clone();
        assert!(success_timestamp.is_some());

        state.add_event(WorkerEvent::fetcher_with_level(
            "Failed to fetch statistics: HTTP error with status 500: boom".to_string(),
            EventType::Error,
            LogLevel::Warn,
        ));
        state.update();

        assert_eq!(state.fetch_metrics.last_fetch_status, "Failed");
        assert!(state.last_error.is_some());
        // The previous table stays on screen.
        assert_eq!(state.records.len(), 1);
        assert_eq!(state.top_cases.len(), 1);
        // The last-success timestamp survives the failure.
        assert_eq!(state.last_fetch_timestamp(), &success_timestamp);
    }

    #[test]
    fn state_change_events_move_the_fetch_phase() {
        let mut state = state();
        assert_eq!(state.current_fetch_phase(), FetchPhase::Waiting);
        state.add_event(WorkerEvent::state_change(
            FetchPhase::Fetching,
            "fetching".to_string(),
        ));
        state.update();
        assert_eq!(state.current_fetch_phase(), FetchPhase::Fetching);
    }
}
