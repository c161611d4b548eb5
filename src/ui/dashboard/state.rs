//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::consts::dashboard_consts::{MAX_ACTIVITY_LOGS, TOP_COUNTRIES};
use crate::country::CountryRecord;
use crate::environment::Environment;
use crate::events::{Event as WorkerEvent, FetchPhase};
use crate::map::{BaseLayer, Viewport};
use crate::rank::{SortKey, top_n};
use crate::ui::app::UIConfig;
use crate::ui::metrics::{FetchMetrics, RefreshInfo};

use std::collections::VecDeque;
use std::time::Instant;

/// State for tracking an in-flight fetch
#[derive(Debug, Clone)]
pub enum FetchingState {
    Idle,
    Active { started_at: Instant },
    Stalled,
}

/// Dashboard state: the fetched table, its two ranked views, the map
/// viewport, and the activity log.
#[derive(Debug)]
pub struct DashboardState {
    /// The environment whose API the dashboard reads from.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Interval between automatic refreshes, in seconds.
    pub refresh_interval_secs: u64,
    /// The full country table from the last successful fetch.
    pub records: Vec<CountryRecord>,
    /// Top countries by confirmed cases; drives the map and the bar chart.
    pub top_cases: Vec<CountryRecord>,
    /// Top countries by recovered cases; drives the pie chart.
    pub top_recovered: Vec<CountryRecord>,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,

    /// Fetch counters shown in the sidebar.
    pub fetch_metrics: FetchMetrics,
    /// Countdown to the next automatic refresh.
    pub refresh_info: RefreshInfo,
    /// Animation tick counter
    pub tick: usize,

    /// Map viewport (pan/zoom) shared across base layers.
    pub viewport: Viewport,
    /// Selected base imagery.
    pub base_layer: BaseLayer,
    /// Index into `top_cases` of the marker whose tooltip is shown.
    pub selected_marker: usize,
    /// Message of the most recent fetch error, if the last fetch failed.
    pub last_error: Option<String>,

    /// Timestamp of the last successful fetch
    last_fetch_timestamp: Option<String>,
    /// Monotonic time of the last completed fetch, for the countdown
    last_fetch_instant: Option<Instant>,
    /// Current fetching state (active, stalled, idle)
    fetching_state: FetchingState,
    /// Current fetch phase from state events
    current_fetch_phase: FetchPhase,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            environment,
            start_time,
            refresh_interval_secs: ui_config.refresh_secs,
            records: Vec::new(),
            top_cases: Vec::new(),
            top_recovered: Vec::new(),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            fetch_metrics: FetchMetrics::default(),
            refresh_info: RefreshInfo {
                interval_secs: ui_config.refresh_secs,
                since_last_fetch_secs: 0,
            },
            tick: 0,
            viewport: Viewport::world(160, 80),
            base_layer: BaseLayer::default(),
            selected_marker: 0,
            last_error: None,
            last_fetch_timestamp: None,
            last_fetch_instant: None,
            fetching_state: FetchingState::Idle,
            current_fetch_phase: FetchPhase::Waiting,
        }
    }

    /// Install a freshly fetched table and recompute both ranked views.
    pub fn set_records(&mut self, records: Vec<CountryRecord>) {
        self.top_cases = top_n(&records, SortKey::Cases, TOP_COUNTRIES);
        self.top_recovered = top_n(&records, SortKey::Recovered, TOP_COUNTRIES);
        self.fetch_metrics.countries_loaded = records.len();
        self.records = records;
        if self.selected_marker >= self.top_cases.len() {
            self.selected_marker = 0;
        }
        self.last_error = None;
    }

    /// Move the tooltip selection to the next top-10 country.
    pub fn select_next_marker(&mut self) {
        if !self.top_cases.is_empty() {
            self.selected_marker = (self.selected_marker + 1) % self.top_cases.len();
        }
    }

    /// Switch to the next base layer. Markers are untouched.
    pub fn cycle_base_layer(&mut self) {
        self.base_layer = self.base_layer.next();
    }

    // Getter methods for private fields
    pub fn fetching_state(&self) -> &FetchingState {
        &self.fetching_state
    }

    pub fn last_fetch_timestamp(&self) -> &Option<String> {
        &self.last_fetch_timestamp
    }

    pub fn current_fetch_phase(&self) -> FetchPhase {
        self.current_fetch_phase
    }

    // Setter methods for private fields (for updaters)
    pub fn set_fetching_state(&mut self, state: FetchingState) {
        self.fetching_state = state;
    }

    pub fn set_current_fetch_phase(&mut self, phase: FetchPhase) {
        self.current_fetch_phase = phase;
    }

    pub fn set_last_fetch_timestamp(&mut self, timestamp: String) {
        self.last_fetch_timestamp = Some(timestamp);
    }

    /// Restart the refresh countdown after a completed fetch attempt,
    /// successful or not.
    pub fn mark_fetch_completed(&mut self) {
        self.last_fetch_instant = Some(Instant::now());
    }

    pub fn last_fetch_instant(&self) -> Option<Instant> {
        self.last_fetch_instant
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::CountryInfo;

    fn state() -> DashboardState {
        DashboardState::new(Environment::Production, Instant::now(), UIConfig::default())
    }

    fn record(name: &str, cases: u64, recovered: u64) -> CountryRecord {
        CountryRecord {
            country: name.to_string(),
            cases: Some(cases),
            recovered: Some(recovered),
            country_info: CountryInfo {
                lat: Some(10.0),
                long: Some(10.0),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn set_records_builds_both_rankings() {
        let mut state = state();
        let records: Vec<CountryRecord> = (0..12)
            .map(|i| record(&format!("c{i}"), (12 - i) * 100, i * 50))
            .collect();
        state.set_records(records);

        assert_eq!(state.top_cases.len(), 10);
        assert_eq!(state.top_recovered.len(), 10);
        assert_eq!(state.top_cases[0].country, "c0");
        assert_eq!(state.top_recovered[0].country, "c11");
        assert_eq!(state.fetch_metrics.countries_loaded, 12);
    }

    #[test]
    fn marker_selection_wraps() {
        let mut state = state();
        state.set_records(vec![record("a", 3, 0), record("b", 2, 0), record("c", 1, 0)]);
        assert_eq!(state.selected_marker, 0);
        state.select_next_marker();
        state.select_next_marker();
        state.select_next_marker();
        assert_eq!(state.selected_marker, 0);
    }

    #[test]
    fn base_layer_cycle_does_not_touch_rankings() {
        let mut state = state();
        state.set_records(vec![record("a", 3, 1), record("b", 2, 2)]);
        let cases_before = state.top_cases.clone();
        let initial_layer = state.base_layer;

        state.cycle_base_layer();
        assert_ne!(state.base_layer, initial_layer);
        assert_eq!(state.top_cases, cases_before);
    }

    #[test]
    fn activity_log_is_bounded() {
        let mut state = state();
        for i in 0..(MAX_ACTIVITY_LOGS + 10) {
            state.add_to_activity_log(WorkerEvent::fetcher_with_level(
                format!("event {i}"),
                crate::events::EventType::Refresh,
                crate::logging::LogLevel::Info,
            ));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
    }
}
