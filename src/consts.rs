pub mod dashboard_consts {
    //! Dashboard Configuration Constants
    //!
    //! Configuration constants for the dashboard, organized by
    //! functional area.

    // =============================================================================
    // RANKING CONFIGURATION
    // =============================================================================

    /// Number of countries shown in each ranked view (map, bar chart, pie chart).
    pub const TOP_COUNTRIES: usize = 10;

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Event buffer size between the fetch worker and the UI.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// HTTP fetch configuration. The upstream API can be slow under load,
    /// so both connect and overall timeouts are set explicitly.
    pub mod fetching {
        use std::time::Duration;

        /// Maximum time to establish a connection (seconds).
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Maximum time for a complete request (seconds).
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        /// Default interval between automatic refreshes (seconds).
        pub const DEFAULT_REFRESH_SECS: u64 = 300;

        /// Fetches taking longer than this are flagged as stalled in the UI.
        pub const STALL_THRESHOLD_SECS: u64 = 5;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }
}
