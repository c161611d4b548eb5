//! Country statistics fetching
//!
//! One worker owns the API client. It fetches the country table at startup,
//! then again on every refresh interval tick or manual refresh request, and
//! ships the parsed table to the UI over a dedicated channel. There is no
//! automatic retry; a failed fetch is reported and the next cycle tries again.

use super::core::EventSender;
use crate::api::CovidApi;
use crate::api::error::ApiError;
use crate::country::CountryRecord;
use crate::events::{Event, EventType, FetchPhase};
use crate::logging::LogLevel;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{broadcast, mpsc};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] ApiError),
}

/// Stats fetcher emitting events and country tables
pub struct StatsFetcher {
    api: Box<dyn CovidApi>,
    event_sender: EventSender,
    data_sender: mpsc::Sender<Vec<CountryRecord>>,
    refresh_interval: Duration,
}

impl StatsFetcher {
    pub fn new(
        api: Box<dyn CovidApi>,
        event_sender: EventSender,
        data_sender: mpsc::Sender<Vec<CountryRecord>>,
        refresh_interval: Duration,
    ) -> Self {
        Self {
            api,
            event_sender,
            data_sender,
            refresh_interval,
        }
    }

    /// Map an API error to the log level it should surface at. Rate limits
    /// and server-side failures are transient and log as warnings.
    fn classify_error(error: &ApiError) -> LogLevel {
        match error {
            ApiError::Http { status, .. } if *status == 429 || *status >= 500 => LogLevel::Warn,
            ApiError::Reqwest(e) if e.is_timeout() || e.is_connect() => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }

    /// Fetch the country table once, with event reporting on both paths.
    pub async fn fetch_once(&self) -> Result<(), FetchError> {
        self.event_sender
            .send_event(Event::state_change(
                FetchPhase::Fetching,
                "Fetching country statistics...".to_string(),
            ))
            .await;
        self.event_sender
            .send_fetch_event(
                "Fetching country statistics...".to_string(),
                EventType::Refresh,
                LogLevel::Info,
            )
            .await;

        match self.api.countries().await {
            Ok(countries) => {
                self.event_sender
                    .send_fetch_event(
                        format!("Fetched {} countries", countries.len()),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
                let _ = self.data_sender.send(countries).await;

                self.event_sender
                    .send_event(Event::state_change(
                        FetchPhase::Waiting,
                        "Waiting until next refresh".to_string(),
                    ))
                    .await;
                Ok(())
            }
            Err(e) => {
                let log_level = Self::classify_error(&e);
                self.event_sender
                    .send_fetch_event(
                        format!("Failed to fetch statistics: {}", e),
                        EventType::Error,
                        log_level,
                    )
                    .await;

                self.event_sender
                    .send_event(Event::state_change(
                        FetchPhase::Waiting,
                        "Waiting until next refresh".to_string(),
                    ))
                    .await;
                Err(FetchError::Network(e))
            }
        }
    }

    /// Run the fetch cycle until shutdown. Refresh requests from the UI
    /// restart the interval.
    pub async fn run(
        self,
        mut refresh_requests: mpsc::Receiver<()>,
        mut shutdown: broadcast::Receiver<()>,
    ) {
        let _ = self.fetch_once().await;

        loop {
            tokio::select! {
                _ = shutdown.recv() => break,
                request = refresh_requests.recv() => {
                    if request.is_none() {
                        break;
                    }
                    let _ = self.fetch_once().await;
                }
                _ = tokio::time::sleep(self.refresh_interval) => {
                    self.event_sender
                        .send_fetch_event(
                            format!(
                                "Refresh interval elapsed ({}s)",
                                self.refresh_interval.as_secs()
                            ),
                            EventType::Waiting,
                            LogLevel::Debug,
                        )
                        .await;
                    let _ = self.fetch_once().await;
                }
            }
        }
    }
}
