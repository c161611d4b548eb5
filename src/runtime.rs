//! Runtime wiring for the fetch worker

use crate::api::CovidApi;
use crate::consts::dashboard_consts::EVENT_QUEUE_SIZE;
use crate::country::CountryRecord;
use crate::events::Event;
use crate::workers::core::EventSender;
use crate::workers::fetcher::StatsFetcher;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Channel ends the UI holds onto while the fetch worker runs.
pub struct FetchWorkerHandles {
    /// Worker log/status events.
    pub event_receiver: mpsc::Receiver<Event>,
    /// Parsed country tables, one per successful fetch.
    pub data_receiver: mpsc::Receiver<Vec<CountryRecord>>,
    /// Triggers an immediate re-fetch (the `r` key).
    pub refresh_sender: mpsc::Sender<()>,
    /// Broadcasts shutdown to the worker.
    pub shutdown_sender: broadcast::Sender<()>,
    pub join_handle: JoinHandle<()>,
}

/// Start the single stats-fetching worker.
pub fn start_fetch_worker(api: Box<dyn CovidApi>, refresh_interval: Duration) -> FetchWorkerHandles {
    let (event_tx, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
    let (data_tx, data_receiver) = mpsc::channel(8);
    let (refresh_sender, refresh_rx) = mpsc::channel(4);
    let (shutdown_sender, shutdown_rx) = broadcast::channel(1);

    let fetcher = StatsFetcher::new(api, EventSender::new(event_tx), data_tx, refresh_interval);
    let join_handle = tokio::spawn(fetcher.run(refresh_rx, shutdown_rx));

    FetchWorkerHandles {
        event_receiver,
        data_receiver,
        refresh_sender,
        shutdown_sender,
        join_handle,
    }
}
