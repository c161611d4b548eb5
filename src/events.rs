//! Event System
//!
//! Types and implementations for worker events shown in the activity log.

use crate::logging::{self, LogLevel};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Worker {
    /// Worker that fetches country statistics from the API.
    StatsFetcher,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Waiting,
    StateChange,
}

/// Represents the current phase of the fetch cycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum FetchPhase {
    /// Requesting and decoding the country table
    Fetching,
    /// Waiting until the next refresh (idle state)
    Waiting,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Optional phase information for state change events
    pub fetch_phase: Option<FetchPhase>,
}

impl Event {
    fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            fetch_phase: None,
        }
    }

    pub fn state_change(phase: FetchPhase, msg: String) -> Self {
        Self {
            worker: Worker::StatsFetcher,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type: EventType::StateChange,
            log_level: LogLevel::Info,
            fetch_phase: Some(phase),
        }
    }

    pub fn fetcher_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::StatsFetcher, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // StateChange events drive the header gauge, not the log panel
        if self.event_type == EventType::StateChange {
            return false;
        }
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        self.log_level.passes(logging::env_threshold())
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
