//! Log level filtering for the activity panel
//!
//! Worker events carry a severity; whether a low-severity event shows up in
//! the activity log is controlled by a `RUST_LOG`-style threshold.

use std::env;
use std::str::FromStr;

/// Severity of a worker event.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// True when an event at this level clears the threshold.
    pub fn passes(self, threshold: LogLevel) -> bool {
        self >= threshold
    }
}

impl FromStr for LogLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(()),
        }
    }
}

/// Threshold from a `RUST_LOG`-style directive list. Both the bare form
/// (`debug`) and the per-target form (`covidtop=debug,reqwest=warn`) are
/// accepted; the first directive wins. Unparseable input means `Info`.
pub fn threshold_from_directives(directives: &str) -> LogLevel {
    directives
        .split(',')
        .next()
        .and_then(|directive| directive.rsplit('=').next())
        .and_then(|level| level.parse().ok())
        .unwrap_or(LogLevel::Info)
}

/// The activity-log threshold from the `RUST_LOG` variable, `Info` when
/// unset.
pub fn env_threshold() -> LogLevel {
    match env::var("RUST_LOG") {
        Ok(directives) => threshold_from_directives(&directives),
        Err(_) => LogLevel::Info,
    }
}
