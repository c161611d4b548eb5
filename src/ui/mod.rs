//! Terminal UI

pub mod app;
pub mod dashboard;
pub mod metrics;
pub mod splash;

pub use app::{App, UIConfig, run};
