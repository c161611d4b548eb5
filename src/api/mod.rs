use crate::api::error::ApiError;
use crate::country::CountryRecord;
use crate::environment::Environment;

pub(crate) mod client;
pub use client::CovidApiClient;
pub mod error;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait CovidApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetch the full per-country statistics table.
    async fn countries(&self) -> Result<Vec<CountryRecord>, ApiError>;
}
