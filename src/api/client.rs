//! COVID-19 statistics API client
//!
//! A thin client for the countries-statistics endpoint. One GET, a status
//! check, then a JSON decode of the country array. Both connect and request
//! timeouts are explicit so a hanging API cannot stall the render loop
//! indefinitely.

use crate::api::CovidApi;
use crate::api::error::ApiError;
use crate::consts::dashboard_consts::fetching;
use crate::country::CountryRecord;
use crate::environment::Environment;
use reqwest::{Client, ClientBuilder, Response};

// User-Agent string with the dashboard version
const USER_AGENT: &str = concat!("covidtop/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct CovidApiClient {
    client: Client,
    environment: Environment,
}

impl CovidApiClient {
    pub fn new(environment: Environment) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(fetching::connect_timeout())
                .timeout(fetching::request_timeout())
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    fn decode_countries(bytes: &[u8]) -> Result<Vec<CountryRecord>, ApiError> {
        serde_json::from_slice(bytes).map_err(ApiError::Decode)
    }
}

#[async_trait::async_trait]
impl CovidApi for CovidApiClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Fetch the full per-country statistics table.
    async fn countries(&self) -> Result<Vec<CountryRecord>, ApiError> {
        let url = self.environment.countries_url();
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_countries(&response_bytes)
    }
}

#[cfg(test)]
/// Ignored by default since it requires the live statistics API.
mod live_api_tests {
    use super::*;

    #[tokio::test]
    #[ignore] // This test requires the live statistics API.
    /// Should fetch a non-empty country table from production.
    async fn test_fetch_countries() {
        let client = CovidApiClient::new(Environment::Production);
        match client.countries().await {
            Ok(countries) => {
                println!("Fetched {} countries", countries.len());
                assert!(!countries.is_empty());
            }
            Err(e) => panic!("Failed to fetch countries: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_country_array() {
        let body = br#"[{"country":"France","cases":10,"countryInfo":{"lat":46.0,"long":2.0}}]"#;
        let countries = CovidApiClient::decode_countries(body).unwrap();
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].country, "France");
    }

    #[test]
    fn non_json_body_is_a_decode_error() {
        let result = CovidApiClient::decode_countries(b"<html>maintenance</html>");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
