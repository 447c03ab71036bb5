// API client module: a small blocking HTTP client for the API Ninjas
// quotes and exercises endpoints. Both calls are single unauthenticated
// GETs carrying the same static `X-Api-Key` header.

use crate::config::Config;
use crate::error::{Result, WorkoutError};
use crate::plan::{Exercise, Quote};
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

pub const API_KEY_HEADER: &str = "X-Api-Key";
pub const QUOTE_CATEGORY: &str = "fitness";

/// The two remote lookups the workout flow needs. `ApiClient` is the real
/// implementation; tests substitute canned data.
pub trait WorkoutApi {
    /// All quotes in the fitness category.
    fn fetch_quotes(&self) -> Result<Vec<Quote>>;

    /// Exercises for a difficulty level, in the order the service returns
    /// them. `WorkoutPlan::new` keeps only the first `MAX_EXERCISES`.
    fn fetch_exercises(&self, difficulty: &str) -> Result<Vec<Exercise>>;
}

/// Holds a reqwest blocking client with the API key preset as a default
/// header, plus the base URL of the service.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        // The key goes on every request as a default header; marking it
        // sensitive keeps it out of reqwest's debug output.
        let mut key =
            HeaderValue::from_str(&config.api_key).map_err(|_| WorkoutError::InvalidApiKey)?;
        key.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(WorkoutError::ClientBuild)?;
        // Accept base URLs with or without a trailing slash.
        Ok(ApiClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET `{base_url}/{endpoint}` with the given query and decode the JSON
    /// body as `T`.
    fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, ?query, "GET");
        let res = self
            .client
            .get(&url)
            .query(query)
            .send()
            .map_err(|source| WorkoutError::Request { endpoint, source })?;
        let body = check_status(endpoint, res)?;
        // Decode from the text body so a bad shape is reported as a serde
        // error (missing field, wrong type) rather than a transport error.
        serde_json::from_str(&body).map_err(|source| WorkoutError::Decode { endpoint, source })
    }
}

/// Turn a non-2xx response into `WorkoutError::Status`, otherwise return the
/// body text.
fn check_status(endpoint: &'static str, res: Response) -> Result<String> {
    let status = res.status();
    if !status.is_success() {
        // Keep whatever the service said; an unreadable body becomes "".
        let body = res.text().unwrap_or_default();
        return Err(WorkoutError::Status {
            endpoint,
            status,
            body,
        });
    }
    res.text()
        .map_err(|source| WorkoutError::Request { endpoint, source })
}

impl WorkoutApi for ApiClient {
    fn fetch_quotes(&self) -> Result<Vec<Quote>> {
        let quotes: Vec<Quote> = self.get_json("quotes", &[("category", QUOTE_CATEGORY)])?;
        debug!(count = quotes.len(), "quotes received");
        Ok(quotes)
    }

    fn fetch_exercises(&self, difficulty: &str) -> Result<Vec<Exercise>> {
        // The level is passed through unvalidated; reqwest URL-encodes it.
        let exercises: Vec<Exercise> =
            self.get_json("exercises", &[("difficulty", difficulty)])?;
        debug!(count = exercises.len(), "exercises received");
        Ok(exercises)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_key_that_cannot_be_a_header() {
        let config = Config::new("bad\nkey");
        assert!(matches!(
            ApiClient::new(&config),
            Err(WorkoutError::InvalidApiKey)
        ));
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let config = Config::new("k").with_base_url("http://localhost:1234/v1/");
        let api = ApiClient::new(&config).unwrap();
        assert_eq!(api.base_url, "http://localhost:1234/v1");
    }
}
