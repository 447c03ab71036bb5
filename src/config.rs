// Runtime configuration. Everything that used to be read from the
// environment on demand is collected here once at startup and handed to
// the pieces that need it.

use crate::error::{Result, WorkoutError};
use std::path::PathBuf;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.api-ninjas.com/v1";
pub const DEFAULT_OUTPUT_FILE: &str = "workout_plan.txt";

/// API key, service base URL and the file the plan is written to.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub output_path: PathBuf,
}

// Hand-written so the key never ends up in logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("output_path", &self.output_path)
            .finish()
    }
}

impl Config {
    /// Config with the default service URL and output file.
    pub fn new(api_key: impl Into<String>) -> Self {
        Config {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.into(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Load `.env` if there is one, then read `API_KEY` (required),
    /// `API_NINJAS_URL` and `WORKOUT_PLAN_FILE` (both optional).
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {}", e);
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup. Blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("API_KEY").ok_or(WorkoutError::MissingApiKey)?;
        let mut config = Config::new(api_key.trim());
        if let Some(url) = get("API_NINJAS_URL") {
            config = config.with_base_url(url.trim());
        }
        if let Some(path) = get("WORKOUT_PLAN_FILE") {
            config = config.with_output_path(path);
        }
        debug!(?config, "configuration loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_only_key_is_set() {
        let config = Config::from_lookup(lookup(&[("API_KEY", "secret")])).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.output_path, PathBuf::from("workout_plan.txt"));
    }

    #[test]
    fn missing_or_blank_key_is_an_error() {
        assert!(matches!(
            Config::from_lookup(lookup(&[])),
            Err(WorkoutError::MissingApiKey)
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[("API_KEY", "   ")])),
            Err(WorkoutError::MissingApiKey)
        ));
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup(&[
            ("API_KEY", "k"),
            ("API_NINJAS_URL", "http://localhost:9000/v1/"),
            ("WORKOUT_PLAN_FILE", "/tmp/plan.txt"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:9000/v1/");
        assert_eq!(config.output_path, PathBuf::from("/tmp/plan.txt"));
    }

    #[test]
    fn debug_output_hides_the_key() {
        let rendered = format!("{:?}", Config::new("top-secret"));
        assert!(!rendered.contains("top-secret"));
    }
}
