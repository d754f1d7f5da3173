use anyhow::Result;
use client::ApiConfig;
use common::DEFAULT_RANK_LIMIT;
use config::{Config, Environment, Source};
use serde::Deserialize;
use std::time::Duration;

/// Settings for the terminal dashboard.
///
/// Layered from built-in defaults, then `GYMOPS_*` environment variables
/// (a `.env` file is honoured), then command-line flags.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CliSettings {
    /// Scheme and host of the analytics API
    pub api_base: String,
    /// Path prefix in front of every endpoint, empty when talking to the API directly
    pub api_prefix: String,
    /// Rows requested from the ranking endpoints
    pub rank_limit: u32,
    /// Per-request timeout
    pub request_timeout_secs: u64,
}

impl CliSettings {
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.api_base.clone(), self.api_prefix.clone())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Applies command-line overrides on top of the loaded settings.
    pub fn with_overrides(mut self, api_base: Option<String>, api_prefix: Option<String>) -> Self {
        if let Some(api_base) = api_base {
            self.api_base = api_base;
        }
        if let Some(api_prefix) = api_prefix {
            self.api_prefix = api_prefix;
        }
        self
    }
}

/// Load settings from `.env` and the process environment.
pub fn load_settings() -> Result<CliSettings> {
    dotenvy::dotenv().ok();
    load_settings_from(Environment::with_prefix("GYMOPS").try_parsing(true))
}

fn load_settings_from<S>(environment: S) -> Result<CliSettings>
where
    S: Source + Send + Sync + 'static,
{
    let settings = Config::builder()
        .set_default("api_base", "http://127.0.0.1:8000")?
        .set_default("api_prefix", "")?
        .set_default("rank_limit", i64::from(DEFAULT_RANK_LIMIT))?
        .set_default("request_timeout_secs", 30_i64)?
        .add_source(environment)
        .build()?;

    let settings: CliSettings = settings.try_deserialize()?;
    tracing::debug!(?settings, "Loaded CLI settings");
    Ok(settings)
}
