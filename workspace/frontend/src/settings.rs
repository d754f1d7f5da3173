use client::ApiConfig;
use common::DEFAULT_RANK_LIMIT;
use log::Level;
use web_sys::window;

/// API base baked in at build time. Unset means same-origin requests that the
/// development proxy forwards to the backend.
const BUILD_API_BASE: Option<&str> = option_env!("GYMOPS_API_BASE");

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Scheme and host of the analytics API, empty for same-origin
    pub api_base: String,

    /// Path prefix in front of every endpoint (e.g., "/api")
    pub api_prefix: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Rows requested from the ranking endpoints
    pub rank_limit: u32,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base: BUILD_API_BASE.unwrap_or_default().to_string(),
            api_prefix: "/api".to_string(),
            log_level: Level::Info,
            rank_limit: DEFAULT_RANK_LIMIT,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from the build environment and window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            // localStorage overrides, handy when pointing a deployed build elsewhere
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(api_base)) = storage.get_item("gymops_api_base") {
                    settings.api_base = api_base;
                }

                if let Ok(Some(api_prefix)) = storage.get_item("gymops_api_prefix") {
                    settings.api_prefix = api_prefix;
                }

                if let Ok(Some(log_level)) = storage.get_item("gymops_log_level") {
                    settings.log_level = parse_log_level(&log_level).unwrap_or(settings.log_level);
                }

                if let Ok(Some(limit)) = storage.get_item("gymops_rank_limit") {
                    if let Ok(limit) = limit.parse::<u32>() {
                        settings.rank_limit = limit;
                    }
                }
            }
        }

        settings
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.api_base.clone(), self.api_prefix.clone())
    }
}

fn parse_log_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
