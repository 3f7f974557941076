//! Environment-driven settings for the terminal client.

use std::env;
use std::path::PathBuf;

/// Names of the environment variables read at startup. A `.env` file in the
/// working directory is loaded first.
pub mod app_env {
    /// Base URL of the todo backend; `/todos` is appended by the client.
    pub const API_URL: &str = "TODO_API_URL";
    /// File that receives log output. Logging is off when unset because the
    /// terminal UI owns stdout.
    pub const LOG_FILE: &str = "TODO_LOG_FILE";
    /// Log filter directives, see `tracing_subscriber::EnvFilter`.
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
}

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup(app_env::API_URL)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let log_file = lookup(app_env::LOG_FILE)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);
        Self { api_url, log_file }
    }
}
