//! Environment-driven settings for the mock backend.

use std::env;

use anyhow::Context;

/// Names of the environment variables read at startup. A `.env` file in the
/// working directory is loaded first.
pub mod app_env {
    /// Port to listen on, `8000` when unset.
    pub const PORT: &str = "PORT";
    /// Interface to bind, `127.0.0.1` when unset.
    pub const HOST: &str = "HOST";
    /// Log filter directives, see `tracing_subscriber::EnvFilter`.
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
}

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup(app_env::HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup(app_env::PORT) {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("{} must be a port number, got {raw:?}", app_env::PORT))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
