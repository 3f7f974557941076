use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::app_env;

/// Filter built from [app_env::LOG_LEVEL], "info" by default.
pub fn init_env_filter() -> anyhow::Result<EnvFilter> {
    Ok(EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var(app_env::LOG_LEVEL)
        .from_env()?)
}

/// Installs the global fmt subscriber writing to stdout.
pub fn setup_logging(env_filter: EnvFilter) {
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
