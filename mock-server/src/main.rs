use anyhow::Context;
use dotenv::dotenv;
use mock_server::{config::ServerConfig, logging};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    logging::setup_logging(logging::init_env_filter()?);

    let config = ServerConfig::from_env()?;
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    mock_server::run(listener).await?;
    Ok(())
}
