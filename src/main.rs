use anyhow::{Context, Result};
use razz_coach::{config, server};
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = config::load()
        .await
        .context("Failed to load configuration")?;

    let level = config
        .server
        .logs
        .level
        .parse::<LevelFilter>()
        .with_context(|| {
            format!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                config.server.logs.level
            )
        })?;

    // RUST_LOG still wins over the configured level.
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!("Starting razz-coach with log level: {}", level);

    server::run(config).await?;

    Ok(())
}
