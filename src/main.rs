use anyhow::{Context, Result, bail};
use contradiction_gateway::{config, server};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// `RUST_LOG` wins over `server.logs.level`; only a bare level is accepted.
fn log_level(configured: &str) -> Result<String> {
    let level = std::env::var("RUST_LOG").unwrap_or_else(|_| configured.to_string());
    if level.parse::<LevelFilter>().is_err() {
        bail!("unknown log level '{level}', expected one of error, warn, info, debug, trace");
    }
    Ok(level)
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()
        .await
        .context("could not load gateway configuration")?;
    let level = log_level(&config.server.logs.level)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&level))
        .json()
        .init();

    info!(
        "Serving contradiction predictions on {}:{} ({})",
        config.server.host, config.server.port, level
    );

    server::run(config).await?;

    Ok(())
}
