use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use kundali_ephem::AnalyticEphemeris;
use kundali_server::{AppState, ServerConfig, router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kundali-server", about = "Sidereal birth chart HTTP service")]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Listen address, e.g. 0.0.0.0:8000
    #[arg(long, env = "KUNDALI_BIND")]
    bind: Option<SocketAddr>,
    /// Offset of submitted birth times from UT, in hours
    #[arg(long, env = "KUNDALI_UTC_OFFSET", allow_hyphen_values = true)]
    utc_offset: Option<f64>,
    /// Chart computation timeout in milliseconds
    #[arg(long, env = "KUNDALI_EPHEMERIS_TIMEOUT_MS")]
    timeout_ms: Option<u64>,
    /// Maximum charts computed at once
    #[arg(long, env = "KUNDALI_MAX_CHARTS")]
    max_charts: Option<usize>,
    /// Log filter directive (RUST_LOG syntax)
    #[arg(long, env = "KUNDALI_LOG")]
    log: Option<String>,
}

impl Args {
    fn resolve(&self) -> anyhow::Result<ServerConfig> {
        let mut cfg = ServerConfig::load(self.config.as_deref())?;
        if let Some(bind) = self.bind {
            cfg.bind = bind;
        }
        if let Some(hours) = self.utc_offset {
            cfg.utc_offset_hours = hours;
        }
        if let Some(ms) = self.timeout_ms {
            cfg.ephemeris_timeout_ms = ms;
        }
        if let Some(n) = self.max_charts {
            cfg.max_concurrent_charts = n;
        }
        if let Some(log) = &self.log {
            cfg.log_filter = log.clone();
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = Args::parse().resolve()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let state = AppState::with_provider(AnalyticEphemeris::new(), cfg.chart_config()?, cfg.timeout())
        .with_max_charts(cfg.max_concurrent_charts);
    let listener = tokio::net::TcpListener::bind(cfg.bind)
        .await
        .with_context(|| format!("binding {}", cfg.bind))?;
    info!(
        bind = %cfg.bind,
        utc_offset_hours = cfg.utc_offset_hours,
        timeout_ms = cfg.ephemeris_timeout_ms,
        max_charts = cfg.max_concurrent_charts,
        "kundali server listening"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // Without a signal handler, run until killed.
        std::future::pending::<()>().await;
    }
}
