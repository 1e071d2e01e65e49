//! Service configuration.
//!
//! Defaults, then an optional TOML file, then command-line flags and
//! environment variables (applied by the binary).

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use kundali_chart::ChartConfig;
use kundali_ephem::HouseSystem;
use kundali_time::UtcOffset;
use serde::Deserialize;

use crate::routes::DEFAULT_MAX_CHARTS;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Offset of submitted birth times from UT, in hours.
    pub utc_offset_hours: f64,
    /// Upper bound on one chart computation.
    pub ephemeris_timeout_ms: u64,
    /// Charts allowed on blocking threads at once, timed-out ones included.
    pub max_concurrent_charts: usize,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 8000)),
            utc_offset_hours: 5.5,
            ephemeris_timeout_ms: 5000,
            max_concurrent_charts: DEFAULT_MAX_CHARTS,
            log_filter: "info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(text).context("parsing server config")?;
        config.validate()?;
        Ok(config)
    }

    /// Read `path` if given, else start from defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(p) => {
                let text = std::fs::read_to_string(p)
                    .with_context(|| format!("reading config file {}", p.display()))?;
                Self::from_toml_str(&text)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.utc_offset()?;
        if self.ephemeris_timeout_ms == 0 {
            anyhow::bail!("ephemeris_timeout_ms must be greater than zero");
        }
        if self.max_concurrent_charts == 0 {
            anyhow::bail!("max_concurrent_charts must be greater than zero");
        }
        Ok(())
    }

    pub fn utc_offset(&self) -> anyhow::Result<UtcOffset> {
        UtcOffset::from_hours(self.utc_offset_hours).context("utc_offset_hours")
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.ephemeris_timeout_ms)
    }

    pub fn chart_config(&self) -> anyhow::Result<ChartConfig> {
        Ok(ChartConfig {
            utc_offset: self.utc_offset()?,
            house_system: HouseSystem::WholeSign,
        })
    }
}
