//! Dashboard configuration.
//!
//! Loaded from `dashboard_config.json` with an environment variable override.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use spectre_core::constants::*;
use spectre_core::types::GeoCoord;

pub const BUILTIN_DASHBOARD_CONFIG: &str = include_str!("data/dashboard_config.json");

/// Environment variable naming an override config file.
pub const CONFIG_PATH_ENV: &str = "SPECTRE_CONFIG_PATH";

/// Root configuration for the dashboard coordinator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Animation clock period.
    pub tick_period_ms: u64,
    /// Seed for the stats counter jitter.
    pub seed: u64,
    /// Wall-clock start for the top bar clock, Unix seconds. `None` uses the
    /// current time when the engine is created.
    pub started_at_unix: Option<i64>,
    pub terminal: TerminalConfig,
    pub stats: StatsConfig,
    pub clock: ClockConfig,
    pub viewport: ViewportConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: TICK_PERIOD_MS,
            seed: 42,
            started_at_unix: None,
            terminal: TerminalConfig::default(),
            stats: StatsConfig::default(),
            clock: ClockConfig::default(),
            viewport: ViewportConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub cycle_ms: u64,
    pub restart_pause_ms: u64,
    pub lead_in_ms: u64,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            cycle_ms: TERMINAL_CYCLE_MS,
            restart_pause_ms: TERMINAL_RESTART_PAUSE_MS,
            lead_in_ms: TERMINAL_LEAD_IN_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    pub jitter_period_ms: u64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            jitter_period_ms: STATS_JITTER_PERIOD_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub refresh_ms: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            refresh_ms: CLOCK_REFRESH_MS,
        }
    }
}

/// Projection and pan/zoom defaults for the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub center: GeoCoord,
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub scale: f64,
    pub width: f64,
    pub height: f64,
    /// Click hit-test radius around agent markers, screen units.
    pub pick_radius: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            scale: PROJECTION_SCALE,
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
            pick_radius: PICK_RADIUS,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse dashboard config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read dashboard config from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid dashboard config: {0}")]
    Invalid(String),
}

impl DashboardConfig {
    /// Parse the embedded config.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json_str(BUILTIN_DASHBOARD_CONFIG)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Reject values that would stall a timer, skip the terminal reset or
    /// invert the zoom range.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.tick_period_ms == 0 {
            return Err(ConfigError::Invalid("tick_period_ms must be positive".into()));
        }
        if self.terminal.restart_pause_ms == 0 {
            return Err(ConfigError::Invalid(
                "terminal restart pause must be positive".into(),
            ));
        }
        if self.clock.refresh_ms == 0 || self.stats.jitter_period_ms == 0 {
            return Err(ConfigError::Invalid(
                "clock and stats periods must be positive".into(),
            ));
        }
        let v = &self.viewport;
        if !(v.min_zoom > 0.0 && v.min_zoom <= v.max_zoom) {
            return Err(ConfigError::Invalid(format!(
                "zoom range [{}, {}] is empty",
                v.min_zoom, v.max_zoom
            )));
        }
        if v.scale <= 0.0 || v.width <= 0.0 || v.height <= 0.0 {
            return Err(ConfigError::Invalid(
                "projection scale and map size must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Load the dashboard config from `SPECTRE_CONFIG_PATH`, falling back to the
/// builtin document and finally to compiled defaults.
///
/// Returns the config and the file it came from, if any.
pub fn load_dashboard_config_from_env() -> (DashboardConfig, Option<PathBuf>) {
    if let Some(path) = env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from) {
        match DashboardConfig::from_file(&path) {
            Ok(config) => {
                tracing::info!(
                    target: "spectre::config",
                    path = %path.display(),
                    "dashboard_config.loaded=file"
                );
                return (config, Some(path));
            }
            Err(err) => {
                tracing::warn!(
                    target: "spectre::config",
                    path = %path.display(),
                    error = %err,
                    "dashboard_config.load_failed"
                );
            }
        }
    }

    match DashboardConfig::builtin() {
        Ok(config) => {
            tracing::info!(target: "spectre::config", "dashboard_config.loaded=builtin");
            (config, None)
        }
        Err(err) => {
            tracing::warn!(
                target: "spectre::config",
                error = %err,
                "dashboard_config.builtin_invalid"
            );
            (DashboardConfig::default(), None)
        }
    }
}
