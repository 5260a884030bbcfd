//! Configuration for the ecast command line.
//!
//! Settings live in `<config dir>/ecast/config.toml` unless `--config` points
//! elsewhere. Every section is optional; a missing default file means defaults.

use anyhow::{anyhow, Context, Result};
use ecast_ts::DEFAULT_HORIZON;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EcastConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub forecast: ForecastConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dataset location
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DataConfig {
    /// Directory of dataset files; the built-in datasets are used when unset
    #[serde(default)]
    pub data_dir: Option<String>,
}

impl DataConfig {
    pub fn data_dir(&self) -> Option<PathBuf> {
        self.data_dir.as_deref().map(expand_home)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Years projected past the last historical year
    #[serde(default = "default_horizon")]
    pub horizon: u32,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon: default_horizon(),
        }
    }
}

fn default_horizon() -> u32 {
    DEFAULT_HORIZON
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl LoggingConfig {
    pub fn level(&self) -> Result<tracing::Level> {
        self.level
            .parse()
            .map_err(|_| anyhow!("invalid log level '{}' in configuration", self.level))
    }
}

/// `<config dir>/ecast/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ecast").join("config.toml"))
}

/// Load configuration from `path`, or from the default location.
///
/// An explicit path must exist; the default location may be absent.
pub fn load_config(path: Option<&Path>) -> Result<EcastConfig> {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(EcastConfig::default()),
        },
    };

    let contents = std::fs::read_to_string(&config_path)
        .with_context(|| format!("reading config {}", config_path.display()))?;
    let config: EcastConfig = toml::from_str(&contents)
        .with_context(|| format!("parsing config {}", config_path.display()))?;
    Ok(config)
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_when_sections_missing() {
        let config: EcastConfig = toml::from_str("").unwrap();
        assert_eq!(config.forecast.horizon, DEFAULT_HORIZON);
        assert_eq!(config.logging.level, "info");
        assert!(config.data.data_dir().is_none());
    }

    #[test]
    fn reads_explicit_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ecast.toml");
        std::fs::write(
            &path,
            "[data]\ndata_dir = \"/srv/energy\"\n\n[forecast]\nhorizon = 5\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.forecast.horizon, 5);
        assert_eq!(config.data.data_dir(), Some(PathBuf::from("/srv/energy")));
        assert_eq!(config.logging.level().unwrap(), tracing::Level::DEBUG);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn invalid_log_level_is_reported() {
        let logging = LoggingConfig {
            level: "loud".to_string(),
        };
        assert!(logging.level().is_err());
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let config = EcastConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: EcastConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.forecast.horizon, config.forecast.horizon);
    }
}
