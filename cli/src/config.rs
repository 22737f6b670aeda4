// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use monthcal_core::{APP_NAME, CalendarConfig};
use tokio::fs;

const MONTHCAL_CONFIG_ENV: &str = "MONTHCAL_CONFIG";

/// Load the configuration.
///
/// The file is taken from `path`, then from `MONTHCAL_CONFIG`, then from the
/// user config directory. An explicitly named file must exist; a missing file
/// at the default location yields the defaults.
#[tracing::instrument]
pub async fn parse_config(
    path: Option<PathBuf>,
) -> Result<(CalendarConfig, Config), Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(MONTHCAL_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config found, using defaults");
            return Ok((CalendarConfig::default(), Config::default()));
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map(|a| (a.core, a.cli))
}

/// Configuration of the terminal front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// Most event dots drawn under a day, extra events only show in the list.
    #[serde(default = "default_max_indicators")]
    pub max_indicators: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_indicators: default_max_indicators(),
        }
    }
}

fn default_max_indicators() -> usize {
    3
}

#[derive(Debug, Default, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CalendarConfig,

    #[serde(default)]
    cli: Config,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}
