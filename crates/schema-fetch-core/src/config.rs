use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::duration::parse_duration;

/// Provider used when neither the flag nor the config file names one.
pub const DEFAULT_PROVIDER: &str = "github";
/// Request timeout used when neither the flag nor the config file sets one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Redirect hops followed before the request fails.
pub const DEFAULT_MAX_REDIRECTS: u32 = 10;

const CONFIG_FILE: &str = "config.toml";

/// Optional defaults loaded from `~/.config/schema-fetch/config.toml`.
///
/// Every key is optional; command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FetchConfig {
    /// Default provider name (`github`, `gitlab` or `none`).
    pub provider: Option<String>,
    /// Default request timeout, e.g. `"45s"` or `"2m"`.
    pub timeout: Option<String>,
    /// `User-Agent` header sent with the request.
    pub user_agent: Option<String>,
    pub max_redirects: Option<u32>,
}

impl FetchConfig {
    pub fn provider(&self) -> &str {
        self.provider.as_deref().unwrap_or(DEFAULT_PROVIDER)
    }

    pub fn timeout(&self) -> Result<Duration> {
        match &self.timeout {
            Some(raw) => parse_duration(raw).context("invalid `timeout` in config"),
            None => Ok(DEFAULT_TIMEOUT),
        }
    }

    pub fn user_agent(&self) -> String {
        self.user_agent.clone().unwrap_or_else(default_user_agent)
    }

    pub fn max_redirects(&self) -> u32 {
        self.max_redirects.unwrap_or(DEFAULT_MAX_REDIRECTS)
    }
}

pub fn default_user_agent() -> String {
    format!("schema-fetch/{}", env!("CARGO_PKG_VERSION"))
}

/// Location of an existing config file, if any.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("schema-fetch")?;
    Ok(xdg_dirs.find_config_file(CONFIG_FILE))
}

/// Load configuration from the XDG config dir. A missing file yields defaults;
/// nothing is written.
pub fn load() -> Result<FetchConfig> {
    match config_path()? {
        Some(path) => load_from(&path),
        None => Ok(FetchConfig::default()),
    }
}

pub fn load_from(path: &Path) -> Result<FetchConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: FetchConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
