use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/urlroute/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Path prefix of the application (e.g. "/" for the site, "/administrator/" for the backend).
    pub base_path: String,
    /// Full URL of the current request; its host and port are used for absolute URLs.
    pub request_uri: String,
    /// Rewrite `index.php?option=com_x&view=y&id=z` into `component/x/y/z`.
    #[serde(default)]
    pub sef: bool,
    /// Router-wide query vars merged under every `&...` or structured descriptor.
    #[serde(default)]
    pub vars: BTreeMap<String, String>,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            base_path: "/".to_string(),
            request_uri: "http://localhost/".to_string(),
            sef: false,
            vars: BTreeMap::new(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlroute")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RouteConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RouteConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<RouteConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: RouteConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
