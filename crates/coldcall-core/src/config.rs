use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::retry::RetryPolicy;

/// Default base address for hosted inference endpoints.
pub const DEFAULT_API_BASE: &str = "https://api-inference.huggingface.co/models";

/// Environment variables consulted (in order) for the bearer credential.
pub const TOKEN_ENV_VARS: [&str; 2] = ["COLDCALL_TOKEN", "HF_TOKEN"];

/// Retry parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per call (including the first).
    pub max_attempts: u32,
    /// Wait in seconds before retrying a warming-up endpoint when the
    /// service did not suggest a duration.
    pub warmup_wait_secs: f64,
    /// Upper bound in seconds on the warming-up wait; caps service-suggested
    /// values too.
    pub warmup_wait_cap_secs: u64,
    /// Wait in seconds before retrying other transient failures.
    pub transient_wait_secs: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            warmup_wait_secs: 20.0,
            warmup_wait_cap_secs: 60,
            transient_wait_secs: 5.0,
        }
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(cfg: &RetryConfig) -> Self {
        Self {
            max_attempts: cfg.max_attempts.max(1),
            warmup_wait: Duration::from_secs_f64(cfg.warmup_wait_secs.max(0.0)),
            warmup_wait_cap: Duration::from_secs(cfg.warmup_wait_cap_secs),
            transient_wait: Duration::from_secs_f64(cfg.transient_wait_secs.max(0.0)),
        }
    }
}

/// Global configuration loaded from `~/.config/coldcall/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColdcallConfig {
    /// Base address endpoint identifiers are resolved against.
    pub api_base: String,
    /// Optional retry policy; built-in defaults are used when missing.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for ColdcallConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            retry: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("coldcall")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the default XDG path, creating a default file if
/// none exists.
pub fn load_or_init() -> Result<ColdcallConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`], for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<ColdcallConfig> {
    if !path.exists() {
        let default_cfg = ColdcallConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: ColdcallConfig = toml::from_str(&data)?;
    Ok(cfg)
}

/// Bearer credential from the environment (`COLDCALL_TOKEN`, then
/// `HF_TOKEN`). Absence is a startup error for the caller to surface; the
/// engine itself never reads the environment.
pub fn api_token() -> Option<String> {
    TOKEN_ENV_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|v| !v.trim().is_empty()))
}
