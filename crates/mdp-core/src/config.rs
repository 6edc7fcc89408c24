use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/mdp/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MdpConfig {
    /// Address the HTTP server binds to.
    pub bind_host: String,
    /// Port the HTTP server listens on.
    pub bind_port: u16,
    /// Explicit path to the yt-dlp executable. When unset, `$PATH` is
    /// searched per request.
    #[serde(default)]
    pub ytdlp_path: Option<PathBuf>,
    /// Parent directory for per-request scratch directories. When unset,
    /// the system temp dir is used.
    #[serde(default)]
    pub scratch_dir: Option<PathBuf>,
}

impl Default for MdpConfig {
    fn default() -> Self {
        Self {
            bind_host: "0.0.0.0".to_string(),
            bind_port: 8080,
            ytdlp_path: None,
            scratch_dir: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mdp")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MdpConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MdpConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: MdpConfig = toml::from_str(&data)?;
    Ok(cfg)
}
