use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Linker defaults (optional section in config.toml). Command-line flags
/// override these.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkerConfig {
    /// Root directory containing resource subfolders to link.
    #[serde(default)]
    pub source_root: Option<PathBuf>,
    /// Target graphics directory, overriding platform detection.
    #[serde(default)]
    pub target_root: Option<PathBuf>,
}

/// Global configuration loaded from `~/.config/fma/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FmaConfig {
    /// Defaults for the resource linker.
    #[serde(default)]
    pub linker: LinkerConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fma")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FmaConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FmaConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FmaConfig = toml::from_str(&data)?;
    Ok(cfg)
}
