use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::warn;

use super::StripConfig;

/// Directory the strip's config folder lives in.  `XDG_CONFIG_HOME` wins,
/// then `.config` under `HOME`, then under `USERPROFILE` on Windows.
pub fn config_base_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from).or_else(|| {
        ["HOME", "USERPROFILE"]
            .into_iter()
            .find_map(std::env::var_os)
            .map(|home| PathBuf::from(home).join(".config"))
    })
}

/// `<config base>/tabstrip/config.ron`, when a base directory is known.
pub fn config_path() -> Option<PathBuf> {
    config_base_dir().map(|base| base.join("tabstrip").join("config.ron"))
}

/// Reads and parses the config at `path`.
pub fn load_config_from(path: &Path) -> anyhow::Result<StripConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    ron::from_str(&contents).with_context(|| format!("failed to parse config {}", path.display()))
}

/// Loads the config from disk, falling back to defaults on any error.
pub fn load_config() -> StripConfig {
    let Some(path) = config_path() else {
        return StripConfig::default();
    };
    if !path.exists() {
        return StripConfig::default();
    }
    load_config_from(&path).unwrap_or_else(|err| {
        warn!("{err:#}, using defaults");
        StripConfig::default()
    })
}

/// Writes the config to `path`, creating missing parent directories.
/// Failures come back to the caller, which decides whether they matter.
pub fn save_config(config: &StripConfig, path: &Path) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create config dir {}", dir.display()))?;
    }
    let pretty = ron::ser::PrettyConfig::default();
    let serialized =
        ron::ser::to_string_pretty(config, pretty).context("failed to serialize config")?;
    fs::write(path, serialized).with_context(|| format!("failed to write config {}", path.display()))
}
