//! Settings persistence: TOML file under the XDG config dir.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::Settings;

pub fn settings_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mto")?;
    Ok(xdg_dirs.place_config_file("settings.toml")?)
}

/// Load settings from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<Settings> {
    load_or_init_at(&settings_path()?)
}

/// Write settings to disk.
pub fn save(settings: &Settings) -> Result<()> {
    save_at(&settings_path()?, settings)
}

/// Rewrite the settings file with defaults and return them.
pub fn reset() -> Result<Settings> {
    let defaults = Settings::default();
    save(&defaults)?;
    tracing::info!("settings reset to defaults");
    Ok(defaults)
}

/// Render settings as the same TOML the settings file holds.
pub fn to_toml(settings: &Settings) -> Result<String> {
    Ok(toml::to_string_pretty(settings)?)
}

pub(crate) fn load_or_init_at(path: &Path) -> Result<Settings> {
    if !path.exists() {
        let defaults = Settings::default();
        save_at(path, &defaults)?;
        tracing::info!("created default settings at {}", path.display());
        return Ok(defaults);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("reading settings file {}", path.display()))?;
    let settings: Settings = toml::from_str(&data)
        .with_context(|| format!("parsing settings file {}", path.display()))?;
    Ok(settings)
}

pub(crate) fn save_at(path: &Path, settings: &Settings) -> Result<()> {
    let text = toml::to_string_pretty(settings)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)
        .with_context(|| format!("writing settings file {}", path.display()))?;
    Ok(())
}
