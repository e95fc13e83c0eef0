//! Settings file persistence.

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::{Settings, SettingsError};

const APP_DIR: &str = "simplepw";
const FILE_NAME: &str = "settings.toml";

pub fn load(path: &Path) -> Result<Settings, SettingsError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("no settings at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        Err(e) => return Err(e.into()),
    };

    let settings = toml::from_str(&text)?;
    debug!("loaded settings from {}", path.display());
    Ok(settings)
}

pub fn save(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let text = toml::to_string_pretty(settings)?;
    fs::write(path, text)?;
    info!("settings saved to {}", path.display());
    Ok(())
}

/// `<config dir>/simplepw/settings.toml`, falling back to `$HOME/.config`.
pub fn default_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let home = env::var("HOME").unwrap_or_else(|_| ".".into());
        Path::new(&home).join(".config")
    });
    base.join(APP_DIR).join(FILE_NAME)
}
