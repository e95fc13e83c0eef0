//! Persisted generator settings.

mod file;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entropy::EntropySource;
use crate::pass::Config;

pub use file::default_path;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to encode settings: {0}")]
    Encode(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Passwords printed per run.
    pub count: usize,
    pub entropy: EntropySource,
    /// Append passwords here instead of stdout.
    pub output: Option<PathBuf>,
    pub generator: Config,
}

impl Settings {
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&default_path())
    }

    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&default_path())
    }

    /// Read settings from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        file::load(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        file::save(self, path)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            count: 1,
            entropy: EntropySource::default(),
            output: None,
            generator: Config::default(),
        }
    }
}
