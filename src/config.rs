use crate::casing::Case;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".keycase.toml";

#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub case: Case,
    pub pretty: bool,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            case: Case::default(),
            pretty: true,
            color: true,
        }
    }
}

/// Contents of a single config file; every field a file sets overrides
/// the layers below it, including a value equal to the default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub case: Option<Case>,
    pub pretty: Option<bool>,
    pub color: Option<bool>,
}

/// Overrides supplied on the command line; `None` leaves the file value alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub case: Option<Case>,
    pub compact: bool,
    pub no_color: bool,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: &Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config = config.merge(Self::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            config = config.merge(Self::from_file(&local_path)?);
        }

        Ok(config.apply(overrides))
    }

    pub fn from_file(path: &Path) -> Result<FileConfig> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, file: FileConfig) -> Self {
        if let Some(case) = file.case {
            self.case = case;
        }
        if let Some(pretty) = file.pretty {
            self.pretty = pretty;
        }
        if let Some(color) = file.color {
            self.color = color;
        }
        self
    }

    fn apply(mut self, overrides: &Overrides) -> Self {
        if let Some(case) = overrides.case {
            self.case = case;
        }
        if overrides.compact {
            self.pretty = false;
        }
        if overrides.no_color {
            self.color = false;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "keycase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
