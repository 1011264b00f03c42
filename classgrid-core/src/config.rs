//! Global classgrid configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{ClassGridError, ClassGridResult};

static DEFAULT_DATA_FILE: &str = "~/.classgrid/schedules.json";

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn is_default_data_file(p: &PathBuf) -> bool {
    *p == default_data_file()
}

fn default_true() -> bool {
    true
}

fn is_true(b: &bool) -> bool {
    *b
}

/// Configuration at ~/.config/classgrid/config.toml
///
/// Every key can also be set through a `CLASSGRID_` environment variable,
/// e.g. `CLASSGRID_DATA_FILE`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ClassGridConfig {
    #[serde(default = "default_data_file", skip_serializing_if = "is_default_data_file")]
    pub data_file: PathBuf,

    /// Section used when a command doesn't name one (id or name).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_section: Option<String>,

    /// Create the sample sections when the store has none.
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub seed_sample_sections: bool,
}

impl Default for ClassGridConfig {
    fn default() -> Self {
        ClassGridConfig {
            data_file: default_data_file(),
            default_section: None,
            seed_sample_sections: true,
        }
    }
}

impl ClassGridConfig {
    pub fn config_path() -> ClassGridResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ClassGridError::Config("Could not determine config directory".into()))?
            .join("classgrid");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented template first
    /// if there is no config file yet.
    pub fn load() -> ClassGridResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// The file at `path` with `CLASSGRID_*` environment overrides on top.
    pub fn load_from(path: &Path) -> ClassGridResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("CLASSGRID"))
            .build()
            .map_err(|e| ClassGridError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ClassGridError::Config(e.to_string()))
    }

    /// The file at `path` alone, without environment overrides.
    pub fn load_file(path: &Path) -> ClassGridResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| ClassGridError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ClassGridError::Config(e.to_string()))
    }

    /// Store `section` as `default_section` in the config file at the
    /// default location.
    pub fn set_default_section(section: &str) -> ClassGridResult<Self> {
        Self::set_default_section_in(&Self::config_path()?, section)
    }

    /// Rewrite the file at `path` with a new `default_section`. Values that
    /// only came from the environment are not written back.
    pub fn set_default_section_in(path: &Path, section: &str) -> ClassGridResult<Self> {
        let mut config = Self::load_file(path)?;
        config.default_section = Some(section.to_string());
        config.save_to(path)?;
        Ok(config)
    }

    /// The data file with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Save the current config to ~/.config/classgrid/config.toml
    pub fn save(&self) -> ClassGridResult<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> ClassGridResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ClassGridError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ClassGridError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, content)
            .map_err(|e| ClassGridError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> ClassGridResult<()> {
        let contents = format!(
            "\
# classgrid configuration

# Where sections and schedules are stored:
# data_file = \"{}\"

# Section to use when a command doesn't name one:
# default_section = \"CPE2-1\"

# Create sample sections on first run:
# seed_sample_sections = true
",
            DEFAULT_DATA_FILE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ClassGridError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ClassGridError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
