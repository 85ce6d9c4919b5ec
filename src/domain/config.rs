use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// The name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "stocktake.toml";

/// Configuration for the inventory tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Where the inventory is persisted.
    ///
    /// Relative paths are resolved against the working directory.
    file: PathBuf,

    /// Whether the interactive form asks for confirmation before deleting an
    /// item.
    pub confirm_delete: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: default_file(),
            confirm_delete: false,
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the configuration if the file exists, falling back to the
    /// defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Returns the path of the inventory file.
    #[must_use]
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Sets the path of the inventory file.
    pub fn set_file(&mut self, file: PathBuf) {
        self.file = file;
    }
}

/// Errors that can occur when loading or saving the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        /// The configuration file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or has unexpected values.
    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        /// The configuration file.
        path: PathBuf,
        /// The underlying TOML error.
        source: toml::de::Error,
    },

    /// The configuration could not be serialized.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The configuration file could not be written.
    #[error("Failed to write config file {}: {source}", path.display())]
    Write {
        /// The configuration file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

fn default_file() -> PathBuf {
    PathBuf::from("inventory.json")
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_file")]
        file: PathBuf,

        #[serde(default)]
        confirm_delete: bool,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                file,
                confirm_delete,
            } => Self {
                file,
                confirm_delete,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            file: config.file,
            confirm_delete: config.confirm_delete,
        }
    }
}
