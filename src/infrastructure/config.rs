//! Run settings: defaults, optional TOML file, environment

use crate::error::{OmniTreeError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Database file name used by Omni Notes exports
pub const DEFAULT_DATABASE: &str = "omni-notes";
/// Output directory name; the archive is written next to it
pub const DEFAULT_OUTPUT: &str = "output";

pub const DATABASE_ENV: &str = "OMNITREE_DB";
pub const OUTPUT_ENV: &str = "OMNITREE_OUTPUT";

/// Resolved settings for one conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database: PathBuf,
    pub output: PathBuf,
    /// Produce `<output>.zip` after writing the tree
    pub archive: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            database: PathBuf::from(DEFAULT_DATABASE),
            output: PathBuf::from(DEFAULT_OUTPUT),
            archive: true,
        }
    }
}

/// On-disk config file; every key is optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub database: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub archive: Option<bool>,
}

impl ConfigFile {
    /// Load a config file. The path was given explicitly, so missing is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                OmniTreeError::Config(format!("Config file not found: {}", path.display()))
            } else {
                OmniTreeError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }
}

impl Settings {
    /// Apply values from a config file
    pub fn with_file(mut self, file: ConfigFile) -> Self {
        if let Some(database) = file.database {
            self.database = database;
        }
        if let Some(output) = file.output {
            self.output = output;
        }
        if let Some(archive) = file.archive {
            self.archive = archive;
        }
        self
    }

    /// Apply `OMNITREE_DB` / `OMNITREE_OUTPUT` through a lookup function
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(database) = lookup(DATABASE_ENV).filter(|v| !v.is_empty()) {
            self.database = PathBuf::from(database);
        }
        if let Some(output) = lookup(OUTPUT_ENV).filter(|v| !v.is_empty()) {
            self.output = PathBuf::from(output);
        }
        self
    }

    /// Apply `with_env` using the process environment
    pub fn with_process_env(self) -> Self {
        self.with_env(|key| std::env::var(key).ok())
    }
}
