use anyhow::{Context, Result};
use log::{debug, info};
use serde::Deserialize;
use std::path::Path;

use crate::utils;

/// Name of the folder scoped config file, looked up next to the input model.
pub const FOLDER_CONFIG: &str = "meshform";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub reader: ReaderConfig,
    pub writer: WriterConfig,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReaderConfig {
    /// Treat unknown OBJ statements as errors instead of skipping them.
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WriterConfig {
    /// Digits after the decimal point for every written number.
    pub precision: usize,
    /// Emit a comment header with the element counts.
    pub header: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            precision: 6,
            header: true,
        }
    }
}

impl Config {
    pub fn parse(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)
            .with_context(|| format!("Could not read config: {}", path.display()))?;
        let config: Self = toml::from_slice(&data)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    /// Resolves the config for `input`.
    ///
    /// An explicit path always wins and must exist. Otherwise `<stem>.toml`
    /// next to the input is tried, then the folder scoped `meshform.toml`,
    /// and finally the defaults.
    pub fn locate(input: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            info!("Using config: {}", path.display());
            return Self::parse(path);
        }

        let dir = input.parent().unwrap_or_else(|| Path::new(""));
        let candidates = [
            utils::combine_path(dir, utils::file_name(input)?, "toml")?,
            utils::combine_path(dir, FOLDER_CONFIG, "toml")?,
        ];

        for path in candidates.iter() {
            if path.is_file() {
                info!("Using config: {}", path.display());
                return Self::parse(path);
            }
            debug!("No config at {}", path.display());
        }

        Ok(Self::default())
    }
}
