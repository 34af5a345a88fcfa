//! Resolution of run settings from flags, an optional TOML file and defaults.
//!
//! Precedence: explicit flag, then file value, then built-in default.

use locdiff_core::config::{CompareConfig, DEFAULT_DELIMITER, DEFAULT_SPLIT_LIMIT};
use locdiff_core::logging_facility::Profile;
use serde::Deserialize;
use std::path::Path;

/// Contents of a `--config` file. Every key is optional.
///
/// ```toml
/// delimiter = "|||"
/// split_limit = 25000
/// log_profile = "production"
/// ```
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub delimiter: Option<String>,
    pub split_limit: Option<i64>,
    pub log_profile: Option<Profile>,
}

impl FileSettings {
    /// Read and parse a settings file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or is not valid settings TOML.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read config {}: {}", path.display(), e))?;
        Self::parse(&content).map_err(|e| format!("invalid config {}: {}", path.display(), e).into())
    }

    /// # Errors
    ///
    /// Fails on malformed TOML, unknown keys or mistyped values.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Flag values as given on the command line.
#[derive(Debug, Default)]
pub struct FlagSettings {
    pub delimiter: Option<String>,
    pub split_limit: Option<i64>,
    pub log_profile: Option<Profile>,
}

/// Merge flags over file settings over defaults and validate the result.
///
/// # Errors
///
/// Fails with `ERR_INVALID_CONFIG` when the resolved delimiter is empty.
pub fn resolve(
    flags: FlagSettings,
    file: FileSettings,
) -> Result<(CompareConfig, Profile), Box<dyn std::error::Error>> {
    let delimiter = flags
        .delimiter
        .or(file.delimiter)
        .unwrap_or_else(|| DEFAULT_DELIMITER.to_string());
    let split_limit = flags
        .split_limit
        .or(file.split_limit)
        .unwrap_or(DEFAULT_SPLIT_LIMIT);
    let profile = flags
        .log_profile
        .or(file.log_profile)
        .unwrap_or(Profile::Development);

    let config = CompareConfig::new(delimiter, split_limit)?;
    Ok((config, profile))
}
