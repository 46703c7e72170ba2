//! `namelint.toml` discovery and loading
//!
//! ```toml
//! [rules]
//! disabled = ["svg-file-name"]
//! naming = true
//! hooks = true
//!
//! [rules.severity]
//! hook-func-name = "error"
//! ```
//!
//! Keys namelint does not know are kept aside while deserializing and turned
//! into warnings instead of errors.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::rules::Severity;

pub const CONFIG_FILENAME: &str = "namelint.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid TOML in '{path}': {message}")]
    ParseError { path: PathBuf, message: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub rules: RulesConfig,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RulesConfig {
    /// Rule ids or names that never run
    pub disabled: Vec<String>,
    /// Keyed by rule id or name
    pub severity: HashMap<String, Severity>,
    pub naming: Option<bool>,
    pub hooks: Option<bool>,
}

/// A loaded config plus human-readable warnings about it.
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warnings: Vec<String>,
}

#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    rules: RulesSection,
    #[serde(flatten)]
    unknown: toml::Table,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct RulesSection {
    disabled: Vec<String>,
    severity: HashMap<String, Severity>,
    naming: Option<bool>,
    hooks: Option<bool>,
    #[serde(flatten)]
    unknown: toml::Table,
}

impl ConfigFile {
    fn into_result(self) -> ConfigResult {
        let warnings = self
            .unknown
            .keys()
            .map(|key| format!("Unknown config option: '{}'", key))
            .chain(
                self.rules
                    .unknown
                    .keys()
                    .map(|key| format!("Unknown config option in [rules]: '{}'", key)),
            )
            .collect();

        let RulesSection {
            disabled,
            severity,
            naming,
            hooks,
            ..
        } = self.rules;

        ConfigResult {
            config: Config {
                rules: RulesConfig {
                    disabled,
                    severity,
                    naming,
                    hooks,
                },
            },
            warnings,
        }
    }
}

/// The nearest `namelint.toml` in `start_dir` or one of its ancestors.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|candidate| candidate.is_file())
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    load_config_with_warnings(path).map(|result| result.config)
}

pub fn load_config_with_warnings(path: &Path) -> Result<ConfigResult, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    let file: ConfigFile = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;

    Ok(file.into_result())
}

pub fn load_config_or_default(start_dir: &Path) -> Config {
    load_config_or_default_with_warnings(start_dir).config
}

/// Defaults when no file is found. An unusable file also yields defaults,
/// with its error as the only warning.
pub fn load_config_or_default_with_warnings(start_dir: &Path) -> ConfigResult {
    let Some(path) = find_config_file(start_dir) else {
        return ConfigResult::default();
    };

    match load_config_with_warnings(&path) {
        Ok(result) => {
            tracing::debug!(
                path = %path.display(),
                warnings = result.warnings.len(),
                "loaded config"
            );
            result
        }
        Err(err) => {
            tracing::warn!(error = %err, "ignoring unusable config file");
            ConfigResult {
                config: Config::default(),
                warnings: vec![err.to_string()],
            }
        }
    }
}
