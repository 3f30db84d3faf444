//! Configuration file support for gradle-model.
//!
//! Provides YAML-based configuration through `gradle-model.config.yml` files,
//! including data structures, file loading, validation and merging with
//! command-line options.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

use crate::application::dto::OutputFormat;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "gradle-model.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub exclude_configurations: Option<Vec<String>>,
    pub fail_on_resolution_error: Option<bool>,
    pub include_settings: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Options given on the command line, before merging.
#[derive(Debug, Clone, Default)]
pub struct CliOptions {
    pub format: Option<OutputFormat>,
    pub exclude: Vec<String>,
    pub fail_on_resolution_error: bool,
    pub no_settings: bool,
}

/// Options after command line and config file have been merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveOptions {
    pub format: OutputFormat,
    pub exclude_patterns: Vec<String>,
    pub fail_on_resolution_error: bool,
    pub include_settings: bool,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = format.parse::<OutputFormat>() {
            bail!("Invalid config: format: {}", e);
        }
    }
    if let Some(ref patterns) = config.exclude_configurations {
        for (i, pattern) in patterns.iter().enumerate() {
            if pattern.trim().is_empty() {
                bail!(
                    "Invalid config: exclude_configurations[{}] must not be empty.\n\n\
                     💡 Hint: Use a configuration name or a glob such as \"test*\".",
                    i
                );
            }
            if let Err(e) = glob::Pattern::new(pattern) {
                bail!(
                    "Invalid config: exclude_configurations[{}] is not a valid pattern: {}",
                    i,
                    e
                );
            }
        }
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        warn!("Unknown config field '{}' will be ignored", key);
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Command-line values win over the file. Exclusion patterns from both
/// are combined, command line first, without duplicates.
pub fn merge(cli: CliOptions, config: Option<ConfigFile>) -> Result<EffectiveOptions> {
    let config = config.unwrap_or_default();

    let format = match (cli.format, config.format.as_deref()) {
        (Some(format), _) => format,
        (None, Some(name)) => name.parse::<OutputFormat>().map_err(anyhow::Error::msg)?,
        (None, None) => OutputFormat::default(),
    };

    let mut exclude_patterns = cli.exclude;
    for pattern in config.exclude_configurations.unwrap_or_default() {
        if !exclude_patterns.contains(&pattern) {
            exclude_patterns.push(pattern);
        }
    }

    let include_settings = !cli.no_settings && config.include_settings.unwrap_or(true);

    Ok(EffectiveOptions {
        format,
        exclude_patterns,
        fail_on_resolution_error: cli.fail_on_resolution_error || config.fail_on_resolution_error.unwrap_or(false),
        include_settings,
    })
}
