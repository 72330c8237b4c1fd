use crate::domain::SemanticVersionFormat;
use crate::error::{MergeMessageError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// File name searched for in the current directory
pub const LOCAL_CONFIG_FILE: &str = "mergemessage.toml";

/// File name searched for in the user config directory
pub const USER_CONFIG_FILE: &str = ".mergemessage.toml";

/// Represents the complete configuration for merge message classification.
///
/// Contains user merge message formats, the label prefix expected in front of
/// embedded versions, and the version grammar used to parse them.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// User formats, tried in order before the built-in ones
    #[serde(default)]
    pub merge_message_formats: Vec<MergeMessageFormat>,

    #[serde(default = "default_label_prefix")]
    pub label_prefix: Option<String>,

    #[serde(default)]
    pub semantic_version_format: SemanticVersionFormat,
}

/// A user-defined merge message format.
///
/// `pattern` is a regular expression using the named groups `SourceBranch`,
/// `TargetBranch`, `Source` and `PullRequestNumber`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct MergeMessageFormat {
    pub name: String,
    pub pattern: String,
}

impl MergeMessageFormat {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        MergeMessageFormat {
            name: name.into(),
            pattern: pattern.into(),
        }
    }
}

/// Returns the default label prefix.
fn default_label_prefix() -> Option<String> {
    Some("v".to_string())
}

impl Default for Config {
    fn default() -> Self {
        Config {
            merge_message_formats: Vec::new(),
            label_prefix: default_label_prefix(),
            semantic_version_format: SemanticVersionFormat::default(),
        }
    }
}

impl Config {
    /// Appends a user format after the ones already configured.
    pub fn with_format(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.merge_message_formats
            .push(MergeMessageFormat::new(name, pattern));
        self
    }

    /// Checks that user format names are non-empty and unique.
    ///
    /// A user format may share its name with a built-in one; it is then tried
    /// first and shadows it.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for format in &self.merge_message_formats {
            if format.name.trim().is_empty() {
                return Err(MergeMessageError::config(
                    "Merge message format name must not be empty",
                ));
            }
            if !seen.insert(format.name.as_str()) {
                return Err(MergeMessageError::config(format!(
                    "Duplicate merge message format '{}'",
                    format.name
                )));
            }
        }
        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `mergemessage.toml` in current directory
/// 3. `.mergemessage.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            tracing::debug!("No configuration file found, using defaults");
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    config.validate()?;
    tracing::debug!(
        formats = config.merge_message_formats.len(),
        "Loaded configuration"
    );
    Ok(config)
}
