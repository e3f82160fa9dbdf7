//! Toolkit defaults for stringtools.
//!
//! The free functions take every option explicitly. This config holds the
//! values a [`Toolkit`](https://docs.rs/stringtools) falls back to, so a
//! project can pin its heading stop words or slug delimiter in one file.

use serde::{Deserialize, Serialize};
use std::path::Path;
use stringtools_error::{ErrorCategory, Result, TextError, config_error, io_error};

/// Configuration format types supported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    Json,
    #[default]
    Yaml,
}

impl ConfigFormat {
    /// Picks the format from a file extension, YAML when unknown.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Defaults used by the toolkit facade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolkitConfig {
    /// Words heading case leaves lower-case unless they come first
    #[serde(default = "default_stop_words")]
    pub heading_stop_words: Vec<String>,

    #[serde(default = "default_slug_delimiter")]
    pub slug_delimiter: String,

    /// Appended by truncation when text was cut
    #[serde(default)]
    pub truncate_clamp: String,

    #[serde(default = "default_true")]
    pub trim_before_truncate: bool,

    /// `<br />` instead of `<br>`
    #[serde(default = "default_true")]
    pub xhtml_line_breaks: bool,

    #[serde(default = "default_random_string_length")]
    pub random_string_length: usize,

    #[serde(default = "default_true")]
    pub include_special_characters: bool,

    #[serde(default = "default_special_characters")]
    pub special_characters: Vec<char>,

    /// One position in N becomes a special character
    #[serde(default = "default_special_character_odds")]
    pub special_character_odds: u32,
}

fn default_stop_words() -> Vec<String> {
    [
        "a", "and", "as", "at", "but", "by", "etc", "for", "if", "in", "into", "is", "nor", "of",
        "on", "onto", "or", "so", "the", "to",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
}

fn default_slug_delimiter() -> String {
    "-".to_string()
}

fn default_true() -> bool {
    true
}

fn default_random_string_length() -> usize {
    8
}

fn default_special_characters() -> Vec<char> {
    "!@#$%^&*()`~-_+=".chars().collect()
}

fn default_special_character_odds() -> u32 {
    7
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            heading_stop_words: default_stop_words(),
            slug_delimiter: default_slug_delimiter(),
            truncate_clamp: String::new(),
            trim_before_truncate: true,
            xhtml_line_breaks: true,
            random_string_length: default_random_string_length(),
            include_special_characters: true,
            special_characters: default_special_characters(),
            special_character_odds: default_special_character_odds(),
        }
    }
}

impl ToolkitConfig {
    /// Rejects settings that would make random strings impossible to build
    /// the way they were asked for.
    pub fn validate(&self) -> Result<()> {
        if self.include_special_characters {
            if self.special_character_odds == 0 {
                return Err(config_error("special_character_odds must be at least 1")
                    .with_context("field", "special_character_odds"));
            }
            if self.special_characters.is_empty() {
                return Err(config_error("special_characters is empty")
                    .with_context("field", "special_characters"));
            }
        }
        Ok(())
    }

    /// Stop words as borrowed slices, the shape heading case expects.
    pub fn stop_words(&self) -> Vec<&str> {
        self.heading_stop_words.iter().map(String::as_str).collect()
    }
}

/// Parses a config from text in the given format, then validates it.
pub fn parse_config(contents: &str, format: ConfigFormat) -> Result<ToolkitConfig> {
    let config: ToolkitConfig = match format {
        ConfigFormat::Json => serde_json::from_str(contents).map_err(|e| {
            TextError::with_source("failed to parse JSON config", ErrorCategory::Config, Box::new(e))
        })?,
        ConfigFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| {
            TextError::with_source("failed to parse YAML config", ErrorCategory::Config, Box::new(e))
        })?,
    };
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ToolkitConfig> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .map_err(|e| io_error("failed to read config", e).with_context("path", path.display().to_string()))?;
    parse_config(&contents, ConfigFormat::from_path(path))
        .map_err(|e| e.with_context("path", path.display().to_string()))
}

/// Save configuration to a file
pub fn save_config<P: AsRef<Path>>(config: &ToolkitConfig, path: P) -> Result<()> {
    let path = path.as_ref();
    let contents = match ConfigFormat::from_path(path) {
        ConfigFormat::Json => serde_json::to_string_pretty(config).map_err(|e| {
            TextError::with_source("failed to serialize JSON config", ErrorCategory::Config, Box::new(e))
        })?,
        ConfigFormat::Yaml => serde_yaml::to_string(config).map_err(|e| {
            TextError::with_source("failed to serialize YAML config", ErrorCategory::Config, Box::new(e))
        })?,
    };

    std::fs::write(path, contents)
        .map_err(|e| io_error("failed to write config", e).with_context("path", path.display().to_string()))
}
