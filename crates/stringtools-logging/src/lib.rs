//! Logging configuration and in-process collection for stringtools.
//!
//! Nothing here writes to a terminal. Entries are kept in a [`LogCollector`]
//! and rendered on demand, so callers decide where they go.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::fmt;

/// Log level for filtering, most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Check if this level lets messages at `level` through
    pub fn should_log(&self, level: LogLevel) -> bool {
        level <= *self
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level to keep
    #[serde(default)]
    pub level: LogLevel,
    #[serde(default)]
    pub format: LogFormat,
    /// Include timestamps in plain output
    #[serde(default = "default_true")]
    pub timestamps: bool,
    /// Component-specific log levels
    #[serde(default)]
    pub component_levels: HashMap<String, LogLevel>,
    /// Oldest entries are dropped past this many. Zero keeps nothing.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

fn default_true() -> bool {
    true
}

fn default_max_entries() -> usize {
    DEFAULT_MAX_ENTRIES
}

/// Entries a collector holds before it starts dropping the oldest
pub const DEFAULT_MAX_ENTRIES: usize = 1000;

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Plain,
            timestamps: true,
            component_levels: HashMap::new(),
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn without_timestamps(mut self) -> Self {
        self.timestamps = false;
        self
    }

    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    /// Set a component-specific log level
    pub fn with_component_level(mut self, component: impl Into<String>, level: LogLevel) -> Self {
        self.component_levels.insert(component.into(), level);
        self
    }

    /// Get the effective log level for a component
    pub fn effective_level(&self, component: Option<&str>) -> LogLevel {
        component
            .and_then(|c| self.component_levels.get(c))
            .copied()
            .unwrap_or(self.level)
    }

    pub fn should_log(&self, level: LogLevel, component: Option<&str>) -> bool {
        self.effective_level(component).should_log(level)
    }
}

/// A log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            component: None,
            message: message.into(),
        }
    }

    /// Create a log entry with a component
    pub fn with_component(
        level: LogLevel,
        component: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            component: Some(component.into()),
            ..Self::new(level, message)
        }
    }

    /// Pin the timestamp, mostly for reproducible output.
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Render as a single line.
    ///
    /// * plain: `2024-01-01T00:00:00Z INFO [codec] message`
    /// * compact: `I codec: message`
    /// * json: one JSON object
    pub fn render(&self, format: LogFormat, timestamps: bool) -> String {
        match format {
            LogFormat::Plain => {
                let mut line = String::new();
                if timestamps {
                    line.push_str(&self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true));
                    line.push(' ');
                }
                line.push_str(&self.level.as_str().to_uppercase());
                if let Some(component) = &self.component {
                    line.push_str(&format!(" [{component}]"));
                }
                line.push(' ');
                line.push_str(&self.message);
                line
            }
            LogFormat::Compact => {
                let tag = self.level.as_str()[..1].to_uppercase();
                match &self.component {
                    Some(component) => format!("{tag} {component}: {}", self.message),
                    None => format!("{tag} {}", self.message),
                }
            }
            // Serializing a struct of strings and enums cannot fail.
            LogFormat::Json => serde_json::to_string(self).unwrap_or_default(),
        }
    }
}

/// Collects entries that pass its config's level filter, keeping at most
/// `max_entries` of the newest
#[derive(Debug, Clone, Default)]
pub struct LogCollector {
    config: LoggingConfig,
    entries: VecDeque<LogEntry>,
}

impl LogCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LoggingConfig) -> Self {
        Self {
            config,
            entries: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &LoggingConfig {
        &self.config
    }

    /// Keeps the entry if its level passes the filter for its component,
    /// evicting the oldest entry when full. Returns whether it was kept.
    pub fn push(&mut self, entry: LogEntry) -> bool {
        let max = self.config.max_entries;
        if max == 0 || !self.config.should_log(entry.level, entry.component.as_deref()) {
            return false;
        }
        while self.entries.len() >= max {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
        true
    }

    pub fn log(&mut self, level: LogLevel, component: &str, message: impl Into<String>) -> bool {
        self.push(LogEntry::with_component(level, component, message))
    }

    pub fn info(&mut self, component: &str, message: impl Into<String>) -> bool {
        self.log(LogLevel::Info, component, message)
    }

    pub fn warn(&mut self, component: &str, message: impl Into<String>) -> bool {
        self.log(LogLevel::Warn, component, message)
    }

    pub fn debug(&mut self, component: &str, message: impl Into<String>) -> bool {
        self.log(LogLevel::Debug, component, message)
    }

    /// Oldest first.
    pub fn entries(&self) -> &VecDeque<LogEntry> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes and returns every entry, oldest first.
    pub fn drain(&mut self) -> Vec<LogEntry> {
        self.entries.drain(..).collect()
    }

    /// Get entries matching a level
    pub fn filter_by_level(&self, level: LogLevel) -> Vec<&LogEntry> {
        self.entries.iter().filter(|e| e.level == level).collect()
    }

    pub fn filter_by_component(&self, component: &str) -> Vec<&LogEntry> {
        self.entries
            .iter()
            .filter(|e| e.component.as_deref() == Some(component))
            .collect()
    }

    /// All entries rendered with the collector's format, one per line.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.render(self.config.format, self.config.timestamps))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
