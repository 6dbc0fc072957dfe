use crate::error::{Error, Result};
use crate::filter::PriorityFilter;
use crate::time::parse_timestamp;
use chrono::{Local, NaiveDateTime};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Output format for classified notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            other => Err(Error::Config(format!(
                "Invalid format '{}'. Allowed values are: json, text",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Text => f.write_str("text"),
        }
    }
}

/// Log levels accepted in configuration
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Configuration for classifying a feed
#[derive(Debug, Clone)]
pub struct Config {
    pub priority_filter: PriorityFilter,
    pub output_format: OutputFormat,
    /// Reference time; the local wall clock when unset
    pub now: Option<NaiveDateTime>,
    pub log_level: String,
}

impl Config {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self {
            priority_filter: PriorityFilter::All,
            output_format: OutputFormat::Json,
            now: None,
            log_level: "warn".to_string(),
        }
    }

    /// Reference time used for day buckets and relative labels
    pub fn now(&self) -> NaiveDateTime {
        self.now.unwrap_or_else(|| Local::now().naive_local())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::Config(format!(
                "Invalid log level '{}'. Allowed values are: {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings read from a `revere.yml` file; every key is optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub priority: Option<String>,
    pub format: Option<String>,
    pub log_level: Option<String>,
}

/// Load and parse a YAML configuration file
pub fn load_config(config_path: &Path) -> Result<FileConfig> {
    let contents = fs::read_to_string(config_path).map_err(|e| {
        Error::Config(format!(
            "Failed to read config file {}: {}",
            config_path.display(),
            e
        ))
    })?;
    parse_config(&contents)
}

/// Parse YAML configuration held in memory; an empty document means all defaults
pub fn parse_config(contents: &str) -> Result<FileConfig> {
    if contents.trim().is_empty() {
        return Ok(FileConfig::default());
    }
    Ok(serde_yaml::from_str(contents)?)
}

/// Builder for creating configurations
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            config: Config::new(),
        }
    }

    /// Start from the values in a configuration file
    pub fn from_file_config(file: &FileConfig) -> Result<Self> {
        let mut builder = Self::new();
        if let Some(priority) = &file.priority {
            builder = builder.priority_filter_str(priority)?;
        }
        if let Some(format) = &file.format {
            builder = builder.output_format_str(format)?;
        }
        if let Some(level) = &file.log_level {
            builder = builder.log_level(level);
        }
        Ok(builder)
    }

    /// Set the priority filter
    pub fn priority_filter(mut self, filter: PriorityFilter) -> Self {
        self.config.priority_filter = filter;
        self
    }

    /// Set the priority filter from string ("all", "urgent", "action_needed", "info")
    pub fn priority_filter_str(mut self, filter: &str) -> Result<Self> {
        self.config.priority_filter = filter.parse()?;
        Ok(self)
    }

    /// Set the output format
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.config.output_format = format;
        self
    }

    /// Set the output format from string
    pub fn output_format_str(mut self, format: &str) -> Result<Self> {
        self.config.output_format = format.parse()?;
        Ok(self)
    }

    /// Pin the reference time
    pub fn now(mut self, now: NaiveDateTime) -> Self {
        self.config.now = Some(now);
        self
    }

    /// Pin the reference time from string
    pub fn now_str(mut self, now: &str) -> Result<Self> {
        let parsed =
            parse_timestamp(now).ok_or_else(|| Error::InvalidTimestamp(now.to_string()))?;
        self.config.now = Some(parsed);
        Ok(self)
    }

    /// Set the log level
    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.config.log_level = level.into().trim().to_lowercase();
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Priority;

    #[test]
    fn test_defaults() {
        let config = ConfigBuilder::new().build().unwrap();
        assert_eq!(config.priority_filter, PriorityFilter::All);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.log_level, "warn");
        assert!(config.now.is_none());
    }

    #[test]
    fn test_builder_parses_strings() {
        let config = ConfigBuilder::new()
            .priority_filter_str("urgent")
            .unwrap()
            .output_format_str("TEXT")
            .unwrap()
            .now_str("2026-10-17T14:30:00")
            .unwrap()
            .log_level("Debug")
            .build()
            .unwrap();

        assert_eq!(config.priority_filter, PriorityFilter::Only(Priority::Urgent));
        assert_eq!(config.output_format, OutputFormat::Text);
        assert_eq!(config.now(), parse_timestamp("2026-10-17T14:30:00").unwrap());
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            ConfigBuilder::new().now_str("next tuesday"),
            Err(Error::InvalidTimestamp(_))
        ));
        assert!(matches!(
            ConfigBuilder::new().output_format_str("xml"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ConfigBuilder::new().log_level("loud").build(),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_file_config() {
        let file = parse_config("priority: action_needed\nformat: text\n").unwrap();
        let config = ConfigBuilder::from_file_config(&file)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            config.priority_filter,
            PriorityFilter::Only(Priority::ActionNeeded)
        );
        assert_eq!(config.output_format, OutputFormat::Text);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_file_config_rejects_unknown_keys() {
        assert!(matches!(parse_config("colour: blue\n"), Err(Error::Yaml(_))));
    }

    #[test]
    fn test_empty_file_config() {
        let file = parse_config("").unwrap();
        assert!(file.priority.is_none());
        assert!(file.format.is_none());
    }
}
