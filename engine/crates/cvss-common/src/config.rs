//! Configuration for the CVSS calculator

use cvss_core::{Error, Result, Version};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::logging::LogFormat;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Calculator settings
    #[serde(default)]
    pub calculator: CalculatorConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("Failed to read config file {:?}: {}", path, e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::Configuration(format!("Failed to parse config: {}", e)))
    }

    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Merge with environment variables (CVSS_ prefix)
    ///
    /// Values that fail to parse are ignored and the file setting is kept.
    pub fn merge_env(mut self) -> Self {
        if let Ok(val) = std::env::var("CVSS_DEFAULT_VERSION") {
            if let Ok(selector) = val.parse() {
                self.calculator.default_version = selector;
            }
        }
        if let Ok(val) = std::env::var("CVSS_OUTPUT") {
            if let Ok(output) = val.parse() {
                self.calculator.output = output;
            }
        }

        // Logging
        if let Ok(val) = std::env::var("CVSS_LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = std::env::var("CVSS_LOG_FORMAT") {
            if let Ok(format) = val.parse() {
                self.logging.format = format;
            }
        }

        self
    }
}

/// Version a vector is parsed as
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum VersionSelector {
    /// Detect the version from the `CVSS:x.y/` prefix; no prefix means CVSS 2
    #[default]
    Auto,
    Fixed(Version),
}

impl VersionSelector {
    /// Version of a given vector under this selector
    pub fn resolve(&self, vector: &str) -> Result<Version> {
        match self {
            VersionSelector::Auto => Version::detect(vector),
            VersionSelector::Fixed(version) => Ok(*version),
        }
    }
}

impl FromStr for VersionSelector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("auto") {
            return Ok(VersionSelector::Auto);
        }
        s.parse()
            .map(VersionSelector::Fixed)
            .map_err(|_| Error::Configuration(format!("Unknown CVSS version \"{}\"", s)))
    }
}

impl TryFrom<String> for VersionSelector {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<VersionSelector> for String {
    fn from(selector: VersionSelector) -> Self {
        match selector {
            VersionSelector::Auto => String::from("auto"),
            VersionSelector::Fixed(version) => version.as_str().to_string(),
        }
    }
}

/// Output format of the calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Configuration(format!("Unknown output format \"{}\"", other))),
        }
    }
}

/// Calculator configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Version used when none is given on the command line
    #[serde(default)]
    pub default_version: VersionSelector,

    /// Output format (text, json)
    #[serde(default)]
    pub output: OutputFormat,

    /// Stop at the first vector that fails to parse
    #[serde(default)]
    pub fail_fast: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (pretty, json, compact)
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    String::from("warn")
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Builder for constructing Config
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn default_version(mut self, selector: VersionSelector) -> Self {
        self.config.calculator.default_version = selector;
        self
    }

    pub fn output(mut self, output: OutputFormat) -> Self {
        self.config.calculator.output = output;
        self
    }

    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.config.calculator.fail_fast = fail_fast;
        self
    }

    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.config.logging.level = level.into();
        self
    }

    pub fn log_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
