//! CVSS Common - Shared utilities: configuration and logging
//!
//! This crate provides the ambient setup used by the calculator binary.

pub mod config;
pub mod logging;

pub use config::{CalculatorConfig, Config, ConfigBuilder, LoggingConfig, OutputFormat, VersionSelector};
pub use logging::{init_logging, init_logging_with_config, LogConfig, LogFormat};
