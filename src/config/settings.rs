//! Configuration types
//!
//! Defines the configuration structures for the socks5-inspect tool.

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Log levels accepted in `[log] level`
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "warning", "error"];

/// Default log level
fn default_log_level() -> String {
    "info".to_string()
}

/// Default for echoing input bytes in reports
fn default_show_hex() -> bool {
    true
}

/// Root configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,

    /// Inspection configuration
    #[serde(default)]
    pub inspect: InspectConfig,
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Error> {
        self.log.validate()
    }
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON log lines
    #[serde(default)]
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl LogConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Error> {
        let level = self.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::Config(format!("unknown log level: {}", self.level)));
        }
        Ok(())
    }
}

/// Which decoder to run on a message
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Method handshake
    Handshake,
    /// Connection request
    #[default]
    Request,
}

/// Inspection configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct InspectConfig {
    /// Message kind used when none is given on the command line
    #[serde(default)]
    pub kind: MessageKind,

    /// Reject bytes left over after a complete message
    #[serde(default)]
    pub strict: bool,

    /// Echo the input bytes in the report
    #[serde(default = "default_show_hex")]
    pub show_hex: bool,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            kind: MessageKind::default(),
            strict: false,
            show_hex: default_show_hex(),
        }
    }
}
