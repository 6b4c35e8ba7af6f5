#![allow(clippy::must_use_candidate)]

pub mod codec;
mod loader;
pub mod logging;

use groundwork_validator::FieldRules;
use serde::Deserialize;

pub use codec::CodecConfig;
pub use logging::{LogFormat, LoggingConfig};

/// Top-level Groundwork configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Base64 codec defaults
    #[serde(default)]
    pub codec: CodecConfig,
    /// Validation rules keyed by field name
    #[serde(default)]
    pub fields: FieldRules,
}
