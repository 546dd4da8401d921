//! Bridge configuration parameters
//!
//! Defaults match the embedded app's shipped build. Hosts may override
//! any field from JSON (e.g. a bundled asset or remote config).

use serde::{Deserialize, Serialize};

use crate::error::{BridgeError, Result};
use crate::model::Environment;
use crate::rpc::methods::CHANNEL_NAME;

/// Core bridge configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Name of the method channel to open on the embedded runtime
    pub channel_name: String,
    /// Key the running embedded instance is cached under
    pub engine_cache_key: String,
    /// Request code used when presenting the embedded view
    pub presentation_request_code: i32,
    /// Environment sent right after initialization, if any
    pub initial_environment: Option<Environment>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            channel_name: CHANNEL_NAME.to_owned(),
            engine_cache_key: "engine".to_owned(),
            presentation_request_code: 1,
            initial_environment: None,
        }
    }
}

impl BridgeConfig {
    /// Parse a JSON override; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.channel_name.trim().is_empty() {
            return Err(BridgeError::Config("channel_name must not be empty"));
        }
        if self.engine_cache_key.trim().is_empty() {
            return Err(BridgeError::Config("engine_cache_key must not be empty"));
        }
        if self.presentation_request_code <= 0 {
            return Err(BridgeError::Config("presentation_request_code must be positive"));
        }
        Ok(())
    }
}
