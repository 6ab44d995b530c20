//! Client configuration.

use serde::{Deserialize, Serialize};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Config field `{0}` must not be empty")]
    EmptyField(&'static str),
}

/// Tunables shared by the orchestrator and the front end.
///
/// Every field has a default, so an override document only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlazaConfig {
    /// Query parameter carrying the deep-linked room id.
    pub room_param: String,
    /// Substring marking a join failure as password related.
    pub password_marker: String,
    /// Path the gRPC-Web room service is mounted under.
    pub rpc_path: String,
}

impl Default for PlazaConfig {
    fn default() -> Self {
        Self {
            room_param: "room".to_string(),
            password_marker: "Password".to_string(),
            rpc_path: "/grpc".to_string(),
        }
    }
}

impl PlazaConfig {
    /// Parses an override document and validates the result.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.room_param.is_empty() {
            return Err(ConfigError::EmptyField("room_param"));
        }
        if self.password_marker.is_empty() {
            return Err(ConfigError::EmptyField("password_marker"));
        }
        if self.rpc_path.is_empty() {
            return Err(ConfigError::EmptyField("rpc_path"));
        }
        Ok(())
    }
}
