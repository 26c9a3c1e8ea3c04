//! Queue configuration structures.

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::AppResult;

/// Capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 10;

/// Environment variable read by [`QueueConfig::from_env`].
pub const CAPACITY_ENV: &str = "REQUEST_QUEUE_CAPACITY";

/// Request queue configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    /// Maximum concurrent in-flight requests.
    pub capacity: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl QueueConfig {
    /// Config with the given capacity.
    pub const fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.capacity == 0 {
            return Err("capacity must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read configuration from the environment, loading a `.env` file first
    /// if one exists. Unset variables keep their defaults.
    pub fn from_env() -> AppResult<Self> {
        // a missing .env file is fine
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let mut cfg = Self::default();
        if let Some(raw) = lookup(CAPACITY_ENV) {
            cfg.capacity = raw
                .trim()
                .parse()
                .with_context(|| format!("{CAPACITY_ENV}={raw:?} is not a valid capacity"))?;
        }
        cfg.validate().map_err(anyhow::Error::msg)?;
        Ok(cfg)
    }
}
