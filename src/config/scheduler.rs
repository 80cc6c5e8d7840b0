//! Scheduler configuration structures.

use serde::{Deserialize, Serialize};

use crate::core::BatchScheduler;

const fn default_limit() -> usize {
    BatchScheduler::<()>::DEFAULT_LIMIT
}

/// Scheduler configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Maximum number of task factories dispatched together per drain step.
    #[serde(default = "default_limit")]
    pub concurrency_limit: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            concurrency_limit: default_limit(),
        }
    }
}

impl SchedulerConfig {
    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns a message when `concurrency_limit` is zero; a zero limit would
    /// make every drain step a no-op.
    pub fn validate(&self) -> Result<(), String> {
        if self.concurrency_limit == 0 {
            return Err("concurrency_limit must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse scheduler configuration from a JSON string and validate.
    ///
    /// # Errors
    ///
    /// Returns a message for malformed JSON or an invalid limit.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
