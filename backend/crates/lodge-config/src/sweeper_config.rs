use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SWEEP_INTERVAL_SECS, DEFAULT_SWEEPER_ENABLED,
    MAX_SWEEP_INTERVAL_SECS, MIN_SWEEP_INTERVAL_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Background retry of deferred accommodation cleanups
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SweeperConfig {
    pub enabled: bool,
    pub interval_secs: u64,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_SWEEPER_ENABLED,
            interval_secs: DEFAULT_SWEEP_INTERVAL_SECS,
        }
    }
}

impl SweeperConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.interval_secs < MIN_SWEEP_INTERVAL_SECS
            || self.interval_secs > MAX_SWEEP_INTERVAL_SECS
        {
            return Err(ConfigError::sweeper(format!(
                "sweeper.interval_secs must be {}-{}, got {}",
                MIN_SWEEP_INTERVAL_SECS, MAX_SWEEP_INTERVAL_SECS, self.interval_secs
            )));
        }

        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}
