use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ACCOMMODATION_URL, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_RESERVATION_URL, MAX_REQUEST_TIMEOUT_SECS, MIN_REQUEST_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Base URLs of the collaborating services
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    pub reservation_url: String,
    /// Includes the `/api` prefix
    pub accommodation_url: String,
    pub request_timeout_secs: u64,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            reservation_url: String::from(DEFAULT_RESERVATION_URL),
            accommodation_url: String::from(DEFAULT_ACCOMMODATION_URL),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ServicesConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, url) in [
            ("services.reservation_url", &self.reservation_url),
            ("services.accommodation_url", &self.accommodation_url),
        ] {
            if !url.starts_with("http://") || url.len() <= "http://".len() {
                return Err(ConfigError::services(format!(
                    "{} must be an http:// URL, got '{}'",
                    name, url
                )));
            }
        }

        if self.request_timeout_secs < MIN_REQUEST_TIMEOUT_SECS
            || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS
        {
            return Err(ConfigError::services(format!(
                "services.request_timeout_secs must be {}-{}, got {}",
                MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
