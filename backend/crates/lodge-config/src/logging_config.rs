use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOG_COLORED, DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL,
    LogLevel,
};

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub colored: bool,
    /// Log file name inside `dir`; stdout only when unset
    pub file: Option<String>,
    pub dir: String,
    /// Per-target overrides of `level`, e.g. `lodge_saga = "debug"`
    pub modules: BTreeMap<String, LogLevel>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            colored: DEFAULT_LOG_COLORED,
            file: None,
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            modules: BTreeMap::new(),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for target in self.modules.keys() {
            if !is_log_target(target) {
                return Err(ConfigError::logging(format!(
                    "invalid module name '{}' in [logging.modules]",
                    target
                )));
            }
        }

        Ok(())
    }

    /// Merge `target=level` pairs separated by commas into `modules`.
    /// Pairs without `=` are kept under their raw text so `validate` reports them.
    pub fn merge_module_levels(&mut self, spec: &str) {
        for pair in spec.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match pair.split_once('=') {
                Some((target, level)) => {
                    let level = level.parse().unwrap_or(LogLevel(DEFAULT_LOG_LEVEL));
                    self.modules.insert(target.trim().to_string(), level);
                }
                None => {
                    self.modules
                        .insert(pair.to_string(), LogLevel(DEFAULT_LOG_LEVEL));
                }
            }
        }
    }

    /// `target=level` pairs for the startup summary
    pub fn module_summary(&self) -> String {
        if self.modules.is_empty() {
            return String::from("none");
        }
        self.modules
            .iter()
            .map(|(target, level)| format!("{}={}", target, level))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Rust path segments joined by `::`
fn is_log_target(target: &str) -> bool {
    !target.is_empty()
        && target.split("::").all(|segment| {
            !segment.is_empty()
                && segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}
