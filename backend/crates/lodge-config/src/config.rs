use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, LoggingConfig, ServerConfig, ServicesConfig, SweeperConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub services: ServicesConfig,
    pub sweeper: SweeperConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for LODGE_CONFIG_DIR env var, else use ./.lodge/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply LODGE_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: LODGE_CONFIG_DIR env var > ./.lodge/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.logging.validate()?;
        self.services.validate()?;
        self.sweeper.validate()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Full path of the log file, if file logging is enabled
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections, demo seed: {})",
            self.database.path, self.database.max_connections, self.database.seed_demo_users
        );

        info!(
            "  auth: key={}, ttl={}h",
            if self.auth.jwt_secret.is_some() {
                "configured"
            } else {
                "generated"
            },
            self.auth.token_ttl_hours
        );

        info!(
            "  logging: {} (colored: {}, file: {}, modules: {})",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("none"),
            self.logging.module_summary()
        );

        info!(
            "  services: reservation={}, accommodation={}, timeout={}s",
            self.services.reservation_url,
            self.services.accommodation_url,
            self.services.request_timeout_secs
        );

        info!(
            "  sweeper: {} (every {}s)",
            if self.sweeper.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.sweeper.interval_secs
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("LODGE_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("LODGE_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("LODGE_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "LODGE_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );
        Self::apply_env_bool(
            "LODGE_DATABASE_SEED_DEMO_USERS",
            &mut self.database.seed_demo_users,
        );

        // Auth
        Self::apply_env_option_string("LODGE_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("LODGE_AUTH_TOKEN_TTL_HOURS", &mut self.auth.token_ttl_hours);

        // Logging
        Self::apply_env_parse("LODGE_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("LODGE_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("LODGE_LOG_FILE", &mut self.logging.file);
        if let Ok(modules) = std::env::var("LODGE_LOG_MODULES") {
            self.logging.merge_module_levels(&modules);
        }

        // Services
        Self::apply_env_string(
            "LODGE_RESERVATION_SERVICE_URL",
            &mut self.services.reservation_url,
        );
        Self::apply_env_string(
            "LODGE_ACCOMMODATION_SERVICE_URL",
            &mut self.services.accommodation_url,
        );
        Self::apply_env_parse(
            "LODGE_SERVICE_TIMEOUT_SECS",
            &mut self.services.request_timeout_secs,
        );

        // Sweeper
        Self::apply_env_bool("LODGE_SWEEPER_ENABLED", &mut self.sweeper.enabled);
        Self::apply_env_parse(
            "LODGE_SWEEPER_INTERVAL_SECS",
            &mut self.sweeper.interval_secs,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
