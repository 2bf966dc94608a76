mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod services_config;
mod sweeper_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use services_config::ServicesConfig;
pub use sweeper_config::SweeperConfig;

const CONFIG_DIR_ENV: &str = "LODGE_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".lodge";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8081;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "users.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const MIN_MAX_CONNECTIONS: u32 = 1;
const MAX_MAX_CONNECTIONS: u32 = 100;
const DEFAULT_SEED_DEMO_USERS: bool = false;

const DEFAULT_TOKEN_TTL_HOURS: u32 = 24;
const MIN_TOKEN_TTL_HOURS: u32 = 1;
const MAX_TOKEN_TTL_HOURS: u32 = 720;
const MIN_JWT_SECRET_LENGTH: usize = 32;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_RESERVATION_URL: &str = "http://localhost:8083";
const DEFAULT_ACCOMMODATION_URL: &str = "http://localhost:8082/api";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;
const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 60;

const DEFAULT_SWEEPER_ENABLED: bool = true;
const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 3600;
const MIN_SWEEP_INTERVAL_SECS: u64 = 10;
const MAX_SWEEP_INTERVAL_SECS: u64 = 86_400;

#[cfg(test)]
mod tests;
