use lodge_auth::AuthError;
use lodge_remote::RemoteError;

use std::path::PathBuf;

use thiserror::Error;

/// Startup failures; every variant is fatal
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] lodge_config::ConfigError),

    #[error("Signing key error: {0}")]
    SigningKey(#[from] AuthError),

    #[error("Remote client error: {0}")]
    RemoteClient(#[from] RemoteError),

    #[error("Failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
