use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors talking to a collaborating service
#[derive(Error, Debug)]
pub enum RemoteError {
    /// Transport failure or timeout
    #[error("{service} service unreachable: {message} {location}")]
    Unreachable {
        service: &'static str,
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} service returned status {status} {location}")]
    UnexpectedStatus {
        service: &'static str,
        status: u16,
        location: ErrorLocation,
    },

    #[error("failed to parse {service} service response: {message} {location}")]
    Parse {
        service: &'static str,
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("no endpoints configured for {service} service {location}")]
    NoEndpoints {
        service: &'static str,
        location: ErrorLocation,
    },

    #[error("HTTP client construction failed: {message} {location}")]
    ClientBuild {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },
}

impl RemoteError {
    #[track_caller]
    pub fn unreachable(service: &'static str, err: reqwest::Error) -> Self {
        Self::Unreachable {
            service,
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn unexpected_status(service: &'static str, status: reqwest::StatusCode) -> Self {
        Self::UnexpectedStatus {
            service,
            status: status.as_u16(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn parse(service: &'static str, err: serde_json::Error) -> Self {
        Self::Parse {
            service,
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable { .. })
    }
}

pub type Result<T> = std::result::Result<T, RemoteError>;
