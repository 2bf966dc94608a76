use crate::{RemoteError, Result as RemoteResult};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use reqwest::Client as ReqwestClient;

/// Shared client for outbound calls; every request is bounded by `timeout`
#[track_caller]
pub fn build_http_client(timeout: Duration) -> RemoteResult<ReqwestClient> {
    ReqwestClient::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| RemoteError::ClientBuild {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: e,
        })
}
