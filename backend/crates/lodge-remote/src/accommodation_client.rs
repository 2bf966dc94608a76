use crate::{EndpointResolver, RemoteError, Result as RemoteResult};

use std::sync::Arc;

use log::debug;
use reqwest::Client as ReqwestClient;

const SERVICE: &str = "accommodation";

/// Client for the accommodation service
#[derive(Clone)]
pub struct AccommodationClient {
    client: ReqwestClient,
    endpoints: Arc<dyn EndpointResolver>,
}

impl AccommodationClient {
    pub fn new(client: ReqwestClient, endpoints: Arc<dyn EndpointResolver>) -> Self {
        Self { client, endpoints }
    }

    /// Remove every accommodation owned by `host_id`.
    ///
    /// Idempotent on the remote side, so retrying after a lost response is safe.
    pub async fn delete_all_for_host(&self, host_id: i64) -> RemoteResult<()> {
        let url = format!(
            "{}/accomodation/delete-all/{}",
            self.endpoints.next(),
            host_id
        );
        debug!("DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| RemoteError::unreachable(SERVICE, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::unexpected_status(SERVICE, status));
        }

        Ok(())
    }
}
