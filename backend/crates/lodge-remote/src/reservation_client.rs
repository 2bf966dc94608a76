use crate::{EndpointResolver, RemoteError, ReservationSummary, Result as RemoteResult};

use lodge_core::Role;

use std::sync::Arc;

use log::debug;
use reqwest::Client as ReqwestClient;
use reqwest::header::AUTHORIZATION;

const SERVICE: &str = "reservation";

/// Which side of a reservation the user is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationParty {
    Guest,
    Owner,
}

impl ReservationParty {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Guest => Self::Guest,
            Role::Host => Self::Owner,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::Owner => "owner",
        }
    }
}

/// Client for the reservation service
#[derive(Clone)]
pub struct ReservationClient {
    client: ReqwestClient,
    endpoints: Arc<dyn EndpointResolver>,
}

impl ReservationClient {
    pub fn new(client: ReqwestClient, endpoints: Arc<dyn EndpointResolver>) -> Self {
        Self { client, endpoints }
    }

    /// Reservation requests still open for `user_id`.
    ///
    /// `bearer` is forwarded as-is so the reservation service can authorize
    /// the call on behalf of the user.
    pub async fn active_reservations(
        &self,
        user_id: i64,
        party: ReservationParty,
        bearer: Option<&str>,
    ) -> RemoteResult<Vec<ReservationSummary>> {
        let url = format!(
            "{}/reservationRequest/{}/{}",
            self.endpoints.next(),
            party.as_str(),
            user_id
        );
        debug!("GET {}", url);

        let mut req = self.client.get(&url);
        if let Some(token) = bearer {
            req = req.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = req
            .send()
            .await
            .map_err(|e| RemoteError::unreachable(SERVICE, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::unexpected_status(SERVICE, status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| RemoteError::unreachable(SERVICE, e))?;

        // An empty list is encoded as `null` by the reservation service
        let reservations: Option<Vec<ReservationSummary>> =
            serde_json::from_slice(&body).map_err(|e| RemoteError::parse(SERVICE, e))?;

        Ok(reservations.unwrap_or_default())
    }
}
