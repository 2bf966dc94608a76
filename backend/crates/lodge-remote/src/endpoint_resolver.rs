use crate::{RemoteError, Result as RemoteResult};

use std::panic::Location;
use std::sync::atomic::{AtomicUsize, Ordering};

use error_location::ErrorLocation;

/// Picks the base URL for the next call to a service
pub trait EndpointResolver: Send + Sync {
    fn next(&self) -> &str;
}

/// Cycles through a fixed, non-empty list of base URLs
#[derive(Debug)]
pub struct RoundRobin {
    endpoints: Vec<String>,
    cursor: AtomicUsize,
}

impl RoundRobin {
    #[track_caller]
    pub fn new(service: &'static str, endpoints: Vec<String>) -> RemoteResult<Self> {
        if endpoints.is_empty() {
            return Err(RemoteError::NoEndpoints {
                service,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            endpoints: endpoints
                .into_iter()
                .map(|e| e.trim_end_matches('/').to_string())
                .collect(),
            cursor: AtomicUsize::new(0),
        })
    }

    /// Resolver over one base URL
    pub fn single(base_url: &str) -> Self {
        Self {
            endpoints: vec![base_url.trim_end_matches('/').to_string()],
            cursor: AtomicUsize::new(0),
        }
    }
}

impl EndpointResolver for RoundRobin {
    fn next(&self) -> &str {
        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % self.endpoints.len();
        &self.endpoints[index]
    }
}
