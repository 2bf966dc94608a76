//! HTTP clients for the reservation and accommodation services.

pub mod accommodation_client;
pub mod endpoint_resolver;
pub mod error;
pub mod http_client;
pub mod reservation_client;
pub mod reservation_summary;

pub use accommodation_client::AccommodationClient;
pub use endpoint_resolver::{EndpointResolver, RoundRobin};
pub use error::{RemoteError, Result};
pub use http_client::build_http_client;
pub use reservation_client::{ReservationClient, ReservationParty};
pub use reservation_summary::ReservationSummary;
