use serde::{Deserialize, Serialize};

/// A reservation request as listed by the reservation service.
///
/// Only the array length matters to callers, so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReservationSummary {
    pub id: Option<i64>,
    pub status: Option<String>,
    pub guest_id: Option<i64>,
    #[serde(alias = "accomodationId")]
    pub accommodation_id: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub guest_count: Option<u32>,
}
