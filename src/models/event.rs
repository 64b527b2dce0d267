use serde::{Deserialize, Serialize};

use super::Review;

/// An event as served by `get-all-events` and `get-event`.
///
/// Every field is optional on the wire. Missing values are rendered as
/// placeholders rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub datastore_id: Option<i64>,
    pub event_title: Option<String>,
    pub event_date_time: Option<String>,
    pub event_latitude: Option<f64>,
    pub event_longitude: Option<f64>,
    pub organization_name: Option<String>,
    #[serde(alias = "description")]
    pub event_description: Option<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}
