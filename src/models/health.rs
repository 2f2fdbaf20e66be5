use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Name reported in the `service` field of every health response.
pub const SERVICE_NAME: &str = "volleyball-stats";

/// # Health Status Response
///
/// Transient value object describing the availability of the service.
/// Constructed fresh for each request to the health endpoint, serialized
/// immediately, and discarded after the response is sent.
///
/// ## Fields
/// - `status`: String indicating service availability (always "ok"; the
///   handler cannot fail, so no other value is ever reported)
/// - `service`: Fixed string identifying this service instance
/// - `timestamp`: ISO 8601 timestamp captured at construction time
#[derive(Serialize, Debug, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub timestamp: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            service: SERVICE_NAME.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
