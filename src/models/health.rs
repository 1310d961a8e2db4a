use serde::{Deserialize, Serialize};

/// # Health Status Response
///
/// Represents the operational status of the service with a timestamp.
/// Used as the response format for the health check endpoint.
///
/// ## Fields
/// - `status`: String indicating service availability ("healthy")
/// - `service`: Name of the service reporting the status ("backend")
/// - `timestamp`: ISO 8601 formatted timestamp of the status check
///
/// ## Serialization
/// Automatically implements `Serialize` and `Deserialize` for JSON format.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "healthy",
///   "service": "backend",
///   "timestamp": "2024-03-10T15:30:45.123456"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: "backend".to_string(),
            timestamp: super::iso8601_now(),
        }
    }
}
