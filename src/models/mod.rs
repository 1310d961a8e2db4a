use chrono::Utc;

/// # Health Status Response
///
/// Represents the operational status of the service with a timestamp.
/// Used as the response format for the health check endpoint.
pub mod health;

/// # Mock Data Response
///
/// Static item records and the envelope returned by the data listing
/// endpoint.
pub mod data;

/// Current UTC time as a naive ISO 8601 string with microsecond precision
/// (`YYYY-MM-DDTHH:MM:SS.ffffff`), the wire format used by every response
/// timestamp.
pub(crate) fn iso8601_now() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}
