use crate::config;
use crate::models::data::DataResponse;
use actix_web::{HttpResponse, Responder, get};

/// # Mock Data Endpoint
///
/// Returns a fixed set of three mock items together with request metadata.
/// The payload is constructed fresh per request from constants and the
/// system clock; only the timestamp varies between calls.
///
/// ## Response
///
/// - **200 OK**:
///   - Content-Type: `application/json`
///   - Body: [`DataResponse`] containing:
///     - `message`: Fixed greeting string
///     - `timestamp`: ISO 8601 timestamp of the request
///     - `version`: API version ("1.0.0")
///     - `environment`: Value of the `ENVIRONMENT` variable
///       (default "development")
///     - `data.items`: Three fixed item records
///
/// ## Example Response
///
/// ```json
/// {
///   "message": "Hello from Backend Service!",
///   "timestamp": "2023-10-05T12:34:56.789012",
///   "version": "1.0.0",
///   "environment": "development",
///   "data": {
///     "items": [
///       { "id": 1, "name": "Item 1", "status": "active" },
///       { "id": 2, "name": "Item 2", "status": "active" },
///       { "id": 3, "name": "Item 3", "status": "inactive" }
///     ]
///   }
/// }
/// ```
#[get("/api/data")]
pub async fn get_data() -> impl Responder {
    HttpResponse::Ok().json(DataResponse::new(config::environment()))
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(get_data);
}
