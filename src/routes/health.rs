use crate::models::health::HealthResponse;
use actix_web::{HttpResponse, Responder, get};

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with a timestamp.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
///   - Content-Type: `application/json`
///   - Body: [`HealthResponse`] with `status` ("healthy"), `service`
///     ("backend") and `timestamp` in ISO 8601 format
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "backend",
///   "timestamp": "2023-10-05T12:34:56.789012"
/// }
/// ```
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::healthy())
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(health);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use chrono::NaiveDateTime;
    use serde_json::from_str;

    #[actix_web::test]
    async fn test_health_endpoint() {
        // Set up test app
        let app = test::init_service(App::new().configure(configure_routes)).await;

        // Create test request
        let req = test::TestRequest::get().uri("/health").to_request();

        // Execute request
        let resp = test::call_service(&app, req).await;

        // Verify status code
        assert_eq!(resp.status(), 200, "Status code should be 200 OK");

        // Verify content type is application/json
        let content_type = resp
            .headers()
            .get("content-type")
            .expect("Content-Type header should be present");
        assert_eq!(
            content_type, "application/json",
            "Content-Type should be application/json"
        );

        // Verify response body
        let body = test::read_body(resp).await;
        let body_str = std::str::from_utf8(&body).unwrap();
        let health_response: HealthResponse = from_str(body_str).unwrap();

        assert_eq!(health_response.status, "healthy");
        assert_eq!(health_response.service, "backend");

        // Verify timestamp is a parseable ISO 8601 date
        NaiveDateTime::parse_from_str(&health_response.timestamp, "%Y-%m-%dT%H:%M:%S%.f")
            .expect("Timestamp should be a valid ISO 8601 date");
    }

    #[actix_web::test]
    async fn test_health_rejects_post() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let req = test::TestRequest::post().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(
            !resp.status().is_success(),
            "POST /health should not return 2xx"
        );
    }
}
