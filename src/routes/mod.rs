use actix_web::web;

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with a timestamp.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
///   - Body: JSON object with `status` ("healthy"), `service` ("backend")
///     and `timestamp` in ISO 8601 format
pub mod health;

/// # Mock Data Endpoint
///
/// Returns a fixed set of three mock items together with request metadata
/// (message, timestamp, version, deployment environment).
///
/// ## Response
///
/// - **200 OK**: JSON object with `message`, `timestamp`, `version`,
///   `environment` and `data.items`
pub mod data;

/// # Route Configuration
///
/// Registers all service endpoints with the Actix-web service configuration.
///
/// ## Configured Routes
///
/// ```text
/// GET /health   - Service health status
/// GET /api/data - Mock data listing
/// ```
///
/// Any other path or method falls through to the framework's default
/// 404/405 handling.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(data::configure_routes);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn test_configure_registers_both_routes() {
        let app = test::init_service(App::new().configure(configure)).await;

        for uri in ["/health", "/api/data"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 200, "GET {uri} should return 200");
        }
    }

    #[actix_web::test]
    async fn test_unknown_path_returns_404() {
        let app = test::init_service(App::new().configure(configure)).await;

        let req = test::TestRequest::get().uri("/api/unknown").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
    }
}
