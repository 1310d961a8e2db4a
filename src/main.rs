use actix_web::{App, HttpServer};

/// Backend Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Health check and mock data endpoints (configured in routes)
/// - Environment configuration via `.env` file and process environment
///
/// # Endpoints
/// - Health check: `GET /health`
/// - Mock data listing: `GET /api/data`
///
/// # Configuration
/// - `PORT`: listen port (default 5000); a non-numeric value aborts startup
/// - `ENVIRONMENT`: deployment environment echoed in `/api/data`
///   (default "development")
///
/// The server binds on all interfaces and runs until terminated by the host
/// process or an OS signal.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let port = backend_service::config::server_port()?;

    HttpServer::new(|| App::new().configure(backend_service::routes::configure))
        .bind(("0.0.0.0", port))?
        .run()
        .await
}
