use std::env;
use std::io;

/// Listen port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

/// Environment name used when `ENVIRONMENT` is unset.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// # Listen Port
///
/// Reads the TCP port from the `PORT` environment variable.
///
/// - Unset: returns [`DEFAULT_PORT`] (5000).
/// - Set but not a valid port number: returns an `io::Error`, which aborts
///   startup with a non-zero exit.
pub fn server_port() -> io::Result<u16> {
    match env::var("PORT") {
        Ok(raw) => raw.parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid PORT value {raw:?}: {e}"),
            )
        }),
        Err(_) => Ok(DEFAULT_PORT),
    }
}

/// # Deployment Environment
///
/// Reads the environment name from the `ENVIRONMENT` variable, defaulting to
/// [`DEFAULT_ENVIRONMENT`]. The value is echoed verbatim in the data listing
/// response.
pub fn environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string())
}
