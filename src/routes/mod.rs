use actix_web::web;

/// # Health Check Endpoint
///
/// Returns the current availability of the service along with a timestamp.
///
/// ## Response
///
/// - **200 OK**: Service is running
///   - Body: JSON object with `status` ("ok"), `service`
///     ("volleyball-stats"), and `timestamp` in ISO 8601 format
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "ok",
///   "service": "volleyball-stats",
///   "timestamp": "2023-10-05T12:34:56.789+00:00"
/// }
/// ```
pub mod health;

/// # API Route Configuration
///
/// Registers every endpoint of the service. The health check lives at the
/// root scope so the wire path is exactly `/health`.
///
/// ## Example Endpoints
///
/// ```text
/// GET /health - Service health status
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes);
}
