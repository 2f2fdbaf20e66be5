use crate::models::HealthStatus;
use actix_web::{HttpResponse, Responder, get};

/// # Health Check Endpoint
///
/// Liveness probe for the service, indicating whether the API is up.
/// Reads no path parameters, query parameters, or body, and has no error
/// conditions of its own; the only side effect is reading the clock.
///
/// ## Response
///
/// - **200 OK**: Service is running
///   - Content-Type: `application/json`
///   - Body: [`HealthStatus`] containing:
///     - `status`: String indicating service availability ("ok")
///     - `service`: Fixed service name ("volleyball-stats")
///     - `timestamp`: ISO 8601 timestamp of the check
///
/// ## Example Success Response
/// ```json
/// {
///   "status": "ok",
///   "service": "volleyball-stats",
///   "timestamp": "2023-10-05T14:23:45.678+00:00"
/// }
/// ```
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthStatus::ok())
}

/// # Route Configuration
///
/// Registers the health endpoints with the Actix-web service configuration.
///
/// ## Currently Configured Routes
///
/// - `GET /health`: Health check endpoint
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(health);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use chrono::DateTime;
    use serde_json::Value;

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

        // Extract and validate response body
        let body = test::read_body(resp).await;
        let body_str = String::from_utf8(body.to_vec()).expect("Body should be valid UTF-8");
        let body_json: Value = serde_json::from_str(&body_str).expect("Body should be valid JSON");

        // Check JSON structure
        assert_eq!(body_json["status"], "ok", "Status should be 'ok'");
        assert_eq!(
            body_json["service"], "volleyball-stats",
            "Service name should be 'volleyball-stats'"
        );

        // Verify timestamp format
        let timestamp = body_json["timestamp"]
            .as_str()
            .expect("Timestamp should be a string");

        // Make sure the timestamp is a valid ISO 8601 date
        let _dt = DateTime::parse_from_rfc3339(timestamp)
            .expect("Timestamp should be a valid RFC 3339 / ISO 8601 date");
    }

    #[actix_web::test]
    async fn test_health_endpoint_is_idempotent() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        // Repeated calls must keep the fixed fields stable
        let mut previous_timestamp: Option<String> = None;
        for _ in 0..3 {
            let req = test::TestRequest::get().uri("/health").to_request();
            let resp = test::call_service(&app, req).await;
            assert!(resp.status().is_success());

            let body = test::read_body(resp).await;
            let status: HealthStatus = serde_json::from_slice(&body).unwrap();
            assert_eq!(status.status, "ok");
            assert_eq!(status.service, "volleyball-stats");

            // Timestamps move forward (or stay equal) across sequential calls
            if let Some(prev) = &previous_timestamp {
                let a = DateTime::parse_from_rfc3339(prev).unwrap();
                let b = DateTime::parse_from_rfc3339(&status.timestamp).unwrap();
                assert!(a <= b, "Timestamps should be non-decreasing");
            }
            previous_timestamp = Some(status.timestamp);
        }
    }
}
