use actix_cors::Cors;
use actix_web::{App, HttpServer};
use volleyball_stats_api::config::ServerConfig;

/// Volleyball Stats API Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Health check endpoint for liveness probes
/// - Permissive CORS so browser clients on any origin can call the API
/// - Environment configuration via `.env` file and the `PORT` variable
///
/// # Endpoints
/// - Health check: `GET /health` (configured in routes)
///
/// # Configuration
/// - Server binds to `0.0.0.0:3333` by default
/// - `PORT` overrides the listening port when set and numeric
/// - Environment variables loaded from `.env` file (if present)
///
/// # Exit Codes
/// - `0`: graceful operation
/// - `1`: the listener failed to bind (port in use, insufficient privilege)
#[actix_web::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = ServerConfig::from_env();

    let server = HttpServer::new(|| {
        App::new()
            .wrap(Cors::permissive())
            .configure(volleyball_stats_api::routes::configure)
    })
    .bind(("0.0.0.0", config.port));

    // Bind failure is the only failure path in the system and it is fatal.
    let server = match server {
        Ok(server) => server,
        Err(err) => {
            log::error!("failed to bind 0.0.0.0:{}: {err}", config.port);
            std::process::exit(1);
        }
    };

    log::info!("API listening on port {}", config.port);

    if let Err(err) = server.run().await {
        log::error!("server terminated with error: {err}");
        std::process::exit(1);
    }
}
