use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use std::sync::Arc;
use stroke_service::{
    config::Config, handlers, metrics, middleware::RateLimiter, models::StartTime, RiskScorer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .json()
        .init();

    info!("Starting Stroke Risk Service...");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    info!("Configuration loaded successfully");

    let registry = metrics::build_registry().context("Failed to register metrics")?;

    // Initialize components
    let scorer = Arc::new(RiskScorer::new());
    let rate_limiter = RateLimiter::new(config.rate_limit.requests_per_minute);
    let start_time = StartTime::now();

    let server_config = config.server.clone();
    let cors_max_age = config.cors.max_age_seconds;

    info!(
        "Starting HTTP server on {}:{}",
        server_config.host, server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(scorer.clone()))
            .app_data(web::Data::new(registry.clone()))
            .app_data(web::Data::new(start_time))
            .wrap(rate_limiter.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(cors_max_age),
            )
            .wrap(middleware::Logger::default())
            .configure(handlers::configure_routes)
    })
    .workers(server_config.workers)
    .bind((server_config.host.as_str(), server_config.port))
    .with_context(|| format!("Failed to bind {}:{}", server_config.host, server_config.port))?
    .run()
    .await
    .context("HTTP server terminated with an error")?;

    Ok(())
}
