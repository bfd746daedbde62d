use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use std::io;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use devconnect_service::db::MemoryStore;
use devconnect_service::middleware::RequestTimingMiddleware;
use devconnect_service::routes::configure_routes;
use devconnect_service::security;
use devconnect_service::services::{GithubClient, PostService, ProfileService};
use devconnect_service::Config;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();

    tracing::info!("Starting devconnect-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    security::jwt::initialize_secret(&config.jwt.secret)
        .expect("Failed to initialize JWT secret from environment");
    tracing::info!("JWT secret initialized");

    // Document store and services
    let store = Arc::new(MemoryStore::new());
    let profile_service = web::Data::new(ProfileService::new(store.clone(), store.clone()));
    let post_service = web::Data::new(PostService::new(store.clone(), store.clone()));
    let github_client = web::Data::new(GithubClient::new(config.github.clone()));

    let host = config.app.host.clone();
    let port = config.app.port;
    tracing::info!("Listening on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestTimingMiddleware)
            .wrap(Cors::permissive())
            .app_data(profile_service.clone())
            .app_data(post_service.clone())
            .app_data(github_client.clone())
            .configure(configure_routes)
    })
    .bind((host, port))?
    .run()
    .await
}
