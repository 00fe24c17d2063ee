mod config;
mod db;
mod error;
mod models;
mod render;
mod routes;
mod service;

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::db::SlotStore;
use crate::service::ReservationService;

#[derive(Clone)]
pub struct AppState {
    pub reservations: ReservationService,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::visitor::submit,
        routes::visitor::list_availability,
        routes::admin::list_slots,
        routes::admin::reset,
    ),
    components(schemas(
        models::slot::Slot,
        models::slot::SlotAvailability,
        models::slot::ReservationForm,
    )),
    tags(
        (name = "Reservations", description = "Slot availability and seat reservation"),
        (name = "Admin", description = "Slot counter administration")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("slot_counter=debug,tower_http=debug")),
        )
        .init();

    let config = config::Config::from_env()?;

    let pool = db::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    let store = SlotStore::new(pool);
    store
        .initialize(&config.slots)
        .await
        .context("Failed to initialize slot table")?;

    let cors = if config.cors_origins == "*" || config.cors_origins.is_empty() {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
    };

    let state = AppState {
        reservations: ReservationService::new(store),
    };

    let app = routes::app_router(state)
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    tracing::info!("Listening on {}", config.listen_addr);
    tracing::info!("Swagger UI at http://{}/docs/", config.listen_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
