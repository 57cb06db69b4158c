mod dto;
mod handlers;
mod models;
mod repository;
mod service;

use axum::Router;

use std::{env, sync::Arc};

use handlers::rest;
use repository::Repository;

use tower_http::{cors::CorsLayer, services::ServeFile, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use service::NoteService;

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt::init();

    // Fetch env variables
    let database_dsn =
        env::var("PG_DSN").expect("database dsn must be provided as an ENV variable");

    // Repository creation and migration
    let mut repo = Repository::new(&database_dsn).await.unwrap_or_else(|e| {
        tracing::error!("Failed to establish database connection: {e}");
        panic!("failed to establish database connection: {e}");
    });

    repo.migrate().await.unwrap_or_else(|e| {
        tracing::error!("Failed to migrate database: {e}");
        panic!("failed to migrate database: {e}");
    });

    // Service creation
    let service = Arc::new(NoteService::new(Arc::new(repo)));

    // Router config: API routes, static index page, Swagger UI.
    // CORS is wide open so a separately hosted client can call the API.
    let app = Router::new()
        .merge(rest::router(service))
        .route_service("/", ServeFile::new("static/index.html"))
        .merge(
            SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", rest::ApiDoc::openapi()),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind("0.0.0.0:5001").await.unwrap();

    // Starting router
    tracing::info!("Started listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("failed to start server");
}
