use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Query, State};
use axum::{Json, Router, routing::get};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};

use crate::error::LookupError;
use crate::lookup::{LookupResponse, StopFinder};

#[derive(Debug, Deserialize)]
struct SearchParams {
    place_name: Option<String>,
}

pub fn router(finder: Arc<StopFinder>) -> Router {
    Router::new()
        .route("/search", get(search))
        .with_state(finder)
}

async fn search(
    State(finder): State<Arc<StopFinder>>,
    Query(params): Query<SearchParams>,
) -> Json<LookupResponse> {
    let place_name = params.place_name.unwrap_or_default();
    if place_name.is_empty() {
        return Json(LookupResponse::failure("Please enter a location"));
    }

    // The lookup blocks on upstream I/O, so it runs off the async workers
    let outcome = tokio::task::spawn_blocking(move || finder.find_stop_near(&place_name))
        .await
        .unwrap_or_else(|join_error| Err(LookupError::unexpected(join_error.to_string())));

    Json(LookupResponse::from(outcome))
}

pub async fn run(finder: Arc<StopFinder>, port: u16) -> Result<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new().nest("/api", router(finder)).layer(cors);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Web server running at http://localhost:{}", port);
    axum::serve(listener, app)
        .await
        .context("Web server stopped unexpectedly")?;
    Ok(())
}
