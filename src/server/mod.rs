use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};

use crate::adapters::{SpeciesApiClient, TranslationApiClient};
use crate::core::service::PokedexService;
use crate::domain::model::LookupOutcome;
use crate::utils::error::PokedexError;

/// Shared application state: one service instance for all requests.
#[derive(Clone)]
pub struct AppState {
    service: Arc<PokedexService<SpeciesApiClient, TranslationApiClient>>,
}

impl AppState {
    pub fn new(service: PokedexService<SpeciesApiClient, TranslationApiClient>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/pokemon/:name", get(get_pokemon))
        .route("/pokemon/:name/translated", get(get_translated_pokemon))
        .route("/healthcheck", get(healthcheck))
        .with_state(state)
}

async fn healthcheck() -> impl IntoResponse {
    (StatusCode::OK, "Healthy")
}

async fn get_pokemon(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    match state.service.get_pokemon(&name).await {
        Ok(LookupOutcome::Found(summary)) => (StatusCode::OK, Json(summary)).into_response(),
        Ok(LookupOutcome::NotFound) => StatusCode::NOT_FOUND.into_response(),
        Err(error) => bad_request(error),
    }
}

async fn get_translated_pokemon(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    match state.service.get_translated_pokemon(&name).await {
        Ok(LookupOutcome::Found(summary)) => (StatusCode::OK, Json(summary)).into_response(),
        Ok(LookupOutcome::NotFound) => StatusCode::NOT_FOUND.into_response(),
        Err(error) => bad_request(error),
    }
}

/// The service only lets argument validation through as an error; map it
/// to a client fault rather than a server one.
fn bad_request(error: PokedexError) -> Response {
    tracing::debug!(error = %error, "rejecting request");
    (StatusCode::BAD_REQUEST, error.to_string()).into_response()
}
