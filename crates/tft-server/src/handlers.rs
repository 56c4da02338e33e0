use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use tft_changelog::{Diffable, Update};

use crate::error::ApiError;
use crate::state::{AppState, Catalog};

/// Health check handler.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "name": "tft-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// ---------------------------------------------------------------------------
// Update log
// ---------------------------------------------------------------------------

/// `GET /updates/identifier` — the last assigned identifier, `-1` when the
/// log is empty.
pub async fn last_identifier(State(state): State<AppState>) -> Result<Json<i64>, ApiError> {
    Ok(Json(state.updates.last_identifier()?))
}

/// `GET /updates/{identifier}` — point lookup.
pub async fn get_update(
    State(state): State<AppState>,
    Path(identifier): Path<i64>,
) -> Result<Json<Update>, ApiError> {
    Ok(Json(state.updates.get_update(identifier)?))
}

/// `GET /updates/from/{identifier}` — catch-up query: everything strictly
/// after the given identifier.
pub async fn updates_from(
    State(state): State<AppState>,
    Path(identifier): Path<i64>,
) -> Result<Json<Vec<Update>>, ApiError> {
    Ok(Json(state.updates.updates_from(identifier)?))
}

/// `POST /updates` — register a raw list of diff lines; returns the new
/// identifier.
pub async fn post_update(
    State(state): State<AppState>,
    Json(lines): Json<Vec<String>>,
) -> Result<Json<i64>, ApiError> {
    Ok(Json(state.updates.register_change(lines)?))
}

/// `DELETE /updates/{identifier}` — administrative removal.
pub async fn delete_update(
    State(state): State<AppState>,
    Path(identifier): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.updates.delete_update(identifier)?;
    Ok(StatusCode::OK)
}

// ---------------------------------------------------------------------------
// Entity collections
// ---------------------------------------------------------------------------

/// `GET /{collection}`
pub async fn list_entities<E>(State(state): State<AppState>) -> Result<Json<Vec<E>>, ApiError>
where
    E: Diffable + Clone + Send + Sync + Serialize + 'static,
    AppState: Catalog<E>,
{
    Ok(Json(state.catalog().list()?))
}

/// `GET /{collection}/{key}`
pub async fn get_entity<E>(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<E>, ApiError>
where
    E: Diffable + Clone + Send + Sync + Serialize + 'static,
    AppState: Catalog<E>,
{
    Ok(Json(state.catalog().get(&key)?))
}

/// `POST /{collection}`
pub async fn add_entity<E>(
    State(state): State<AppState>,
    Json(entity): Json<E>,
) -> Result<Json<E>, ApiError>
where
    E: Diffable + Clone + Send + Sync + Serialize + DeserializeOwned + 'static,
    AppState: Catalog<E>,
{
    Ok(Json(state.catalog().add(entity)?))
}

/// `PUT /{collection}/{key}`
pub async fn update_entity<E>(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(entity): Json<E>,
) -> Result<Json<E>, ApiError>
where
    E: Diffable + Clone + Send + Sync + Serialize + DeserializeOwned + 'static,
    AppState: Catalog<E>,
{
    Ok(Json(state.catalog().update(&key, entity)?))
}

/// `DELETE /{collection}/{key}`
pub async fn delete_entity<E>(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<StatusCode, ApiError>
where
    E: Diffable + Clone + Send + Sync + 'static,
    AppState: Catalog<E>,
{
    state.catalog().delete(&key)?;
    Ok(StatusCode::OK)
}
