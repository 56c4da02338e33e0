use axum::routing::get;
use axum::Router;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tft_changelog::Diffable;
use tft_types::{Ability, AbilityEffect, Champion, Item, Set, Trait};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::{AppState, Catalog};

/// Build the axum router with all endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/updates", axum::routing::post(handlers::post_update))
        .route("/updates/identifier", get(handlers::last_identifier))
        .route("/updates/from/:identifier", get(handlers::updates_from))
        .route(
            "/updates/:identifier",
            get(handlers::get_update).delete(handlers::delete_update),
        )
        .merge(collection::<Champion>("champions"))
        .merge(collection::<Ability>("abilities"))
        .merge(collection::<AbilityEffect>("ability-effects"))
        .merge(collection::<Item>("items"))
        .merge(collection::<Trait>("traits"))
        .merge(collection::<Set>("sets"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Standard CRUD routes for one entity collection.
fn collection<E>(name: &str) -> Router<AppState>
where
    E: Diffable + Clone + Send + Sync + Serialize + DeserializeOwned + 'static,
    AppState: Catalog<E>,
{
    Router::new()
        .route(
            &format!("/{name}"),
            get(handlers::list_entities::<E>).post(handlers::add_entity::<E>),
        )
        .route(
            &format!("/{name}/:key"),
            get(handlers::get_entity::<E>)
                .put(handlers::update_entity::<E>)
                .delete(handlers::delete_entity::<E>),
        )
}
