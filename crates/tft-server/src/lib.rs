//! HTTP server for the TFT Friendly backend.
//!
//! Thin axum layer over the entity services and the update service:
//! CRUD endpoints per game-data collection, plus the update-log endpoints
//! clients use to synchronize incrementally.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError, ServerResult};
pub use router::build_router;
pub use server::Server;
pub use state::AppState;
