use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use tft_catalog::CatalogError;
use tft_changelog::ChangelogError;
use thiserror::Error;

/// Errors from server startup and configuration.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
pub struct HttpError {
    pub status: u16,
    pub error: String,
}

/// Request-level error: wraps service failures and maps them onto HTTP
/// status codes (NotFound → 404, Conflict → 409, everything else → 500).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Changelog(#[from] ChangelogError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Catalog(CatalogError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Catalog(CatalogError::Conflict { .. }) => StatusCode::CONFLICT,
            Self::Changelog(ChangelogError::NotFound(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = HttpError {
            status: status.as_u16(),
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tft_changelog::EntityType;

    #[test]
    fn not_found_maps_to_404() {
        let error = ApiError::from(ChangelogError::NotFound(3));
        assert_eq!(error.status(), StatusCode::NOT_FOUND);

        let error = ApiError::from(CatalogError::NotFound {
            entity: EntityType::Champion,
            key: "ahri".into(),
        });
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn conflict_maps_to_409() {
        let error = ApiError::from(CatalogError::Conflict {
            entity: EntityType::Item,
            key: "ie".into(),
        });
        assert_eq!(error.status(), StatusCode::CONFLICT);
    }
}
