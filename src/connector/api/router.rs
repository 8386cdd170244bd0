use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::error;

use crate::domain::{DomainError, GenerateRequest, GenerateResponse};

use super::container::Container;

/// Build the HTTP surface.
///
/// Malformed request bodies (missing or wrong-typed `prompt`) are rejected
/// by the `Json` extractor with a client-error status before the handler —
/// and therefore before any upstream call — runs.
pub fn api_router(container: Arc<Container>) -> Router {
    Router::new()
        .route("/generate", post(generate))
        .route("/health", get(health))
        .with_state(container)
}

async fn generate(
    State(container): State<Arc<Container>>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let use_case = container.generate_use_case();
    let response = use_case.execute(&request.prompt).await?;
    Ok(Json(GenerateResponse { response }))
}

async fn health() -> StatusCode {
    StatusCode::OK
}

/// Maps [`DomainError`] onto HTTP statuses: upstream failures become 502,
/// storage failures 500, validation 400.
struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DomainError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            DomainError::Upstream(_)
            | DomainError::UpstreamStatus(_)
            | DomainError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            DomainError::Storage(_) | DomainError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error!("Request failed: {}", self.0);
        (status, self.0.to_string()).into_response()
    }
}
