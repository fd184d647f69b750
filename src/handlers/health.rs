use crate::models::HealthResponse;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// GET /health handler - Health check endpoint
///
/// Reads the item count under the store's read lock, so a response also
/// shows the lock is not stuck behind a writer.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let item_count = state.store.len().await;
    tracing::debug!("Health check passed with {} items", item_count);

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            item_count,
        }),
    )
}
