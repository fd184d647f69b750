use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// GET /items handler - List all items
///
/// Served on both `/items` and `/items/`. The response is a snapshot taken
/// under the store's read lock; callers should not rely on its order.
#[utoipa::path(
    get,
    path = routes::ITEMS,
    responses(
        (status = 200, description = "All stored items", body = Vec<Item>)
    ),
    tag = "items"
)]
pub async fn list_handler(State(state): State<AppState>) -> (StatusCode, Json<Vec<Item>>) {
    let items = state.store.list().await;

    tracing::info!("Listed {} items", items.len());

    (StatusCode::OK, Json(items))
}
