use crate::error::ApiError;
use crate::handlers::parse_item_id;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode};

/// DELETE /items/{id} handler - Remove an item
#[utoipa::path(
    delete,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Id of the item to remove")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 400, description = "Invalid item id", body = String, content_type = "text/plain"),
        (status = 404, description = "Item not found", body = String, content_type = "text/plain")
    ),
    tag = "items"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_item_id(&id_str)?;

    if let Err(err) = state.store.delete(id).await {
        tracing::info!("Item not found for delete with id: {}", id);
        return Err(err.into());
    }

    tracing::info!("Successfully deleted item with id: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
