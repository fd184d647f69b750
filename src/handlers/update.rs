use crate::error::ApiError;
use crate::handlers::parse_item_id;
use crate::models::ItemPayload;
use crate::routes;
use crate::state::AppState;
use axum::{body::Bytes, extract::Path, extract::State, http::StatusCode};

/// PUT /items/{id} handler - Replace an item's name and value
///
/// Unlike create, no field checks are applied: an empty name or a negative
/// value is stored as sent. The id in the path always wins over any id in
/// the body.
#[utoipa::path(
    put,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Id of the item to replace")
    ),
    request_body = ItemPayload,
    responses(
        (status = 204, description = "Item updated"),
        (status = 400, description = "Invalid item id or request body", body = String, content_type = "text/plain"),
        (status = 404, description = "Item not found", body = String, content_type = "text/plain")
    ),
    tag = "items"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let id = parse_item_id(&id_str)?;
    let payload = ItemPayload::from_body(&body)?;

    if let Err(err) = state.store.update(id, payload).await {
        tracing::info!("Item not found for update with id: {}", id);
        return Err(err.into());
    }

    tracing::info!("Successfully updated item with id: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
