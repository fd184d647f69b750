use crate::error::ApiError;
use crate::handlers::parse_item_id;
use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::Path, extract::State, http::StatusCode};

/// GET /items/{id} handler - Retrieve a single item
#[utoipa::path(
    get,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Id assigned to the item on creation")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, description = "Invalid item id", body = String, content_type = "text/plain"),
        (status = 404, description = "Item not found", body = String, content_type = "text/plain")
    ),
    tag = "items"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let id = parse_item_id(&id_str)?;

    match state.store.get(id).await {
        Ok(item) => {
            tracing::info!("Successfully retrieved item with id: {}", id);
            Ok((StatusCode::OK, Json(item)))
        }
        Err(err) => {
            tracing::info!("Item not found with id: {}", id);
            Err(err.into())
        }
    }
}
