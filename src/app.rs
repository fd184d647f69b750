use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{
    create_handler, delete_handler, get_handler, health_handler, list_handler,
    method_not_allowed, update_handler,
};
use crate::routes;
use crate::state::AppState;

/// Build the complete router over the given state
///
/// `/items` and `/items/` share one method router so the collection behaves
/// identically with or without the trailing slash. Anything deeper under
/// `/items/` is an item route, so `/items/1/2` is an invalid id rather than
/// an unknown path.
pub fn build_router(state: AppState) -> Router {
    let collection = get(list_handler).post(create_handler);

    Router::new()
        .route(routes::HEALTH, get(health_handler))
        .route(routes::ITEMS, collection.clone())
        .route(routes::ITEMS_SLASH, collection)
        .route(
            routes::ITEM_ROUTE,
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
