use crate::error::ApiError;
use crate::models::{CreateResponse, ItemPayload};
use crate::routes;
use crate::state::AppState;
use axum::{Json, body::Bytes, extract::State, http::StatusCode};

/// POST /items/ handler - Create an item
///
/// The store assigns the id; any id sent in the body is ignored. Validation
/// runs before the store is touched, so a rejected request never consumes
/// an id.
#[utoipa::path(
    post,
    path = routes::ITEMS_SLASH,
    request_body = ItemPayload,
    responses(
        (status = 201, description = "Item created", body = CreateResponse),
        (status = 400, description = "Invalid body, empty name or negative value", body = String, content_type = "text/plain")
    ),
    tag = "items"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreateResponse>), ApiError> {
    let payload = ItemPayload::from_body(&body)?;
    payload.validate()?;

    let id = state.store.add(payload).await;

    tracing::info!("Successfully created item with id: {}", id);
    Ok((StatusCode::CREATED, Json(CreateResponse { id })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{body_bytes, body_text, send, setup_test_app};

    #[tokio::test]
    async fn test_create_endpoint_success() {
        let app = setup_test_app();

        let response = send(
            &app,
            "POST",
            "/items/",
            Some(r#"{"name": "Test Item", "value": 111}"#),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_bytes(response).await;
        assert_eq!(body, br#"{"id":1}"#);
    }

    #[tokio::test]
    async fn test_create_endpoint_ids_increase() {
        let app = setup_test_app();

        let mut last = 0;
        for i in 0..5 {
            let response = send(
                &app,
                "POST",
                "/items/",
                Some(&format!(r#"{{"name": "item {}", "value": {}}}"#, i, i)),
            )
            .await;
            let created: CreateResponse =
                serde_json::from_slice(&body_bytes(response).await).unwrap();
            assert!(created.id > last);
            last = created.id;
        }
    }

    #[tokio::test]
    async fn test_create_endpoint_ignores_body_id() {
        let app = setup_test_app();

        let response = send(
            &app,
            "POST",
            "/items/",
            Some(r#"{"id": 500, "name": "numbered", "value": 1}"#),
        )
        .await;
        let created: CreateResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_create_endpoint_without_content_type() {
        let app = setup_test_app();

        let response = tower::ServiceExt::oneshot(
            app,
            axum::http::Request::builder()
                .method("POST")
                .uri("/items/")
                .body(axum::body::Body::from(r#"{"name": "plain", "value": 3}"#))
                .unwrap(),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_create_endpoint_empty_name() {
        let app = setup_test_app();

        let response = send(&app, "POST", "/items/", Some(r#"{"name": "", "value": 1}"#)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Item name cannot be empty");

        let response = send(&app, "POST", "/items/", Some(r#"{"value": 1}"#)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Item name cannot be empty");
    }

    #[tokio::test]
    async fn test_create_endpoint_negative_value_consumes_no_id() {
        let app = setup_test_app();

        let first = send(&app, "POST", "/items/", Some(r#"{"name": "a", "value": 1}"#)).await;
        assert_eq!(body_bytes(first).await, br#"{"id":1}"#);

        let rejected = send(&app, "POST", "/items/", Some(r#"{"name": "b", "value": -1}"#)).await;
        assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(rejected).await, "Item value cannot be negative");

        let next = send(&app, "POST", "/items/", Some(r#"{"name": "c", "value": 2}"#)).await;
        assert_eq!(next.status(), StatusCode::CREATED);
        assert_eq!(body_bytes(next).await, br#"{"id":2}"#);
    }

    #[tokio::test]
    async fn test_create_endpoint_invalid_json() {
        let app = setup_test_app();

        for body in ["{invalid json}", "", r#"{"name": 5}"#, "null"] {
            let response = send(&app, "POST", "/items/", Some(body)).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{:?}", body);
            assert_eq!(body_text(response).await, "Invalid request body");
        }
    }
}
