use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A001 STORAGE
        // ========================================
        .route("/api/storage", get(handlers::a001_storage::list_all))
        .route(
            "/api/storage/testdata",
            post(handlers::a001_storage::insert_test_data),
        )
        // ========================================
        // A002 BOX
        // ========================================
        // Путь со слэшем на конце, как его запрашивает страница
        .route(
            "/get_boxes/:storage_id/",
            get(handlers::a002_box::get_boxes),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health() {
        let response = configure_routes()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_get_boxes_rejects_non_integer_id() {
        let response = configure_routes()
            .oneshot(Request::get("/get_boxes/abc/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = configure_routes()
            .oneshot(Request::get("/get_boxes/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
