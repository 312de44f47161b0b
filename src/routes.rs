//! Declarative route table mapping URL+method pairs to handlers.

use crate::handlers::{cms, contacts, faqs, house_types, social, status};
use crate::state::AppState;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// All API routes under one router; the caller nests this at `/api`.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/status", get(status::status))
        // CMS
        .route(
            "/cms/content",
            get(cms::get_content).put(cms::update_content),
        )
        .route("/cms/theme", get(cms::get_theme).put(cms::update_theme))
        // House types
        .route(
            "/house-types",
            get(house_types::list).post(house_types::create),
        )
        .route(
            "/house-types/:id",
            get(house_types::get_by_id)
                .put(house_types::update)
                .delete(house_types::delete),
        )
        .route(
            "/house-types/category/:category",
            get(house_types::get_by_category),
        )
        .route(
            "/house-types/:id/toggle-active",
            put(house_types::toggle_active),
        )
        .route("/house-types/:id/reorder", put(house_types::reorder))
        // FAQs
        .route("/faqs", get(faqs::list).post(faqs::create))
        .route("/faqs/active", get(faqs::list_active))
        .route("/faqs/category/:category", get(faqs::list_by_category))
        .route(
            "/faqs/:id",
            get(faqs::get_by_id).put(faqs::update).delete(faqs::delete),
        )
        // Contact
        .route("/contact", post(contacts::submit))
        .route("/contact/messages", get(contacts::list))
        .route("/contact/messages/unread", get(contacts::list_unread))
        .route("/contact/messages/:id/read", put(contacts::mark_read))
        .route("/contact/messages/:id", axum::routing::delete(contacts::delete))
        // Social media
        .route("/social-media", get(social::list).post(social::create))
        .route("/social-media/active", get(social::list_active))
        .route(
            "/social-media/:id",
            put(social::update).delete(social::delete),
        )
        .with_state(state)
}

/// Full application: API routes plus middleware.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes(state))
        .layer(TraceLayer::new_for_http())
        // Request bodies are small JSON payloads; 2 MB is plenty.
        .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024))
        .layer(cors_layer())
}

/// CORS from `ALLOWED_ORIGINS` (comma-separated); permissive when unset,
/// which suits local development against the showcase frontend.
fn cors_layer() -> CorsLayer {
    let origins: Vec<HeaderValue> = std::env::var("ALLOWED_ORIGINS")
        .map(|s| {
            s.split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect()
        })
        .unwrap_or_default();
    if origins.is_empty() {
        return CorsLayer::permissive();
    }
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    /// Lazy pool: no connection is made until a query runs, so handlers whose
    /// validation rejects the request before any SQL can be tested offline.
    fn test_app() -> Router {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgres://localhost/furnilayout_test")
            .expect("lazy pool");
        create_app(AppState { pool })
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(axum::http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn status_endpoint_answers_without_database() {
        let resp = test_app()
            .oneshot(Request::get("/api/status").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let v = body_json(resp).await;
        assert_eq!(v["status"], "success");
        assert_eq!(v["service"], "FurniLayout API");
        assert_eq!(v["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn cms_update_without_section_is_rejected() {
        let resp = test_app()
            .oneshot(json_request(
                "PUT",
                "/api/cms/content",
                r#"{"content": {"hero": {}}}"#,
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let v = body_json(resp).await;
        assert_eq!(v["status"], "error");
        assert_eq!(v["message"], "Section is required");
    }

    #[tokio::test]
    async fn theme_update_with_empty_object_is_rejected() {
        let resp = test_app()
            .oneshot(json_request("PUT", "/api/cms/theme", r#"{"theme": {}}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let v = body_json(resp).await;
        assert_eq!(v["message"], "Theme object required");
    }

    #[tokio::test]
    async fn house_type_create_without_name_is_rejected() {
        let resp = test_app()
            .oneshot(json_request(
                "POST",
                "/api/house-types",
                r#"{"description": "no name given"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let v = body_json(resp).await;
        assert_eq!(v["message"], "Name is required");
    }

    #[tokio::test]
    async fn house_type_update_with_empty_body_is_rejected() {
        let resp = test_app()
            .oneshot(json_request("PUT", "/api/house-types/1", "{}"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let v = body_json(resp).await;
        assert_eq!(v["message"], "No data provided");
    }

    #[tokio::test]
    async fn reorder_without_display_order_is_rejected() {
        let resp = test_app()
            .oneshot(json_request("PUT", "/api/house-types/1/reorder", "{}"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let v = body_json(resp).await;
        assert_eq!(v["message"], "display_order is required");
    }

    #[tokio::test]
    async fn contact_submit_without_required_fields_is_rejected() {
        let resp = test_app()
            .oneshot(json_request(
                "POST",
                "/api/contact",
                r#"{"name": "Ana", "email": ""}"#,
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let v = body_json(resp).await;
        assert_eq!(v["message"], "Name, email, and message are required");
    }

    #[tokio::test]
    async fn faq_create_without_answer_is_rejected() {
        let resp = test_app()
            .oneshot(json_request(
                "POST",
                "/api/faqs",
                r#"{"question": "Do you deliver?"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let v = body_json(resp).await;
        assert_eq!(v["message"], "Question and answer are required");
    }

    #[tokio::test]
    async fn social_media_create_without_url_is_rejected() {
        let resp = test_app()
            .oneshot(json_request(
                "POST",
                "/api/social-media",
                r#"{"platform": "Instagram"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let v = body_json(resp).await;
        assert_eq!(v["message"], "Platform and URL are required");
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let resp = test_app()
            .oneshot(Request::get("/api/layout/predict").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
