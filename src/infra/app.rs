use axum::{Router, http};
use http::header::CONTENT_TYPE;
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use uuid::Uuid;

use crate::adapters::{self, http::app_state::AppState};

pub fn create_app(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(app_state.config.cors_origin.clone())
        .allow_methods([http::Method::GET])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .nest("/api", adapters::http::routes::router())
        .with_state(app_state)
        .layer(cors)
        .layer(SetResponseHeaderLayer::if_not_present(
            http::header::X_CONTENT_TYPE_OPTIONS,
            http::HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            http::header::X_FRAME_OPTIONS,
            http::HeaderValue::from_static("DENY"),
        ))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &http::Request<_>| {
                let request_id = Uuid::new_v4();
                tracing::info_span!(
                    "http-request",
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                    request_id = %request_id
                )
            }),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{StatusCode, header};
    use axum_test::TestServer;
    use serde_json::json;

    use crate::test_utils::TestAppStateBuilder;

    #[tokio::test]
    async fn checkout_is_served_under_api() {
        let app_state = TestAppStateBuilder::new().with_all_plans().build();
        let server = TestServer::new(create_app(app_state)).unwrap();

        let response = server
            .get("/api/checkout")
            .add_query_param("plan", "vip")
            .await;

        response.assert_status(StatusCode::FOUND);
        assert_eq!(response.header(header::LOCATION), "https://pay.example/vip");
        assert_eq!(response.header(header::X_CONTENT_TYPE_OPTIONS), "nosniff");
        assert_eq!(response.header(header::X_FRAME_OPTIONS), "DENY");
    }

    #[tokio::test]
    async fn invalid_plan_through_full_stack() {
        let server =
            TestServer::new(create_app(TestAppStateBuilder::new().build())).unwrap();

        let response = server
            .get("/api/checkout")
            .add_query_param("plan", "pro")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": "Invalid plan" }));
    }

    #[tokio::test]
    async fn booking_is_served_under_api() {
        let server =
            TestServer::new(create_app(TestAppStateBuilder::new().build())).unwrap();

        server
            .get("/api/booking/embed-url")
            .await
            .assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let server =
            TestServer::new(create_app(TestAppStateBuilder::new().build())).unwrap();

        server.get("/checkout").await.assert_status(StatusCode::NOT_FOUND);
    }
}
