// src/routes.rs

use axum::{routing::get, Json, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::{config::AppState, docs::ApiDoc, handlers};

pub fn app(app_state: AppState) -> Router {
    let page_routes = Router::new()
        .route("/", get(handlers::pages::home))
        .route("/reports/{id}", get(handlers::pages::report));

    let api_routes = Router::new()
        .route("/health", get(handlers::api::health))
        .route("/kpis", get(handlers::api::get_kpis))
        .route("/reports/{id}", get(handlers::api::get_report));

    Router::new()
        .merge(page_routes)
        .nest("/api", api_routes)
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::QueryGateway;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
    use tower::ServiceExt;

    // Pool preguiçoso: nenhum destes testes chega a abrir conexão
    fn test_app() -> (Router, QueryGateway) {
        let pool = PgPoolOptions::new().connect_lazy_with(PgConnectOptions::new());
        let gateway = QueryGateway::from_pool(pool);
        let state = AppState::with_gateway(gateway.clone()).unwrap();
        (app(state), gateway)
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn unknown_report_page_is_not_found() {
        let (app, _) = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/reports/ventas-secretas?page=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let content_type = response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/html"));
        let body = body_string(response).await;
        assert!(body.contains("404 - No encontrado"));
        assert!(body.contains("class=\"sidebar\""));
        assert!(body.contains("/reports/daily-sales"));
    }

    #[tokio::test]
    async fn unknown_report_api_is_not_found_json() {
        let (app, _) = test_app();
        let response = app
            .oneshot(Request::builder().uri("/api/reports/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn page_locale_comes_from_accept_language() {
        let (app, _) = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/reports/unknown")
                    .header(header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(body_string(response).await.contains("lang=\"en\""));
    }

    #[tokio::test]
    async fn health_reflects_pool_state() {
        let (app, gateway) = test_app();
        let response = app
            .clone()
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        gateway.shutdown().await;
        let response = app
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn closed_pool_fails_the_page_with_500() {
        let (app, gateway) = test_app();
        gateway.shutdown().await;

        let response = app
            .oneshot(Request::builder().uri("/reports/order-status").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_string(response).await;
        assert!(!body.contains("PoolClosed"));
        assert!(body.contains("No fue posible generar el reporte."));
    }

    #[tokio::test]
    async fn openapi_document_lists_report_routes() {
        let (app, _) = test_app();
        let response = app
            .oneshot(Request::builder().uri("/api-docs/openapi.json").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(json["paths"]["/api/reports/{id}"].is_object());
        assert!(json["paths"]["/api/kpis"].is_object());
    }
}
