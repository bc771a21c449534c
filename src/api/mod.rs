// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{PreparePaymentRequest, PreparePaymentResponse},
    state::AppState,
};

pub mod health;
pub mod payments;

pub fn router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route("/payments/prepare", post(payments::prepare_payment))
        .with_state(state.clone());

    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .with_state(state);

    Router::new()
        .nest("/v1", v1_routes)
        .merge(health_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        payments::prepare_payment,
        health::health,
        health::liveness,
        health::readiness
    ),
    components(
        schemas(
            PreparePaymentRequest,
            PreparePaymentResponse,
            health::ReadyResponse,
            health::HealthChecks,
            health::HealthResponse
        )
    ),
    tags(
        (name = "Payments", description = "Payment coin staging"),
        (name = "Health", description = "Liveness and readiness probes")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::blockchain::source::testing::{coin, FakeCoinSource};

    fn app(source: FakeCoinSource) -> Router {
        router(AppState::with_source(Arc::new(source)))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn prepare(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/v1/payments/prepare")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn router_builds_with_all_routes() {
        let app = app(FakeCoinSource::empty());
        // Ensure the router can be converted into a service without panicking.
        let _ = app.into_make_service();
    }

    #[tokio::test]
    async fn prepare_route_returns_staged_commands() {
        let app = app(FakeCoinSource::new(vec![vec![
            coin("0x1", 30),
            coin("0x2", 50),
        ]]));

        let response = app
            .oneshot(prepare(json!({
                "owner": "0xowner",
                "coin_type": "0xabc::token::TOKEN",
                "amount": "40"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["coin"], json!({ "NestedResult": [1, 0] }));
        assert_eq!(
            body["stage"]["commands"],
            json!([
                { "MergeCoins": [{ "Input": 0 }, [{ "Input": 1 }]] },
                { "SplitCoins": [{ "Input": 0 }, [{ "Input": 2 }]] }
            ])
        );
    }

    #[tokio::test]
    async fn prepare_route_reports_missing_coins() {
        let app = app(FakeCoinSource::empty());

        let response = app
            .oneshot(prepare(json!({
                "owner": "0xowner",
                "coin_type": "0xabc::token::TOKEN",
                "amount": "1"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(
            body["error"],
            "No 0xabc::token::TOKEN coins found for 0xowner"
        );
    }

    #[tokio::test]
    async fn liveness_route_responds() {
        let response = app(FakeCoinSource::empty())
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn openapi_document_lists_prepare_path() {
        let response = app(FakeCoinSource::empty())
            .oneshot(
                Request::builder()
                    .uri("/api-doc/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let doc = body_json(response).await;
        assert!(doc["paths"]["/v1/payments/prepare"]["post"].is_object());
    }
}
