use crate::infra::{AppState, InMemoryBoardStore, InMemorySessions};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use job_board::board::insights::{insights_router, JobInsightsService};
use job_board::board::profile::{company_router, CompanyProfileService};
use serde_json::json;
use std::sync::Arc;

/// Assemble the feature routers plus the operational endpoints.
pub(crate) fn board_router(
    store: Arc<InMemoryBoardStore>,
    sessions: Arc<InMemorySessions>,
) -> axum::Router {
    let profile_service = Arc::new(CompanyProfileService::new(store.clone()));
    let insights_service = Arc::new(JobInsightsService::new(store.clone(), store, sessions));

    company_router(profile_service)
        .merge(insights_router(insights_service))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::seed_demo_board;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn seeded_router() -> (axum::Router, crate::infra::DemoFixture) {
        let store = Arc::new(InMemoryBoardStore::default());
        let sessions = Arc::new(InMemorySessions::default());
        let fixture = seed_demo_board(&store, &sessions);
        (board_router(store, sessions), fixture)
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let (router, _) = seeded_router();
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn seeded_company_page_renders() {
        let (router, fixture) = seeded_router();
        let response = router
            .oneshot(
                Request::builder()
                    .uri(format!("/companies/{}", fixture.company_id.0))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let html = String::from_utf8(body.to_vec()).expect("utf8");
        assert!(html.contains("Northwind Labs"));
        assert!(html.contains("Senior Backend Engineer"));
    }

    #[tokio::test]
    async fn seeded_insights_require_a_session() {
        let (router, fixture) = seeded_router();
        let response = router
            .oneshot(
                Request::builder()
                    .uri(format!("/api/v1/jobs/{}/insights", fixture.job_id.0))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
