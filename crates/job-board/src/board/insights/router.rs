use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tracing::error;

use super::service::{InsightsError, JobInsightsService};
use crate::auth::{session_token, SessionResolver};
use crate::board::repository::{JobRepository, SeekerRepository};

/// Router builder exposing the insights endpoint for one posting.
pub fn insights_router<J, S, A>(service: Arc<JobInsightsService<J, S, A>>) -> Router
where
    J: JobRepository + 'static,
    S: SeekerRepository + 'static,
    A: SessionResolver + 'static,
{
    Router::new()
        .route(
            "/api/v1/jobs/:job_id/insights",
            get(insights_handler::<J, S, A>),
        )
        .with_state(service)
}

pub(crate) async fn insights_handler<J, S, A>(
    State(service): State<Arc<JobInsightsService<J, S, A>>>,
    Path(job_id): Path<String>,
    headers: HeaderMap,
) -> Response
where
    J: JobRepository + 'static,
    S: SeekerRepository + 'static,
    A: SessionResolver + 'static,
{
    let token = session_token(&headers);

    match service.insights(token.as_deref(), &job_id).await {
        Ok(insights) => (StatusCode::OK, Json(insights)).into_response(),
        Err(err) => {
            let status = match &err {
                InsightsError::Unauthorized => StatusCode::UNAUTHORIZED,
                InsightsError::MissingJobId => StatusCode::BAD_REQUEST,
                InsightsError::JobNotFound => StatusCode::NOT_FOUND,
                InsightsError::Forbidden => StatusCode::FORBIDDEN,
                InsightsError::Session(_) | InsightsError::Store(_) => {
                    error!(%err, "error fetching job insights");
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };

            // Internal failures collapse to one fixed message; the taxonomy
            // errors carry their own short text.
            let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
                "Failed to fetch job insights".to_string()
            } else {
                err.to_string()
            };

            (status, Json(json!({ "error": message }))).into_response()
        }
    }
}
