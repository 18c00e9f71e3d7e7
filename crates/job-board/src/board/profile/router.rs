use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tracing::error;

use super::page::{CompanyPage, NotFoundPage};
use super::service::{CompanyProfileService, ProfileError};
use crate::board::domain::CompanyId;
use crate::board::repository::CompanyRepository;

/// Router builder for the server-rendered company profile page.
pub fn company_router<R>(service: Arc<CompanyProfileService<R>>) -> Router
where
    R: CompanyRepository + 'static,
{
    Router::new()
        .route("/companies/:company_id", get(company_page_handler::<R>))
        .with_state(service)
}

pub(crate) async fn company_page_handler<R>(
    State(service): State<Arc<CompanyProfileService<R>>>,
    Path(company_id): Path<String>,
) -> Response
where
    R: CompanyRepository + 'static,
{
    match service.profile(&CompanyId(company_id)).await {
        Ok(record) => match CompanyPage::from_record(&record).render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                error!(%err, "company page template failed to render");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        },
        Err(ProfileError::NotFound) => not_found_page(),
        Err(ProfileError::Store(err)) => {
            error!(%err, "error loading company profile");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn not_found_page() -> Response {
    match NotFoundPage.render() {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}
