use std::sync::Arc;

use crate::board::domain::CompanyId;
use crate::board::repository::{CompanyProfileRecord, CompanyRepository, RepositoryError};

/// Error taxonomy for the profile page; only one branch beyond store failure.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Company not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] RepositoryError),
}

/// Single synchronous read per render: the company with its active postings.
pub struct CompanyProfileService<R> {
    companies: Arc<R>,
}

impl<R> CompanyProfileService<R>
where
    R: CompanyRepository + 'static,
{
    pub fn new(companies: Arc<R>) -> Self {
        Self { companies }
    }

    pub async fn profile(&self, id: &CompanyId) -> Result<CompanyProfileRecord, ProfileError> {
        self.companies
            .company_with_active_postings(id)
            .await?
            .ok_or(ProfileError::NotFound)
    }
}
