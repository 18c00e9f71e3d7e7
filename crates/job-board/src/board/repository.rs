use async_trait::async_trait;

use super::domain::{
    ApplicationStatus, Company, CompanyId, JobId, JobPosting, JobSeekerProfile, UserId,
};

/// Error enumeration shared by every store operation.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// A company joined with its publicly visible postings.
///
/// Implementations must return only `Active` postings, ordered newest-first.
#[derive(Debug, Clone)]
pub struct CompanyProfileRecord {
    pub company: Company,
    pub active_postings: Vec<JobPosting>,
}

/// A posting joined with its owning company, for entitlement checks.
#[derive(Debug, Clone)]
pub struct PostingWithCompany {
    pub posting: JobPosting,
    pub company: Company,
}

/// Per-application view of the applicant's seeker data. Applicants without a
/// profile surface with empty skills and no declared experience.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicantSnapshot {
    pub applicant: UserId,
    pub skills: Vec<String>,
    pub experience_years: Option<u32>,
}

/// Read access for the company profile page.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn company_with_active_postings(
        &self,
        id: &CompanyId,
    ) -> Result<Option<CompanyProfileRecord>, RepositoryError>;
}

/// Read access for postings and their applications.
#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn posting_with_company(
        &self,
        id: &JobId,
    ) -> Result<Option<PostingWithCompany>, RepositoryError>;

    async fn count_applications(&self, job: &JobId) -> Result<u64, RepositoryError>;

    async fn has_application(&self, user: &UserId, job: &JobId) -> Result<bool, RepositoryError>;

    /// Group-by-status counts. Statuses with no applications may be omitted.
    async fn status_counts(
        &self,
        job: &JobId,
    ) -> Result<Vec<(ApplicationStatus, u64)>, RepositoryError>;

    async fn applicant_snapshots(&self, job: &JobId)
        -> Result<Vec<ApplicantSnapshot>, RepositoryError>;
}

/// Read access for job-seeker profiles.
#[async_trait]
pub trait SeekerRepository: Send + Sync {
    async fn seeker_profile(
        &self,
        user: &UserId,
    ) -> Result<Option<JobSeekerProfile>, RepositoryError>;
}
