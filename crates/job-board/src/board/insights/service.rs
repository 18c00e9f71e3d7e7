use std::sync::Arc;

use serde::Serialize;

use super::metrics::{
    applicants_with_shared_skill, average_experience_years, skill_match_percent, StatusBreakdown,
};
use crate::auth::{AuthError, SessionResolver};
use crate::board::domain::{JobId, UserId};
use crate::board::repository::{JobRepository, RepositoryError, SeekerRepository};

/// Aggregated statistics for one posting, serialized with the public
/// camelCase contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobInsights {
    pub total_applicants: u64,
    pub applicants_with_similar_skills: u64,
    pub user_skill_match: u8,
    pub average_experience: u32,
    pub application_status: StatusBreakdown,
}

/// Error taxonomy for the insights endpoint; the router maps each variant to
/// its status code.
#[derive(Debug, thiserror::Error)]
pub enum InsightsError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Job ID missing from URL")]
    MissingJobId,
    #[error("Job not found")]
    JobNotFound,
    #[error("You must apply to this job to view insights")]
    Forbidden,
    #[error(transparent)]
    Session(#[from] AuthError),
    #[error(transparent)]
    Store(#[from] RepositoryError),
}

/// Computes insight reports: entitlement check, then the independent reads,
/// then the pure aggregation.
pub struct JobInsightsService<J, S, A> {
    jobs: Arc<J>,
    seekers: Arc<S>,
    sessions: Arc<A>,
}

impl<J, S, A> JobInsightsService<J, S, A>
where
    J: JobRepository + 'static,
    S: SeekerRepository + 'static,
    A: SessionResolver + 'static,
{
    pub fn new(jobs: Arc<J>, seekers: Arc<S>, sessions: Arc<A>) -> Self {
        Self {
            jobs,
            seekers,
            sessions,
        }
    }

    /// Full pipeline for one request: session, id validation, entitlement,
    /// aggregation. Every call re-reads the store; there is no caching.
    pub async fn insights(
        &self,
        session_token: Option<&str>,
        raw_job_id: &str,
    ) -> Result<JobInsights, InsightsError> {
        let caller = self.resolve_caller(session_token).await?;

        let job_id = JobId::parse(raw_job_id).map_err(|_| InsightsError::MissingJobId)?;

        let record = self
            .jobs
            .posting_with_company(&job_id)
            .await?
            .ok_or(InsightsError::JobNotFound)?;

        let is_owner = record.company.owner == caller;
        if !is_owner && !self.jobs.has_application(&caller, &job_id).await? {
            return Err(InsightsError::Forbidden);
        }

        // The remaining reads are independent of each other; issue them
        // concurrently and join before computing.
        let (total, profile, snapshots, counts) = tokio::join!(
            self.jobs.count_applications(&job_id),
            self.seekers.seeker_profile(&caller),
            self.jobs.applicant_snapshots(&job_id),
            self.jobs.status_counts(&job_id),
        );

        let total_applicants = total?;
        let user_skills = profile?.map(|p| p.skills).unwrap_or_default();
        let snapshots = snapshots?;
        let application_status = StatusBreakdown::from_counts(counts?);

        Ok(JobInsights {
            total_applicants,
            applicants_with_similar_skills: applicants_with_shared_skill(&user_skills, &snapshots),
            user_skill_match: skill_match_percent(&user_skills, &record.posting.description),
            average_experience: average_experience_years(&snapshots),
            application_status,
        })
    }

    async fn resolve_caller(&self, token: Option<&str>) -> Result<UserId, InsightsError> {
        let token = token.ok_or(InsightsError::Unauthorized)?;
        self.sessions
            .resolve(token)
            .await?
            .ok_or(InsightsError::Unauthorized)
    }
}
