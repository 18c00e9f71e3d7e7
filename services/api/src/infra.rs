use async_trait::async_trait;
use chrono::{Duration, Utc};
use job_board::auth::{AuthError, SessionResolver};
use job_board::board::domain::{
    ApplicationStatus, Company, CompanyId, JobApplication, JobId, JobPosting, JobSeekerProfile,
    JobStatus, SalaryRange, UserId,
};
use job_board::board::repository::{
    ApplicantSnapshot, CompanyProfileRecord, CompanyRepository, JobRepository,
    PostingWithCompany, RepositoryError, SeekerRepository,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-wide data-access handle. Constructed once at startup and shared
/// via `Arc`; every repository trait is implemented on this one store.
#[derive(Default)]
pub(crate) struct InMemoryBoardStore {
    companies: Mutex<HashMap<CompanyId, Company>>,
    postings: Mutex<HashMap<JobId, JobPosting>>,
    applications: Mutex<Vec<JobApplication>>,
    seekers: Mutex<HashMap<UserId, JobSeekerProfile>>,
}

impl InMemoryBoardStore {
    pub(crate) fn insert_company(&self, company: Company) {
        let mut guard = self.companies.lock().expect("company mutex poisoned");
        guard.insert(company.id.clone(), company);
    }

    pub(crate) fn insert_posting(&self, posting: JobPosting) {
        let mut guard = self.postings.lock().expect("posting mutex poisoned");
        guard.insert(posting.id.clone(), posting);
    }

    /// Applications are unique on (applicant, job); duplicates are rejected.
    pub(crate) fn insert_application(
        &self,
        application: JobApplication,
    ) -> Result<(), RepositoryError> {
        let mut guard = self.applications.lock().expect("application mutex poisoned");
        let duplicate = guard.iter().any(|existing| {
            existing.applicant == application.applicant && existing.job_id == application.job_id
        });
        if duplicate {
            return Err(RepositoryError::Conflict);
        }
        guard.push(application);
        Ok(())
    }

    pub(crate) fn insert_seeker(&self, profile: JobSeekerProfile) {
        let mut guard = self.seekers.lock().expect("seeker mutex poisoned");
        guard.insert(profile.user_id.clone(), profile);
    }
}

#[async_trait]
impl CompanyRepository for InMemoryBoardStore {
    async fn company_with_active_postings(
        &self,
        id: &CompanyId,
    ) -> Result<Option<CompanyProfileRecord>, RepositoryError> {
        let company = {
            let guard = self.companies.lock().expect("company mutex poisoned");
            guard.get(id).cloned()
        };

        let Some(company) = company else {
            return Ok(None);
        };

        let mut active_postings: Vec<JobPosting> = {
            let guard = self.postings.lock().expect("posting mutex poisoned");
            guard
                .values()
                .filter(|posting| posting.company_id == *id && posting.status == JobStatus::Active)
                .cloned()
                .collect()
        };
        active_postings.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(Some(CompanyProfileRecord {
            company,
            active_postings,
        }))
    }
}

#[async_trait]
impl JobRepository for InMemoryBoardStore {
    async fn posting_with_company(
        &self,
        id: &JobId,
    ) -> Result<Option<PostingWithCompany>, RepositoryError> {
        let posting = {
            let guard = self.postings.lock().expect("posting mutex poisoned");
            guard.get(id).cloned()
        };

        let Some(posting) = posting else {
            return Ok(None);
        };

        let company = {
            let guard = self.companies.lock().expect("company mutex poisoned");
            guard.get(&posting.company_id).cloned()
        };

        match company {
            Some(company) => Ok(Some(PostingWithCompany { posting, company })),
            None => Err(RepositoryError::Unavailable(format!(
                "posting {} references a missing company",
                posting.id.0
            ))),
        }
    }

    async fn count_applications(&self, job: &JobId) -> Result<u64, RepositoryError> {
        let guard = self.applications.lock().expect("application mutex poisoned");
        Ok(guard.iter().filter(|app| app.job_id == *job).count() as u64)
    }

    async fn has_application(&self, user: &UserId, job: &JobId) -> Result<bool, RepositoryError> {
        let guard = self.applications.lock().expect("application mutex poisoned");
        Ok(guard
            .iter()
            .any(|app| app.applicant == *user && app.job_id == *job))
    }

    async fn status_counts(
        &self,
        job: &JobId,
    ) -> Result<Vec<(ApplicationStatus, u64)>, RepositoryError> {
        let guard = self.applications.lock().expect("application mutex poisoned");
        let mut counts: HashMap<ApplicationStatus, u64> = HashMap::new();
        for application in guard.iter().filter(|app| app.job_id == *job) {
            *counts.entry(application.status).or_default() += 1;
        }
        Ok(counts.into_iter().collect())
    }

    async fn applicant_snapshots(
        &self,
        job: &JobId,
    ) -> Result<Vec<ApplicantSnapshot>, RepositoryError> {
        let applicants: Vec<UserId> = {
            let guard = self.applications.lock().expect("application mutex poisoned");
            guard
                .iter()
                .filter(|app| app.job_id == *job)
                .map(|app| app.applicant.clone())
                .collect()
        };

        let seekers = self.seekers.lock().expect("seeker mutex poisoned");
        Ok(applicants
            .into_iter()
            .map(|applicant| match seekers.get(&applicant) {
                Some(profile) => ApplicantSnapshot {
                    applicant,
                    skills: profile.skills.clone(),
                    experience_years: Some(profile.experience_years),
                },
                None => ApplicantSnapshot {
                    applicant,
                    skills: Vec::new(),
                    experience_years: None,
                },
            })
            .collect())
    }
}

#[async_trait]
impl SeekerRepository for InMemoryBoardStore {
    async fn seeker_profile(
        &self,
        user: &UserId,
    ) -> Result<Option<JobSeekerProfile>, RepositoryError> {
        let guard = self.seekers.lock().expect("seeker mutex poisoned");
        Ok(guard.get(user).cloned())
    }
}

/// Token-to-user session table standing in for the auth provider.
#[derive(Default)]
pub(crate) struct InMemorySessions {
    tokens: Mutex<HashMap<String, UserId>>,
}

impl InMemorySessions {
    pub(crate) fn issue(&self, token: &str, user: UserId) {
        let mut guard = self.tokens.lock().expect("session mutex poisoned");
        guard.insert(token.to_string(), user);
    }
}

#[async_trait]
impl SessionResolver for InMemorySessions {
    async fn resolve(&self, token: &str) -> Result<Option<UserId>, AuthError> {
        let guard = self.tokens.lock().expect("session mutex poisoned");
        Ok(guard.get(token).cloned())
    }
}

/// Handles the demo fixture exposes so the CLI can address seeded records.
pub(crate) struct DemoFixture {
    pub(crate) company_id: CompanyId,
    pub(crate) job_id: JobId,
    pub(crate) owner_token: &'static str,
    pub(crate) applicant_token: &'static str,
}

/// Seed a small, self-consistent board: one company, two postings (one
/// draft), a handful of applications, and seeker profiles.
pub(crate) fn seed_demo_board(
    store: &InMemoryBoardStore,
    sessions: &InMemorySessions,
) -> DemoFixture {
    let owner = UserId("user-owner".to_string());
    let company_id = CompanyId("northwind".to_string());
    let job_id = JobId("job-backend-1".to_string());
    let now = Utc::now();

    store.insert_company(Company {
        id: company_id.clone(),
        name: "Northwind Labs".to_string(),
        logo: None,
        location: Some("Amsterdam".to_string()),
        website: Some("https://northwind.example".to_string()),
        founded_year: Some(2017),
        size: Some("11-50".to_string()),
        industry: Some("Developer Tooling".to_string()),
        x_account: Some("northwindlabs".to_string()),
        about: "We build build-systems.\n\nFully remote, async-first.".to_string(),
        owner: owner.clone(),
    });

    store.insert_posting(JobPosting {
        id: job_id.clone(),
        company_id: company_id.clone(),
        title: "Senior Backend Engineer".to_string(),
        description: "Looking for a Go developer with SQL and Kubernetes experience.".to_string(),
        location: "Remote (EU)".to_string(),
        employment_type: "full-time".to_string(),
        salary: Some(SalaryRange {
            from: 85_000,
            to: 120_000,
        }),
        status: JobStatus::Active,
        created_at: now,
    });

    store.insert_posting(JobPosting {
        id: JobId("job-frontend-draft".to_string()),
        company_id: company_id.clone(),
        title: "Frontend Engineer".to_string(),
        description: "Unpublished draft.".to_string(),
        location: "Remote (EU)".to_string(),
        employment_type: "full-time".to_string(),
        salary: None,
        status: JobStatus::Draft,
        created_at: now - Duration::days(1),
    });

    let applicants = [
        ("user-ada", vec!["Go", "SQL"], 6, ApplicationStatus::Shortlisted),
        ("user-ben", vec!["Rust"], 3, ApplicationStatus::Pending),
        ("user-chi", vec!["Go", "Kubernetes"], 8, ApplicationStatus::Pending),
        ("user-dee", vec![], 1, ApplicationStatus::Rejected),
    ];

    for (index, (user, skills, years, status)) in applicants.into_iter().enumerate() {
        let applicant = UserId(user.to_string());
        store.insert_seeker(JobSeekerProfile {
            user_id: applicant.clone(),
            skills: skills.into_iter().map(str::to_string).collect(),
            experience_years: years,
        });
        store
            .insert_application(JobApplication {
                id: format!("app-{index}"),
                applicant,
                job_id: job_id.clone(),
                status,
            })
            .expect("seed applications are unique");
    }

    sessions.issue("demo-owner-token", owner);
    sessions.issue("demo-applicant-token", UserId("user-ada".to_string()));

    DemoFixture {
        company_id,
        job_id,
        owner_token: "demo-owner-token",
        applicant_token: "demo-applicant-token",
    }
}
