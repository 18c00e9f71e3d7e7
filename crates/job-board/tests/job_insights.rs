//! End-to-end specifications for the job insights endpoint, driven through
//! the public router so status codes, payload shape, and entitlement rules
//! are validated together.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::Utc;

    use job_board::auth::{AuthError, SessionResolver};
    use job_board::board::domain::{
        ApplicationStatus, Company, CompanyId, JobApplication, JobId, JobPosting,
        JobSeekerProfile, JobStatus, UserId,
    };
    use job_board::board::insights::{insights_router, JobInsightsService};
    use job_board::board::repository::{
        ApplicantSnapshot, JobRepository, PostingWithCompany, RepositoryError, SeekerRepository,
    };

    #[derive(Default)]
    pub(super) struct TestBoard {
        pub(super) companies: Mutex<HashMap<CompanyId, Company>>,
        pub(super) postings: Mutex<HashMap<JobId, JobPosting>>,
        pub(super) applications: Mutex<Vec<JobApplication>>,
        pub(super) seekers: Mutex<HashMap<UserId, JobSeekerProfile>>,
    }

    #[async_trait]
    impl JobRepository for TestBoard {
        async fn posting_with_company(
            &self,
            id: &JobId,
        ) -> Result<Option<PostingWithCompany>, RepositoryError> {
            let posting = self.postings.lock().expect("lock").get(id).cloned();
            let Some(posting) = posting else {
                return Ok(None);
            };
            let company = self
                .companies
                .lock()
                .expect("lock")
                .get(&posting.company_id)
                .cloned()
                .ok_or_else(|| RepositoryError::Unavailable("company missing".into()))?;
            Ok(Some(PostingWithCompany { posting, company }))
        }

        async fn count_applications(&self, job: &JobId) -> Result<u64, RepositoryError> {
            let guard = self.applications.lock().expect("lock");
            Ok(guard.iter().filter(|app| app.job_id == *job).count() as u64)
        }

        async fn has_application(
            &self,
            user: &UserId,
            job: &JobId,
        ) -> Result<bool, RepositoryError> {
            let guard = self.applications.lock().expect("lock");
            Ok(guard
                .iter()
                .any(|app| app.applicant == *user && app.job_id == *job))
        }

        async fn status_counts(
            &self,
            job: &JobId,
        ) -> Result<Vec<(ApplicationStatus, u64)>, RepositoryError> {
            let guard = self.applications.lock().expect("lock");
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
            let applications = self.applications.lock().expect("lock");
            let seekers = self.seekers.lock().expect("lock");
            Ok(applications
                .iter()
                .filter(|app| app.job_id == *job)
                .map(|app| match seekers.get(&app.applicant) {
                    Some(profile) => ApplicantSnapshot {
                        applicant: app.applicant.clone(),
                        skills: profile.skills.clone(),
                        experience_years: Some(profile.experience_years),
                    },
                    None => ApplicantSnapshot {
                        applicant: app.applicant.clone(),
                        skills: Vec::new(),
                        experience_years: None,
                    },
                })
                .collect())
        }
    }

    #[async_trait]
    impl SeekerRepository for TestBoard {
        async fn seeker_profile(
            &self,
            user: &UserId,
        ) -> Result<Option<JobSeekerProfile>, RepositoryError> {
            Ok(self.seekers.lock().expect("lock").get(user).cloned())
        }
    }

    #[derive(Default)]
    pub(super) struct TestSessions {
        pub(super) tokens: Mutex<HashMap<String, UserId>>,
    }

    #[async_trait]
    impl SessionResolver for TestSessions {
        async fn resolve(&self, token: &str) -> Result<Option<UserId>, AuthError> {
            Ok(self.tokens.lock().expect("lock").get(token).cloned())
        }
    }

    pub(super) const OWNER: &str = "user-owner";
    pub(super) const JOB: &str = "job-1";

    /// One company, one active posting with description "go developer
    /// needed", five applications: pending x2, shortlisted x2, rejected x1.
    pub(super) fn seeded_board() -> TestBoard {
        let board = TestBoard::default();
        let company_id = CompanyId("acme".to_string());

        board.companies.lock().expect("lock").insert(
            company_id.clone(),
            Company {
                id: company_id.clone(),
                name: "Acme".to_string(),
                logo: None,
                location: None,
                website: None,
                founded_year: None,
                size: None,
                industry: None,
                x_account: None,
                about: "About Acme".to_string(),
                owner: UserId(OWNER.to_string()),
            },
        );

        board.postings.lock().expect("lock").insert(
            JobId(JOB.to_string()),
            JobPosting {
                id: JobId(JOB.to_string()),
                company_id,
                title: "Backend Engineer".to_string(),
                description: "go developer needed".to_string(),
                location: "Remote".to_string(),
                employment_type: "full-time".to_string(),
                salary: None,
                status: JobStatus::Active,
                created_at: Utc::now(),
            },
        );

        let seeded = [
            ("user-ada", Some((vec!["Go", "SQL"], 6)), ApplicationStatus::Pending),
            ("user-ben", Some((vec!["Rust"], 3)), ApplicationStatus::Pending),
            ("user-chi", Some((vec!["Go", "Kubernetes"], 8)), ApplicationStatus::Shortlisted),
            ("user-dee", None, ApplicationStatus::Shortlisted),
            ("user-eve", Some((vec![], 1)), ApplicationStatus::Rejected),
        ];

        for (index, (user, profile, status)) in seeded.into_iter().enumerate() {
            let applicant = UserId(user.to_string());
            if let Some((skills, years)) = profile {
                board.seekers.lock().expect("lock").insert(
                    applicant.clone(),
                    JobSeekerProfile {
                        user_id: applicant.clone(),
                        skills: skills.into_iter().map(str::to_string).collect(),
                        experience_years: years,
                    },
                );
            }
            board.applications.lock().expect("lock").push(JobApplication {
                id: format!("app-{index}"),
                applicant,
                job_id: JobId(JOB.to_string()),
                status,
            });
        }

        board
    }

    pub(super) fn build_router(board: TestBoard) -> axum::Router {
        let board = Arc::new(board);
        let sessions = TestSessions::default();
        {
            let mut tokens = sessions.tokens.lock().expect("lock");
            tokens.insert("tok-owner".to_string(), UserId(OWNER.to_string()));
            tokens.insert("tok-ada".to_string(), UserId("user-ada".to_string()));
            tokens.insert("tok-eve".to_string(), UserId("user-eve".to_string()));
            tokens.insert("tok-outsider".to_string(), UserId("user-zed".to_string()));
        }
        let service = Arc::new(JobInsightsService::new(
            board.clone(),
            board,
            Arc::new(sessions),
        ));
        insights_router(service)
    }
}

mod endpoint {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get_insights(
        router: &axum::Router,
        job_id: &str,
        token: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().uri(format!("/api/v1/jobs/{job_id}/insights"));
        if let Some(token) = token {
            builder = builder.header(header::COOKIE, format!("session_token={token}"));
        }
        let response = router
            .clone()
            .oneshot(builder.body(Body::empty()).expect("request"))
            .await
            .expect("router dispatch");

        let status = response.status();
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json body");
        (status, payload)
    }

    #[tokio::test]
    async fn missing_session_is_unauthorized() {
        let router = build_router(seeded_board());
        let (status, payload) = get_insights(&router, JOB, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(payload["error"], "Unauthorized");
    }

    #[tokio::test]
    async fn unknown_token_is_unauthorized() {
        let router = build_router(seeded_board());
        let (status, _) = get_insights(&router, JOB, Some("tok-nobody")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn blank_job_id_is_a_bad_request() {
        let router = build_router(seeded_board());
        let (status, payload) = get_insights(&router, "%20", Some("tok-ada")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload["error"], "Job ID missing from URL");
    }

    #[tokio::test]
    async fn unknown_job_is_not_found() {
        let router = build_router(seeded_board());
        let (status, payload) = get_insights(&router, "job-ghost", Some("tok-ada")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(payload["error"], "Job not found");
    }

    #[tokio::test]
    async fn outsider_without_application_is_forbidden() {
        let router = build_router(seeded_board());
        let (status, payload) = get_insights(&router, JOB, Some("tok-outsider")).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(
            payload["error"],
            "You must apply to this job to view insights"
        );
    }

    #[tokio::test]
    async fn owner_without_application_is_entitled() {
        let router = build_router(seeded_board());
        let (status, payload) = get_insights(&router, JOB, Some("tok-owner")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["totalApplicants"], 5);
    }

    #[tokio::test]
    async fn applicant_insights_cover_all_fields() {
        let router = build_router(seeded_board());
        let (status, payload) = get_insights(&router, JOB, Some("tok-ada")).await;
        assert_eq!(status, StatusCode::OK);

        assert_eq!(payload["totalApplicants"], 5);
        // Ada (Go, SQL) overlaps with herself and user-chi (Go).
        assert_eq!(payload["applicantsWithSimilarSkills"], 2);
        // "go" appears in the description, "sql" does not: 1 of 2 skills.
        assert_eq!(payload["userSkillMatch"], 50);
        // Declared experience 6, 3, 8, 1 across four profiles: mean 4.5 rounds to 5.
        assert_eq!(payload["averageExperience"], 5);
        assert_eq!(payload["applicationStatus"]["pending"], 2);
        assert_eq!(payload["applicationStatus"]["reviewing"], 0);
        assert_eq!(payload["applicationStatus"]["shortlisted"], 2);
        assert_eq!(payload["applicationStatus"]["rejected"], 1);
    }

    #[tokio::test]
    async fn caller_without_skills_gets_zero_similarity() {
        let router = build_router(seeded_board());
        let (status, payload) = get_insights(&router, JOB, Some("tok-eve")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["applicantsWithSimilarSkills"], 0);
        assert_eq!(payload["userSkillMatch"], 0);
        assert_eq!(payload["totalApplicants"], 5);
    }

    #[tokio::test]
    async fn repeated_calls_return_identical_results() {
        let router = build_router(seeded_board());
        let (first_status, first) = get_insights(&router, JOB, Some("tok-ada")).await;
        let (second_status, second) = get_insights(&router, JOB, Some("tok-ada")).await;
        assert_eq!(first_status, StatusCode::OK);
        assert_eq!(first_status, second_status);
        assert_eq!(first, second);
    }
}
