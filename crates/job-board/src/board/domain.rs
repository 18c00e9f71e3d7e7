use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for registered companies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyId(pub String);

/// Identifier wrapper for job postings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

impl JobId {
    /// Validate a path-supplied job id. Typed routing already guarantees the
    /// segment exists; blank ids still map to the bad-request contract.
    pub fn parse(raw: &str) -> Result<Self, InvalidJobId> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidJobId);
        }
        Ok(Self(trimmed.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidJobId;

/// Identifier wrapper for platform users (company owners and job seekers alike).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

/// A company profile as stored, including the owning user for entitlement checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub logo: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub founded_year: Option<u16>,
    pub size: Option<String>,
    pub industry: Option<String>,
    pub x_account: Option<String>,
    pub about: String,
    pub owner: UserId,
}

/// Lifecycle of a posting. Only `Active` postings are publicly listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Draft,
    Active,
    Expired,
}

impl JobStatus {
    pub const fn label(self) -> &'static str {
        match self {
            JobStatus::Draft => "draft",
            JobStatus::Active => "active",
            JobStatus::Expired => "expired",
        }
    }
}

/// Advertised salary band in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub from: u32,
    pub to: u32,
}

/// A job posting owned by a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: JobId,
    pub company_id: CompanyId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub employment_type: String,
    pub salary: Option<SalaryRange>,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
}

/// Review state of an application. The enumeration is closed: the store can
/// only hold these four values, so the insights breakdown is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Reviewing,
    Shortlisted,
    Rejected,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Reviewing => "reviewing",
            ApplicationStatus::Shortlisted => "shortlisted",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::Pending,
        ApplicationStatus::Reviewing,
        ApplicationStatus::Shortlisted,
        ApplicationStatus::Rejected,
    ];
}

/// One user's application to one posting. Unique on (applicant, job).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: String,
    pub applicant: UserId,
    pub job_id: JobId,
    pub status: ApplicationStatus,
}

/// Skill tags and declared experience for a job seeker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSeekerProfile {
    pub user_id: UserId,
    pub skills: Vec<String>,
    pub experience_years: u32,
}
