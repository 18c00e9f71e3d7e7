use serde::Serialize;

use crate::board::domain::ApplicationStatus;
use crate::board::repository::ApplicantSnapshot;

/// Fixed four-bucket breakdown of application review states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusBreakdown {
    pub pending: u64,
    pub reviewing: u64,
    pub shortlisted: u64,
    pub rejected: u64,
}

impl StatusBreakdown {
    /// Fold grouped counts into the fixed buckets. Unseen buckets stay zero;
    /// the status enumeration is closed, so the fold is total.
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (ApplicationStatus, u64)>,
    {
        let mut breakdown = Self::default();
        for (status, count) in counts {
            match status {
                ApplicationStatus::Pending => breakdown.pending += count,
                ApplicationStatus::Reviewing => breakdown.reviewing += count,
                ApplicationStatus::Shortlisted => breakdown.shortlisted += count,
                ApplicationStatus::Rejected => breakdown.rejected += count,
            }
        }
        breakdown
    }
}

/// Percentage (0-100) of the caller's skills appearing as case-insensitive
/// substrings of the job description. Zero when the caller has no skills.
pub fn skill_match_percent(user_skills: &[String], description: &str) -> u8 {
    if user_skills.is_empty() {
        return 0;
    }

    let description = description.to_lowercase();
    let matching = user_skills
        .iter()
        .filter(|skill| description.contains(&skill.to_lowercase()))
        .count();

    ((matching as f64 / user_skills.len() as f64) * 100.0).round() as u8
}

/// Number of applicants sharing at least one skill tag with the caller.
/// Tags compare by exact equality; an empty caller skill set matches nobody.
pub fn applicants_with_shared_skill(user_skills: &[String], applicants: &[ApplicantSnapshot]) -> u64 {
    if user_skills.is_empty() {
        return 0;
    }

    applicants
        .iter()
        .filter(|snapshot| {
            snapshot
                .skills
                .iter()
                .any(|skill| user_skills.contains(skill))
        })
        .count() as u64
}

/// Rounded mean of declared experience years across applicants that have a
/// seeker profile. Zero when none do.
pub fn average_experience_years(applicants: &[ApplicantSnapshot]) -> u32 {
    let declared: Vec<u32> = applicants
        .iter()
        .filter_map(|snapshot| snapshot.experience_years)
        .collect();

    if declared.is_empty() {
        return 0;
    }

    let total: u64 = declared.iter().map(|years| u64::from(*years)).sum();
    ((total as f64) / (declared.len() as f64)).round() as u32
}
