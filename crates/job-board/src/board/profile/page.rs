use askama::Template;

use crate::board::domain::SalaryRange;
use crate::board::repository::CompanyProfileRecord;

/// Server-rendered company profile page. All display fallbacks are resolved
/// here so the template only prints.
#[derive(Template)]
#[template(path = "company_profile.html")]
pub struct CompanyPage {
    pub company_id: String,
    pub name: String,
    pub logo: Option<String>,
    pub location_label: String,
    pub website: Option<String>,
    pub website_display: Option<String>,
    pub founded_year: Option<u16>,
    pub size: Option<String>,
    pub x_account: Option<String>,
    pub about: String,
    pub industry_label: String,
    pub size_label: String,
    pub founded_label: String,
    pub location_sidebar_label: String,
    pub postings: Vec<PostingCard>,
}

/// One row in the jobs tab.
pub struct PostingCard {
    pub id: String,
    pub title: String,
    pub location: String,
    pub employment_type: String,
    pub salary_label: Option<String>,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundPage;

impl CompanyPage {
    pub fn from_record(record: &CompanyProfileRecord) -> Self {
        let company = &record.company;

        Self {
            company_id: company.id.0.clone(),
            name: company.name.clone(),
            logo: company.logo.clone(),
            location_label: company
                .location
                .clone()
                .unwrap_or_else(|| "Remote".to_string()),
            website: company.website.clone(),
            website_display: company.website.as_deref().map(strip_scheme),
            founded_year: company.founded_year,
            size: company.size.clone(),
            x_account: company.x_account.clone(),
            about: company.about.clone(),
            industry_label: or_not_specified(company.industry.as_deref()),
            size_label: or_not_specified(company.size.as_deref()),
            founded_label: company
                .founded_year
                .map(|year| year.to_string())
                .unwrap_or_else(|| "Not specified".to_string()),
            location_sidebar_label: or_not_specified(company.location.as_deref()),
            postings: record
                .active_postings
                .iter()
                .map(|posting| PostingCard {
                    id: posting.id.0.clone(),
                    title: posting.title.clone(),
                    location: posting.location.clone(),
                    employment_type: posting.employment_type.clone(),
                    salary_label: posting.salary.as_ref().map(salary_label),
                })
                .collect(),
        }
    }
}

fn or_not_specified(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => "Not specified".to_string(),
    }
}

fn strip_scheme(url: &str) -> String {
    url.trim_start_matches("https://")
        .trim_start_matches("http://")
        .to_string()
}

/// "$1,000 - $2,000" with thousands separators.
fn salary_label(range: &SalaryRange) -> String {
    format!(
        "${} - ${}",
        group_thousands(range.from),
        group_thousands(range.to)
    )
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
