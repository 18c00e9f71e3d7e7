//! Server-rendered company profile: header, about/jobs tabs, and a metadata
//! sidebar, listing only active postings.

pub mod page;
pub mod router;
pub mod service;

pub use page::CompanyPage;
pub use router::company_router;
pub use service::{CompanyProfileService, ProfileError};
