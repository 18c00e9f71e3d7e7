//! Applicant statistics for a single job posting: totals, skill-overlap
//! heuristics, and a status breakdown, gated on ownership or a prior
//! application.

pub mod metrics;
pub mod router;
pub mod service;

pub use metrics::StatusBreakdown;
pub use router::insights_router;
pub use service::{InsightsError, JobInsights, JobInsightsService};
