//! Job-board features: shared entities, data-access seams, the company
//! profile page, and the job insights endpoint.

pub mod domain;
pub mod insights;
pub mod profile;
pub mod repository;
