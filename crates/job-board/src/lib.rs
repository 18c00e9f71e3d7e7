//! Core crate for the job-board service: domain model, data-access traits,
//! and the two HTTP features (company profile page, job insights API).
//! Storage and session providers are supplied by the API service crate.

pub mod auth;
pub mod board;
pub mod config;
pub mod error;
pub mod telemetry;
