//! Teamtailor API client.
//!
//! A small, read-only client for the candidates resource of the Teamtailor
//! REST API. Each call is one authenticated GET; nothing is cached or retried.

mod client;
mod error;
mod types;

pub use client::{API_VERSION, TeamtailorClient};
pub use error::{ApiError, ApiResult};
pub use types::{Candidate, CandidateAttributes, CandidateFilter, Document, ListCandidatesParams};
