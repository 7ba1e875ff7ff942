//! Candidate tools module.
//!
//! Tools backed by the Teamtailor candidates endpoints:
//! - `list`: list and filter candidates (one page per call)
//! - `get`: fetch a single candidate by id

pub mod common;
pub mod get;
pub mod list;

pub use get::{GetCandidateTool, GetCandidateToolParams};
pub use list::{ListCandidatesTool, ListCandidatesToolParams};
