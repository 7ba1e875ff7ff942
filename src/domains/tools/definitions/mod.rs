//! Tool definitions module.
//!
//! Each tool is defined in its own file, grouped by upstream resource.

pub mod candidates;

pub use candidates::{
    GetCandidateTool, GetCandidateToolParams, ListCandidatesTool, ListCandidatesToolParams,
};
