//! Domains module containing business logic organized by bounded contexts.
//!
//! The server exposes a single domain: MCP tools backed by the Teamtailor API.

pub mod tools;
