//! Teamtailor API data model.
//!
//! The upstream service follows the JSON:API convention: every payload is
//! wrapped in a top-level `data` member, and resource fields live under
//! `attributes` with kebab-case names.

use std::num::NonZeroU32;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON:API top-level document.
#[derive(Debug, Clone, Deserialize)]
pub struct Document<T> {
    pub data: T,
}

/// A job applicant record, exactly as upstream sent it.
///
/// The record is kept as raw JSON so it serializes back to the same JSON
/// value: explicit `null` attributes, unmodelled members (`links`,
/// `relationships`, ...) and values of unexpected types all survive. Only the
/// surrounding `data` envelope is checked when a response is decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Candidate(Value);

impl Candidate {
    /// The record's `id`, when it is a string.
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// Typed view of `attributes`.
    ///
    /// Returns `None` when the record has no attributes object or when a
    /// modelled field has an unexpected type. The record itself is untouched.
    pub fn attributes(&self) -> Option<CandidateAttributes> {
        self.0
            .get("attributes")
            .filter(|attributes| attributes.is_object())
            .and_then(|attributes| CandidateAttributes::deserialize(attributes).ok())
    }
}

/// Candidate attributes as exposed by the read endpoints.
///
/// Every field is optional; write-only and create-only attributes of the
/// upstream schema are not modelled. Explicit `null` values read as `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CandidateAttributes {
    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub updated_at: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub connected: Option<bool>,

    #[serde(default)]
    pub consent_future_jobs_at: Option<String>,

    #[serde(default)]
    pub facebook_id: Option<String>,

    /// HTML rendering of the Facebook profile.
    #[serde(default)]
    pub facebook_profile: Option<String>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub internal: Option<bool>,

    #[serde(default)]
    pub last_name: Option<String>,

    /// HTML rendering of the LinkedIn profile.
    #[serde(default)]
    pub linkedin_profile: Option<String>,

    #[serde(default)]
    pub linkedin_uid: Option<String>,

    #[serde(default)]
    pub linkedin_url: Option<String>,

    /// Signed, short-lived URL to the uploaded resume.
    #[serde(default)]
    pub original_resume: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub picture: Option<String>,

    #[serde(default)]
    pub pitch: Option<String>,

    #[serde(default)]
    pub referring_site: Option<String>,

    #[serde(default)]
    pub referring_url: Option<String>,

    /// Always present upstream.
    #[serde(default)]
    pub referred: Option<bool>,

    #[serde(default)]
    pub resume: Option<String>,

    #[serde(default)]
    pub sourced: Option<bool>,

    #[serde(default)]
    pub tags: Option<Vec<String>>,

    #[serde(default)]
    pub unsubscribed: Option<bool>,
}

/// Timestamp bounds for filtering candidates.
///
/// Values are ISO-8601 strings and are forwarded upstream untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidateFilter {
    /// Only candidates created at or after this time.
    #[schemars(description = "ISO-8601 timestamp: only candidates created after this time")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_after: Option<String>,

    /// Only candidates created at or before this time.
    #[schemars(description = "ISO-8601 timestamp: only candidates created before this time")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_before: Option<String>,

    /// Only candidates updated at or after this time.
    #[schemars(description = "ISO-8601 timestamp: only candidates updated after this time")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_after: Option<String>,

    /// Only candidates updated at or before this time.
    #[schemars(description = "ISO-8601 timestamp: only candidates updated before this time")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_before: Option<String>,
}

impl CandidateFilter {
    /// Query parameters for the supplied bounds, in a stable order.
    ///
    /// Missing and empty bounds produce no parameter.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("filter[created-at][from]", &self.created_after),
            ("filter[created-at][to]", &self.created_before),
            ("filter[updated-at][from]", &self.updated_after),
            ("filter[updated-at][to]", &self.updated_before),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (key, v))
        })
        .collect()
    }
}

/// Parameters for listing candidates.
///
/// Pagination values are `NonZeroU32` so that zero can never be sent upstream;
/// `None` means "let the API pick its default".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListCandidatesParams {
    pub page: Option<NonZeroU32>,
    pub per_page: Option<NonZeroU32>,
    pub filter: Option<CandidateFilter>,
}

impl ListCandidatesParams {
    /// Create empty parameters (no pagination, no filter).
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a specific page. Zero clears the value.
    pub fn page(mut self, page: u32) -> Self {
        self.page = NonZeroU32::new(page);
        self
    }

    /// Request a specific page size. Zero clears the value.
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = NonZeroU32::new(per_page);
        self
    }

    /// Restrict the listing with timestamp bounds.
    pub fn filter(mut self, filter: CandidateFilter) -> Self {
        self.filter = Some(filter);
        self
    }
}
