use serde::{Deserialize, Serialize};

/// Token accounting for one request/response cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Tokens consumed by the prompt (system instruction + contents).
    #[serde(default)]
    pub prompt_token_count: u64,

    /// Tokens produced across all candidates. Absent when generation was
    /// blocked before any candidate was produced.
    #[serde(default)]
    pub candidates_token_count: u64,

    /// Total tokens for the cycle.
    #[serde(default)]
    pub total_token_count: u64,
}
