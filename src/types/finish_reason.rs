use serde::{Deserialize, Serialize};

/// Why a candidate stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinishReason {
    /// Reason is unspecified.
    #[serde(rename = "FINISH_REASON_UNSPECIFIED")]
    Unspecified,

    /// Natural stop point or stop sequence reached.
    #[serde(rename = "STOP")]
    Stop,

    /// The maximum output token limit was reached.
    #[serde(rename = "MAX_TOKENS")]
    MaxTokens,

    /// The candidate was flagged for safety.
    #[serde(rename = "SAFETY")]
    Safety,

    /// The candidate was flagged for recitation of training data.
    #[serde(rename = "RECITATION")]
    Recitation,

    /// Some other reason.
    #[serde(rename = "OTHER")]
    Other,
}
