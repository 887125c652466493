use serde::{Deserialize, Serialize};

use crate::types::HarmCategory;

/// The probability that a piece of content falls in a harm category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HarmProbability {
    /// Probability is unspecified.
    #[serde(rename = "HARM_PROBABILITY_UNSPECIFIED")]
    Unspecified,

    /// Negligible chance of harm.
    #[serde(rename = "NEGLIGIBLE")]
    Negligible,

    /// Low chance of harm.
    #[serde(rename = "LOW")]
    Low,

    /// Medium chance of harm.
    #[serde(rename = "MEDIUM")]
    Medium,

    /// High chance of harm.
    #[serde(rename = "HIGH")]
    High,
}

/// A safety assessment the API attaches to prompts and candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyRating {
    /// The category being rated.
    pub category: HarmCategory,

    /// The assessed probability of harm in that category.
    pub probability: HarmProbability,

    /// Whether this rating caused the content to be blocked.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub blocked: bool,
}
