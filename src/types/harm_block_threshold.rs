use serde::{Deserialize, Serialize};

/// The probability level at which a harm category blocks content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HarmBlockThreshold {
    /// Threshold is unspecified; the API applies its default.
    #[serde(rename = "HARM_BLOCK_THRESHOLD_UNSPECIFIED")]
    Unspecified,

    /// Block when the harm probability is low, medium, or high.
    #[serde(rename = "BLOCK_LOW_AND_ABOVE")]
    BlockLowAndAbove,

    /// Block when the harm probability is medium or high.
    #[serde(rename = "BLOCK_MEDIUM_AND_ABOVE")]
    BlockMediumAndAbove,

    /// Block only when the harm probability is high.
    #[serde(rename = "BLOCK_ONLY_HIGH")]
    BlockOnlyHigh,

    /// Never block on this category.
    #[serde(rename = "BLOCK_NONE")]
    BlockNone,
}
