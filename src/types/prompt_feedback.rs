use serde::{Deserialize, Serialize};

use crate::types::SafetyRating;

/// Why a prompt was blocked before generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockReason {
    /// Reason is unspecified.
    #[serde(rename = "BLOCK_REASON_UNSPECIFIED")]
    Unspecified,

    /// The prompt was blocked for safety.
    #[serde(rename = "SAFETY")]
    Safety,

    /// The prompt was blocked for another reason.
    #[serde(rename = "OTHER")]
    Other,
}

/// Feedback about the prompt itself, returned when the API refuses to
/// generate any candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Why the prompt was blocked, if it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_reason: Option<BlockReason>,

    /// Safety assessments of the prompt.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub safety_ratings: Vec<SafetyRating>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HarmCategory, HarmProbability};

    #[test]
    fn deserialize_block_feedback() {
        let json = r#"{"blockReason":"SAFETY","safetyRatings":[{"category":"HARM_CATEGORY_DANGEROUS_CONTENT","probability":"HIGH"}]}"#;
        let feedback: PromptFeedback = serde_json::from_str(json).unwrap();
        assert_eq!(feedback.block_reason, Some(BlockReason::Safety));
        assert_eq!(feedback.safety_ratings.len(), 1);
        assert_eq!(
            feedback.safety_ratings[0].category,
            HarmCategory::DangerousContent
        );
        assert_eq!(feedback.safety_ratings[0].probability, HarmProbability::High);
    }

    #[test]
    fn deserialize_ratings_only() {
        let json = r#"{"safetyRatings":[]}"#;
        let feedback: PromptFeedback = serde_json::from_str(json).unwrap();
        assert!(feedback.block_reason.is_none());
    }
}
