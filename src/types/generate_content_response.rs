use serde::{Deserialize, Serialize};

use crate::types::{Candidate, PromptFeedback, UsageMetadata};

/// The response body of a successful `generateContent` call.
///
/// A success at the HTTP level still has three shapes worth telling apart:
/// candidates with text, candidates suppressed by safety filtering, and a
/// prompt blocked outright (feedback only, no candidates at all).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Generated replies. Absent or empty when the prompt was blocked.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub candidates: Vec<Candidate>,

    /// Feedback about the prompt, present when it was assessed or blocked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_feedback: Option<PromptFeedback>,

    /// Token accounting for the cycle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<UsageMetadata>,

    /// The concrete model version that served the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

impl GenerateContentResponse {
    /// Returns the text of the first candidate's first part.
    ///
    /// `None` covers every silent shape at once: no candidates, a candidate
    /// without content, and a candidate whose content has no parts.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates.first().and_then(|candidate| candidate.first_text())
    }

    /// Returns true if the response carries no candidates at all, which is
    /// how a prompt-level safety block presents.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
