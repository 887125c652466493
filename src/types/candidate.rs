use serde::{Deserialize, Serialize};

use crate::types::{Content, FinishReason, SafetyRating};

/// One generated reply in a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The generated content. Absent when the candidate was suppressed
    /// before any text was produced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,

    /// Why generation stopped for this candidate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<FinishReason>,

    /// Safety assessments of the generated content.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub safety_ratings: Vec<SafetyRating>,

    /// Position of this candidate in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
}

impl Candidate {
    /// Returns the text of the candidate's first part, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.content.as_ref().and_then(|content| content.first_text())
    }
}
