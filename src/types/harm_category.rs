use serde::{Deserialize, Serialize};

/// A category of potentially harmful content the API can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HarmCategory {
    /// Harassment content.
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    Harassment,

    /// Hate speech and content.
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,

    /// Sexually explicit content.
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,

    /// Dangerous content.
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
}

impl HarmCategory {
    /// All categories a safety policy can configure, in wire order.
    pub fn all() -> [HarmCategory; 4] {
        [
            HarmCategory::Harassment,
            HarmCategory::HateSpeech,
            HarmCategory::SexuallyExplicit,
            HarmCategory::DangerousContent,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization() {
        assert_eq!(
            serde_json::to_string(&HarmCategory::Harassment).unwrap(),
            r#""HARM_CATEGORY_HARASSMENT""#
        );
        assert_eq!(
            serde_json::to_string(&HarmCategory::DangerousContent).unwrap(),
            r#""HARM_CATEGORY_DANGEROUS_CONTENT""#
        );
    }

    #[test]
    fn deserialization() {
        let category: HarmCategory =
            serde_json::from_str(r#""HARM_CATEGORY_HATE_SPEECH""#).unwrap();
        assert_eq!(category, HarmCategory::HateSpeech);
    }
}
