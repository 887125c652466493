use serde::{Deserialize, Serialize};

use crate::types::{Content, GenerationConfig, SafetySetting, SystemInstruction};

/// The request body for a `generateContent` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Steering text applied to the whole conversation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<SystemInstruction>,

    /// The conversation so far, oldest turn first.
    pub contents: Vec<Content>,

    /// Per-category safety thresholds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_settings: Option<Vec<SafetySetting>>,

    /// Sampling and length parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Creates a request from a conversation, with no system instruction,
    /// safety settings, or generation config.
    pub fn new(contents: Vec<Content>) -> Self {
        Self {
            system_instruction: None,
            contents,
            safety_settings: None,
            generation_config: None,
        }
    }

    /// Sets the system instruction.
    pub fn with_system_instruction(mut self, instruction: impl Into<SystemInstruction>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    /// Sets the safety settings.
    pub fn with_safety_settings(mut self, settings: Vec<SafetySetting>) -> Self {
        self.safety_settings = Some(settings);
        self
    }

    /// Sets the generation config.
    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_request_serialization() {
        let request = GenerateContentRequest::new(vec![Content::user("Hello")]);
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"contents":[{"role":"user","parts":[{"text":"Hello"}]}]}"#
        );
    }

    #[test]
    fn full_request_field_names() {
        let request = GenerateContentRequest::new(vec![Content::user("Hi")])
            .with_system_instruction("Be brief.")
            .with_safety_settings(SafetySetting::block_only_high());
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("systemInstruction").is_some());
        assert!(value.get("safetySettings").is_some());
        assert_eq!(value["safetySettings"].as_array().unwrap().len(), 4);
        assert!(value.get("generationConfig").is_none());
    }

    #[test]
    fn request_preserves_turn_order() {
        let request = GenerateContentRequest::new(vec![
            Content::user("one"),
            Content::model("two"),
            Content::user("three"),
        ]);
        let value = serde_json::to_value(&request).unwrap();
        let contents = value["contents"].as_array().unwrap();
        assert_eq!(contents[0]["parts"][0]["text"], "one");
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[2]["parts"][0]["text"], "three");
    }
}
