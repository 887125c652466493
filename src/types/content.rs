use serde::{Deserialize, Serialize};

use crate::types::{Part, Role};

/// One turn of a conversation: a role plus its ordered parts.
///
/// The `contents` array of a request is a sequence of these, oldest first.
/// Candidates in a response carry the model's reply in the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// Who authored this turn.
    ///
    /// Abbreviated response payloads can omit the role; deserialization
    /// tolerates that, and the session never reads it off a reply anyway.
    #[serde(default)]
    pub role: Role,

    /// The parts of this turn, in order.
    ///
    /// Safety-truncated candidates can arrive with no parts at all.
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// Creates a user turn with a single text part.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            parts: vec![Part::new(text)],
        }
    }

    /// Creates a model turn with a single text part.
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            parts: vec![Part::new(text)],
        }
    }

    /// Returns the text of the first part, if there is one.
    pub fn first_text(&self) -> Option<&str> {
        self.parts.first().map(|part| part.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_turn_serialization() {
        let content = Content::user("Hello");
        let json = serde_json::to_string(&content).unwrap();
        assert_eq!(json, r#"{"role":"user","parts":[{"text":"Hello"}]}"#);
    }

    #[test]
    fn model_turn_serialization() {
        let content = Content::model("Hi, I'm Anne.");
        let json = serde_json::to_string(&content).unwrap();
        assert_eq!(json, r#"{"role":"model","parts":[{"text":"Hi, I'm Anne."}]}"#);
    }

    #[test]
    fn deserialize_without_parts() {
        let content: Content = serde_json::from_str(r#"{"role":"model"}"#).unwrap();
        assert_eq!(content.role, Role::Model);
        assert!(content.parts.is_empty());
        assert!(content.first_text().is_none());
    }

    #[test]
    fn first_text() {
        let content = Content::model("one");
        assert_eq!(content.first_text(), Some("one"));
    }
}
