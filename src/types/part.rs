use serde::{Deserialize, Serialize};

/// A single piece of content within a message.
///
/// The wire format allows several part kinds; this crate exchanges text
/// parts only, which is all the `generateContent` conversation surface
/// needs here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// The text of this part.
    pub text: String,
}

impl Part {
    /// Creates a new text part.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl From<String> for Part {
    fn from(text: String) -> Self {
        Part { text }
    }
}

impl From<&str> for Part {
    fn from(text: &str) -> Self {
        Part {
            text: text.to_string(),
        }
    }
}
