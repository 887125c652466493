use serde::{Deserialize, Serialize};

use crate::types::Part;

/// The system instruction sent with a request.
///
/// Unlike a conversation turn, the system instruction carries no role; it
/// is a bare list of parts holding the steering text for the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInstruction {
    /// The parts of the instruction, in order.
    pub parts: Vec<Part>,
}

impl SystemInstruction {
    /// Creates a system instruction with a single text part.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part::new(text)],
        }
    }
}

impl From<String> for SystemInstruction {
    fn from(text: String) -> Self {
        SystemInstruction::new(text)
    }
}

impl From<&str> for SystemInstruction {
    fn from(text: &str) -> Self {
        SystemInstruction::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization() {
        let instruction = SystemInstruction::new("Stay in character.");
        let json = serde_json::to_string(&instruction).unwrap();
        assert_eq!(json, r#"{"parts":[{"text":"Stay in character."}]}"#);
    }
}
