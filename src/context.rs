//! The background document the persona's replies are conditioned on.
//!
//! The document is produced by a separate extraction step and read here as
//! plain text. Only an excerpt of it travels with each request: the wire
//! payload carries exactly the first [`MAX_CONTEXT_CHARS`] characters, no
//! matter how large the document is.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Maximum number of characters of the document included in the system
/// instruction of every request.
pub const MAX_CONTEXT_CHARS: usize = 30_000;

/// The context document, loaded once and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextDocument {
    text: String,
}

impl ContextDocument {
    /// Creates an empty document.
    ///
    /// Used when the context file is absent; the conversation proceeds
    /// without background text.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a document from already-loaded text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Loads the document from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| {
            Error::io(format!("failed to read context file {}", path.display()), err)
        })?;
        Ok(Self { text })
    }

    /// Returns the full document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true if the document holds no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the excerpt sent with requests: the first
    /// [`MAX_CONTEXT_CHARS`] characters of the document.
    pub fn excerpt(&self) -> &str {
        match self.text.char_indices().nth(MAX_CONTEXT_CHARS) {
            Some((idx, _)) => &self.text[..idx],
            None => &self.text,
        }
    }
}
