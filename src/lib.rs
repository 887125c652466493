// Public modules
pub mod chat;
pub mod client;
pub mod client_logger;
pub mod context;
pub mod credentials;
pub mod error;
pub mod observability;
pub mod types;

// Re-exports
pub use client::Gemini;
pub use client_logger::ClientLogger;
pub use context::{ContextDocument, MAX_CONTEXT_CHARS};
pub use credentials::{CREDENTIAL_KEY, CredentialPrompt, CredentialStore};
pub use error::{Error, Result};
pub use types::*;
