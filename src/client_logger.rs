//! Logging trait for Gemini client operations.
//!
//! This module provides the [`ClientLogger`] trait that allows users to
//! capture and log all API interactions passing through the [`Gemini`]
//! client: outbound requests, response bodies, and errors.
//!
//! [`Gemini`]: crate::Gemini

use crate::error::Error;
use crate::types::{GenerateContentRequest, GenerateContentResponse, Model};

/// A trait for logging Gemini client operations.
///
/// Implement this trait to capture and record every API interaction for
/// diagnostics. Errors reported here have already been mapped into the
/// crate's [`Error`] taxonomy.
///
/// # Example
///
/// ```rust,ignore
/// use geminius::{ClientLogger, Error, GenerateContentRequest, GenerateContentResponse, Model};
/// use std::sync::Mutex;
///
/// struct FileLogger {
///     file: Mutex<std::fs::File>,
/// }
///
/// impl ClientLogger for FileLogger {
///     fn log_request(&self, model: &Model, request: &GenerateContentRequest) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "Request to {}: {}", model, serde_json::to_string(request).unwrap()).unwrap();
///     }
///
///     fn log_response(&self, response: &GenerateContentResponse) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "Response: {}", serde_json::to_string(response).unwrap()).unwrap();
///     }
///
///     fn log_error(&self, error: &Error) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "Error: {}", error).unwrap();
///     }
/// }
/// ```
pub trait ClientLogger: Send + Sync {
    /// Log an outbound request just before it is sent.
    fn log_request(&self, model: &Model, request: &GenerateContentRequest);

    /// Log a parsed response from a successful call.
    fn log_response(&self, response: &GenerateContentResponse);

    /// Log a failed call: transport failures, remote error payloads, and
    /// malformed response bodies alike.
    fn log_error(&self, error: &Error);
}
