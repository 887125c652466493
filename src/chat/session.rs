//! Core chat session management.
//!
//! This module provides the [`ChatSession`] struct, which owns the whole
//! of one conversation: the ordered history, the resolved credential and
//! client, the context document, and the configuration. One call to
//! [`ChatSession::submit`] is one turn: the user's message is appended,
//! a single request is issued, and the reply or the failure is rendered.
//! Turns cannot overlap; `submit` holds the session exclusively until the
//! turn reaches a terminal state.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{from_reader, to_writer_pretty};

use crate::chat::config::ChatConfig;
use crate::chat::render::Renderer;
use crate::client::Gemini;
use crate::context::ContextDocument;
use crate::credentials::{CredentialPrompt, CredentialStore};
use crate::error::{Error, Result};
use crate::observability::{
    CHAT_CREDENTIAL_PROMPTS, CHAT_SILENT_TURNS, CHAT_TURN_FAILURES, CHAT_TURNS,
};
use crate::types::{
    Content, GenerateContentRequest, GenerateContentResponse, Model, SafetySetting, UsageMetadata,
};

/// A chat session that manages conversation state and API interactions.
///
/// The session is constructed empty: no history, no resolved credential.
/// The credential is resolved lazily on the first turn, from the store
/// if present and otherwise through the [`CredentialPrompt`], then reused
/// for every turn after that.
pub struct ChatSession {
    client: Option<Gemini>,
    store: CredentialStore,
    config: ChatConfig,
    context: ContextDocument,
    history: Vec<Content>,
    usage_totals: UsageMetadata,
    last_turn_usage: Option<UsageMetadata>,
    request_count: u64,
}

/// Aggregated stats for a chat session.
#[derive(Debug, Clone)]
pub struct SessionStats {
    /// The model used for the session.
    pub model: Model,
    /// The number of history entries in the conversation.
    pub message_count: usize,
    /// The number of characters in the loaded context document.
    pub context_chars: usize,
    /// The maximum tokens per reply, if set.
    pub max_output_tokens: Option<u32>,
    /// The sampling temperature, if set.
    pub temperature: Option<f32>,
    /// The history cap, if set.
    pub history_limit: Option<usize>,
    /// The auto-save transcript path, if set.
    pub transcript_path: Option<PathBuf>,
    /// Total prompt tokens across all requests.
    pub total_prompt_tokens: u64,
    /// Total candidate tokens across all requests.
    pub total_candidate_tokens: u64,
    /// Total number of API requests made.
    pub total_requests: u64,
    /// Token usage of the last turn, if the API reported it.
    pub last_turn_usage: Option<UsageMetadata>,
}

impl ChatSession {
    /// Creates a new, empty session.
    pub fn new(config: ChatConfig, store: CredentialStore, context: ContextDocument) -> Self {
        Self {
            client: None,
            store,
            config,
            context,
            history: Vec::new(),
            usage_totals: UsageMetadata::default(),
            last_turn_usage: None,
            request_count: 0,
        }
    }

    /// Runs one turn: append the user's message, issue a request, render
    /// the reply or the failure.
    ///
    /// Behavior at the edges:
    /// - Whitespace-only input is silently ignored: no history mutation,
    ///   no request.
    /// - With no credential resolved yet, the store is consulted and then
    ///   the prompt; declining leaves history untouched and aborts the
    ///   turn with a visible notice.
    /// - Every failure is terminal for the turn. Nothing is retried, and
    ///   the user's message stays in history so a resubmission continues
    ///   the same conversation.
    ///
    /// # Errors
    ///
    /// Returns an error when the credential store cannot be read or
    /// written, or when a transcript auto-save fails. Request failures are
    /// rendered, not returned.
    pub async fn submit(
        &mut self,
        input: &str,
        credentials: &mut dyn CredentialPrompt,
        renderer: &mut dyn Renderer,
    ) -> Result<()> {
        let text = input.trim();
        if text.is_empty() {
            return Ok(());
        }

        let Some(client) = self.ensure_client(credentials).await? else {
            renderer.print_error("API Key required.");
            return Ok(());
        };

        CHAT_TURNS.click();
        renderer.show_composing(&self.config.persona.composing_notice());
        self.history.push(Content::user(text));

        let request = self.build_request();
        self.request_count += 1;
        match client.generate(&self.config.model, request).await {
            Ok(response) => {
                renderer.clear_composing();
                self.apply_response(response, renderer)?;
            }
            Err(err) => {
                renderer.clear_composing();
                CHAT_TURN_FAILURES.click();
                self.report_failure(&err, renderer);
            }
        }
        Ok(())
    }

    /// Resolves the client, prompting for a credential if none is stored.
    ///
    /// Returns `Ok(None)` when the user declines the prompt. A newly
    /// supplied credential is persisted before it is used.
    async fn ensure_client(
        &mut self,
        credentials: &mut dyn CredentialPrompt,
    ) -> Result<Option<Gemini>> {
        if let Some(client) = &self.client {
            return Ok(Some(client.clone()));
        }
        let key = match self.store.load()? {
            Some(key) => key,
            None => {
                CHAT_CREDENTIAL_PROMPTS.click();
                match credentials.request_credential().await? {
                    Some(key) => {
                        self.store.store(&key)?;
                        key
                    }
                    None => return Ok(None),
                }
            }
        };
        let client = Gemini::new(Some(key))?;
        self.client = Some(client.clone());
        Ok(Some(client))
    }

    /// Builds the outbound request: persona instruction with the context
    /// excerpt, the conversation so far, and the fixed safety policy.
    fn build_request(&self) -> GenerateContentRequest {
        let contents = match self.config.history_limit {
            Some(limit) if self.history.len() > limit => {
                self.history[self.history.len() - limit..].to_vec()
            }
            _ => self.history.clone(),
        };
        let mut request = GenerateContentRequest::new(contents)
            .with_system_instruction(self.config.persona.system_text(self.context.excerpt()))
            .with_safety_settings(SafetySetting::block_only_high());
        if let Some(generation) = self.config.generation_config() {
            request = request.with_generation_config(generation);
        }
        request
    }

    /// Renders a successful response and appends the reply to history.
    ///
    /// A response without candidate text renders the persona's silence
    /// notice and appends nothing.
    fn apply_response(
        &mut self,
        response: GenerateContentResponse,
        renderer: &mut dyn Renderer,
    ) -> Result<()> {
        self.record_usage(response.usage_metadata);
        match response.first_text() {
            Some(text) => {
                let text = text.to_string();
                renderer.print_reply(&self.config.persona.name, &text);
                self.history.push(Content::model(text));
                self.auto_save_transcript()
            }
            None => {
                CHAT_SILENT_TURNS.click();
                renderer.print_info(&self.config.persona.silence_notice());
                Ok(())
            }
        }
    }

    /// Renders a failed request as a system notice.
    ///
    /// Failures that never reached the endpoint read as network errors;
    /// everything else surfaces the message verbatim; for remote error
    /// payloads that is exactly what the API said.
    fn report_failure(&self, err: &Error, renderer: &mut dyn Renderer) {
        if err.is_transport() {
            renderer.print_error(&format!("Network Error: {}", err.message()));
        } else {
            renderer.print_error(&format!("Error: {}", err.message()));
        }
    }

    fn record_usage(&mut self, usage: Option<UsageMetadata>) {
        self.last_turn_usage = usage;
        if let Some(usage) = usage {
            self.usage_totals.prompt_token_count += usage.prompt_token_count;
            self.usage_totals.candidates_token_count += usage.candidates_token_count;
            self.usage_totals.total_token_count += usage.total_token_count;
        }
    }

    /// Clears the conversation history.
    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Returns the number of history entries in the conversation.
    pub fn message_count(&self) -> usize {
        self.history.len()
    }

    /// Returns the conversation history, oldest turn first.
    pub fn history(&self) -> &[Content] {
        &self.history
    }

    /// Changes the model used for replies.
    pub fn set_model(&mut self, model: Model) {
        self.config.model = model;
    }

    /// Returns the current model.
    pub fn model(&self) -> &Model {
        &self.config.model
    }

    /// Sets the sampling temperature.
    pub fn set_temperature(&mut self, temperature: Option<f32>) {
        self.config.temperature = temperature;
    }

    /// Sets the maximum tokens per reply.
    pub fn set_max_output_tokens(&mut self, max_output_tokens: Option<u32>) {
        self.config.max_output_tokens = max_output_tokens;
    }

    /// Sets or clears the history cap.
    pub fn set_history_limit(&mut self, history_limit: Option<usize>) {
        self.config.history_limit = history_limit;
    }

    /// Persists a new credential and switches the session to it.
    pub fn set_credential(&mut self, key: &str) -> Result<()> {
        self.store.store(key)?;
        self.client = Some(Gemini::new(Some(key.to_string()))?);
        Ok(())
    }

    /// Saves the transcript to the specified path.
    pub fn save_transcript_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let transcript = TranscriptFile::new(&self.history);
        let file = File::create(path.as_ref())
            .map_err(|err| Error::io("failed to create transcript file", err))?;
        let writer = BufWriter::new(file);
        to_writer_pretty(writer, &transcript).map_err(|err| {
            Error::serialization("failed to serialize transcript", Some(Box::new(err)))
        })
    }

    /// Loads a transcript from disk, replacing the current history.
    pub fn load_transcript_from<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let file = File::open(path.as_ref())
            .map_err(|err| Error::io("failed to open transcript file", err))?;
        let reader = BufReader::new(file);
        let transcript: TranscriptFile = from_reader(reader).map_err(|err| {
            Error::serialization("failed to parse transcript", Some(Box::new(err)))
        })?;
        self.history = transcript.messages;
        Ok(())
    }

    /// Returns the current session statistics snapshot.
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            model: self.config.model.clone(),
            message_count: self.history.len(),
            context_chars: self.context.text().chars().count(),
            max_output_tokens: self.config.max_output_tokens,
            temperature: self.config.temperature,
            history_limit: self.config.history_limit,
            transcript_path: self.config.transcript_path.clone(),
            total_prompt_tokens: self.usage_totals.prompt_token_count,
            total_candidate_tokens: self.usage_totals.candidates_token_count,
            total_requests: self.request_count,
            last_turn_usage: self.last_turn_usage,
        }
    }

    fn auto_save_transcript(&self) -> Result<()> {
        if let Some(path) = &self.config.transcript_path {
            self.save_transcript_to(path)
        } else {
            Ok(())
        }
    }
}

#[derive(Serialize, Deserialize)]
struct TranscriptFile {
    version: u8,
    messages: Vec<Content>,
}

impl TranscriptFile {
    fn new(messages: &[Content]) -> Self {
        Self {
            version: 1,
            messages: messages.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::MAX_CONTEXT_CHARS;
    use crate::types::{HarmBlockThreshold, Role};

    /// Renderer that records what the session printed.
    #[derive(Default)]
    struct RecordingRenderer {
        replies: Vec<String>,
        infos: Vec<String>,
        errors: Vec<String>,
        composing_shown: usize,
        composing_cleared: usize,
    }

    impl Renderer for RecordingRenderer {
        fn print_reply(&mut self, speaker: &str, text: &str) {
            self.replies.push(format!("{speaker}: {text}"));
        }

        fn print_error(&mut self, error: &str) {
            self.errors.push(error.to_string());
        }

        fn print_info(&mut self, info: &str) {
            self.infos.push(info.to_string());
        }

        fn show_composing(&mut self, _notice: &str) {
            self.composing_shown += 1;
        }

        fn clear_composing(&mut self) {
            self.composing_cleared += 1;
        }
    }

    /// Credential prompt that answers from a script.
    struct ScriptedPrompt {
        response: Option<String>,
        calls: usize,
    }

    impl ScriptedPrompt {
        fn supplying(key: &str) -> Self {
            Self {
                response: Some(key.to_string()),
                calls: 0,
            }
        }

        fn declining() -> Self {
            Self {
                response: None,
                calls: 0,
            }
        }
    }

    #[async_trait::async_trait]
    impl CredentialPrompt for ScriptedPrompt {
        async fn request_credential(&mut self) -> Result<Option<String>> {
            self.calls += 1;
            Ok(self.response.clone())
        }
    }

    fn session_with_store(store: CredentialStore) -> ChatSession {
        ChatSession::new(
            ChatConfig::new(),
            store,
            ContextDocument::new("the diary text"),
        )
    }

    fn session() -> ChatSession {
        let dir = tempfile::tempdir().unwrap();
        session_with_store(CredentialStore::with_path(dir.path().join("creds.json")))
    }

    fn parse_response(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[tokio::test]
    async fn empty_input_is_a_silent_noop() {
        let mut session = session();
        let mut prompt = ScriptedPrompt::supplying("unused");
        let mut renderer = RecordingRenderer::default();

        session.submit("   \t ", &mut prompt, &mut renderer).await.unwrap();

        assert_eq!(session.message_count(), 0);
        assert_eq!(prompt.calls, 0);
        assert!(renderer.replies.is_empty());
        assert!(renderer.errors.is_empty());
        assert_eq!(renderer.composing_shown, 0);
    }

    #[tokio::test]
    async fn declined_credential_aborts_the_turn() {
        let mut session = session();
        let mut prompt = ScriptedPrompt::declining();
        let mut renderer = RecordingRenderer::default();

        session.submit("Hello", &mut prompt, &mut renderer).await.unwrap();

        assert_eq!(prompt.calls, 1);
        assert_eq!(renderer.errors, vec!["API Key required.".to_string()]);
        assert_eq!(session.message_count(), 0);
        assert_eq!(renderer.composing_shown, 0);
    }

    #[tokio::test]
    async fn supplied_credential_is_persisted_and_reused() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::with_path(dir.path().join("creds.json"));
        let mut session = session_with_store(store.clone());
        let mut prompt = ScriptedPrompt::supplying("fresh-key");

        let client = session.ensure_client(&mut prompt).await.unwrap();
        assert!(client.is_some());
        assert_eq!(store.load().unwrap(), Some("fresh-key".to_string()));

        // The second resolution reuses the in-memory client without
        // consulting the prompt again.
        let again = session.ensure_client(&mut prompt).await.unwrap();
        assert!(again.is_some());
        assert_eq!(prompt.calls, 1);
    }

    #[tokio::test]
    async fn stored_credential_skips_the_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::with_path(dir.path().join("creds.json"));
        store.store("saved-key").unwrap();
        let mut session = session_with_store(store);
        let mut prompt = ScriptedPrompt::declining();

        let client = session.ensure_client(&mut prompt).await.unwrap();
        assert!(client.is_some());
        assert_eq!(prompt.calls, 0);
    }

    #[test]
    fn request_carries_instruction_history_and_safety_policy() {
        let mut session = session();
        session.history.push(Content::user("Hello"));

        let request = session.build_request();

        assert_eq!(request.contents, vec![Content::user("Hello")]);
        let instruction = request.system_instruction.unwrap();
        assert!(instruction.parts[0].text.contains("the diary text"));
        assert!(instruction.parts[0].text.contains("roleplaying as Anne Frank"));
        let safety = request.safety_settings.unwrap();
        assert_eq!(safety.len(), 4);
        assert!(safety
            .iter()
            .all(|s| s.threshold == HarmBlockThreshold::BlockOnlyHigh));
        assert!(request.generation_config.is_none());
    }

    #[test]
    fn request_context_is_truncated_to_the_character_limit() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = ChatSession::new(
            ChatConfig::new(),
            CredentialStore::with_path(dir.path().join("creds.json")),
            ContextDocument::new("µ".repeat(MAX_CONTEXT_CHARS + 123)),
        );
        session.history.push(Content::user("Hello"));

        let request = session.build_request();
        let instruction = request.system_instruction.unwrap();
        let sent = instruction.parts[0]
            .text
            .chars()
            .filter(|c| *c == 'µ')
            .count();
        assert_eq!(sent, MAX_CONTEXT_CHARS);
    }

    #[test]
    fn full_history_travels_with_every_request() {
        let mut session = session();
        session.history.push(Content::user("one"));
        session.history.push(Content::model("two"));
        session.history.push(Content::user("three"));

        let request = session.build_request();
        assert_eq!(request.contents.len(), 3);
        assert_eq!(request.contents[1].role, Role::Model);
    }

    #[test]
    fn history_limit_caps_the_outbound_request_only() {
        let mut session = session();
        session.set_history_limit(Some(2));
        for text in ["one", "two", "three", "four"] {
            session.history.push(Content::user(text));
        }

        let request = session.build_request();
        assert_eq!(request.contents.len(), 2);
        assert_eq!(request.contents[0].first_text(), Some("three"));
        // The session itself keeps everything.
        assert_eq!(session.message_count(), 4);
    }

    #[test]
    fn successful_response_renders_and_appends_the_reply() {
        let mut session = session();
        let mut renderer = RecordingRenderer::default();
        session.history.push(Content::user("Hello"));

        let response =
            parse_response(r#"{"candidates":[{"content":{"parts":[{"text":"Hi, I'm Anne."}]}}]}"#);
        session.apply_response(response, &mut renderer).unwrap();

        assert_eq!(renderer.replies, vec!["Anne: Hi, I'm Anne.".to_string()]);
        assert_eq!(
            session.history(),
            &[Content::user("Hello"), Content::model("Hi, I'm Anne.")]
        );
    }

    #[test]
    fn blocked_response_renders_the_silence_notice() {
        let mut session = session();
        let mut renderer = RecordingRenderer::default();
        session.history.push(Content::user("Hello"));

        let response = parse_response(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#);
        session.apply_response(response, &mut renderer).unwrap();

        assert_eq!(
            renderer.infos,
            vec!["Anne is silent (Safety Block).".to_string()]
        );
        assert!(renderer.replies.is_empty());
        assert_eq!(session.message_count(), 1);
    }

    #[test]
    fn candidate_without_text_also_reads_as_silence() {
        let mut session = session();
        let mut renderer = RecordingRenderer::default();

        let response = parse_response(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#);
        session.apply_response(response, &mut renderer).unwrap();

        assert_eq!(
            renderer.infos,
            vec!["Anne is silent (Safety Block).".to_string()]
        );
        assert_eq!(session.message_count(), 0);
    }

    #[test]
    fn transport_failure_reads_as_a_network_error() {
        let session = session();
        let mut renderer = RecordingRenderer::default();

        let err = Error::connection("Failed to fetch", None);
        session.report_failure(&err, &mut renderer);

        assert_eq!(
            renderer.errors,
            vec!["Network Error: Failed to fetch".to_string()]
        );
    }

    #[test]
    fn remote_error_payload_is_surfaced_verbatim() {
        let session = session();
        let mut renderer = RecordingRenderer::default();

        let err = Error::bad_request("API key invalid");
        session.report_failure(&err, &mut renderer);

        assert_eq!(renderer.errors, vec!["Error: API key invalid".to_string()]);
    }

    #[test]
    fn malformed_response_reads_as_an_error_not_a_network_failure() {
        let session = session();
        let mut renderer = RecordingRenderer::default();

        let err = Error::serialization("malformed response body: missing field", None);
        session.report_failure(&err, &mut renderer);

        assert_eq!(
            renderer.errors,
            vec!["Error: malformed response body: missing field".to_string()]
        );
    }

    #[test]
    fn usage_metadata_accumulates_across_turns() {
        let mut session = session();
        let mut renderer = RecordingRenderer::default();

        let first = parse_response(
            r#"{"candidates":[{"content":{"parts":[{"text":"a"}]}}],"usageMetadata":{"promptTokenCount":100,"candidatesTokenCount":10,"totalTokenCount":110}}"#,
        );
        let second = parse_response(
            r#"{"candidates":[{"content":{"parts":[{"text":"b"}]}}],"usageMetadata":{"promptTokenCount":200,"candidatesTokenCount":20,"totalTokenCount":220}}"#,
        );
        session.apply_response(first, &mut renderer).unwrap();
        session.apply_response(second, &mut renderer).unwrap();

        let stats = session.stats();
        assert_eq!(stats.total_prompt_tokens, 300);
        assert_eq!(stats.total_candidate_tokens, 30);
        assert_eq!(stats.last_turn_usage.unwrap().total_token_count, 220);
    }

    #[test]
    fn clear_session() {
        let mut session = session();
        session.history.push(Content::user("test"));
        assert_eq!(session.message_count(), 1);

        session.clear();
        assert_eq!(session.message_count(), 0);
    }

    #[test]
    fn transcript_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.json");
        let mut saved = session();
        saved.history.push(Content::user("Hello"));
        saved.history.push(Content::model("Hi, I'm Anne."));

        saved.save_transcript_to(&path).unwrap();

        let mut restored = session();
        restored.load_transcript_from(&path).unwrap();
        assert_eq!(restored.history(), saved.history());
    }

    #[test]
    fn set_credential_persists_and_activates() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::with_path(dir.path().join("creds.json"));
        let mut session = session_with_store(store.clone());

        session.set_credential("rotated-key").unwrap();
        assert_eq!(store.load().unwrap(), Some("rotated-key".to_string()));
        assert!(session.client.is_some());
    }
}
