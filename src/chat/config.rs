//! Configuration types for the chat application.
//!
//! This module provides CLI argument parsing via `arrrg` and configuration
//! structures for controlling chat behavior.

use std::path::PathBuf;

use arrrg_derive::CommandLine;

use crate::chat::persona::Persona;
use crate::types::{GenerationConfig, KnownModel, Model};

/// Default path of the context document, relative to the working directory.
pub const DEFAULT_CONTEXT_PATH: &str = "context.txt";

/// Command-line arguments for the geminius-chat tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ChatArgs {
    /// Model to use for chat.
    #[arrrg(optional, "Model to use (default: gemini-2.5-flash)", "MODEL")]
    pub model: Option<String>,

    /// Path to the context document the persona draws on.
    #[arrrg(optional, "Context document path (default: context.txt)", "PATH")]
    pub context: Option<String>,

    /// Path to the credentials file.
    #[arrrg(optional, "Credentials file path (default: per-user config)", "PATH")]
    pub credentials: Option<String>,

    /// Maximum tokens per reply.
    #[arrrg(optional, "Max tokens per reply (default: model decides)", "TOKENS")]
    pub max_output_tokens: Option<u32>,

    /// Cap on history entries sent with each request.
    #[arrrg(optional, "Cap history entries per request (default: unlimited)", "N")]
    pub history_limit: Option<u32>,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,
}

/// Configuration for a chat session.
///
/// This struct holds the resolved configuration values after processing
/// command-line arguments with appropriate defaults.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// The model to use for generating replies.
    pub model: Model,

    /// The roleplay persona driving the system instruction and notices.
    pub persona: Persona,

    /// Maximum tokens per reply.
    pub max_output_tokens: Option<u32>,

    /// Optional sampling temperature.
    pub temperature: Option<f32>,

    /// Optional top-p nucleus sampling value.
    pub top_p: Option<f32>,

    /// Optional top-k sampling limit.
    pub top_k: Option<u32>,

    /// Custom stop sequences supplied on every request.
    pub stop_sequences: Vec<String>,

    /// Optional cap on history entries sent with each request.
    ///
    /// History grows without bound by default, exactly as the widget this
    /// reimplements behaved; setting a cap is an explicit opt-in that
    /// keeps only the most recent entries in the outbound request.
    pub history_limit: Option<usize>,

    /// Path to persist transcripts automatically after each reply.
    pub transcript_path: Option<PathBuf>,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,
}

impl ChatConfig {
    /// Creates a new ChatConfig with default values.
    ///
    /// Defaults:
    /// - Model: gemini-2.5-flash
    /// - Persona: the Anne Frank educational assistant
    /// - Sampling: model defaults
    /// - History: unlimited
    /// - Color: enabled
    pub fn new() -> Self {
        Self {
            model: Model::Known(KnownModel::Gemini25Flash),
            persona: Persona::new(),
            max_output_tokens: None,
            temperature: None,
            top_p: None,
            top_k: None,
            stop_sequences: Vec::new(),
            history_limit: None,
            transcript_path: None,
            use_color: true,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    /// Sets the persona.
    pub fn with_persona(mut self, persona: Persona) -> Self {
        self.persona = persona;
        self
    }

    /// Sets the maximum tokens per reply.
    pub fn with_max_output_tokens(mut self, max_output_tokens: Option<u32>) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the top-p value.
    pub fn with_top_p(mut self, top_p: Option<f32>) -> Self {
        self.top_p = top_p;
        self
    }

    /// Sets the top-k value.
    pub fn with_top_k(mut self, top_k: Option<u32>) -> Self {
        self.top_k = top_k;
        self
    }

    /// Sets the stop sequences.
    pub fn with_stop_sequences(mut self, stop_sequences: Vec<String>) -> Self {
        self.stop_sequences = stop_sequences;
        self
    }

    /// Sets the history cap.
    pub fn with_history_limit(mut self, history_limit: Option<usize>) -> Self {
        self.history_limit = history_limit;
        self
    }

    /// Sets the transcript auto-save path.
    pub fn with_transcript_path(mut self, path: Option<PathBuf>) -> Self {
        self.transcript_path = path;
        self
    }

    /// Disables ANSI color output.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }

    /// Builds the request's generation config from the sampling knobs.
    ///
    /// Returns `None` when every knob is at its model default, so the
    /// request omits the `generationConfig` field entirely.
    pub fn generation_config(&self) -> Option<GenerationConfig> {
        let mut config = GenerationConfig::new();
        config.temperature = self.temperature;
        config.top_p = self.top_p;
        config.top_k = self.top_k;
        config.max_output_tokens = self.max_output_tokens;
        config.stop_sequences = self.stop_sequences.clone();
        if config.is_empty() { None } else { Some(config) }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ChatArgs> for ChatConfig {
    fn from(args: ChatArgs) -> Self {
        let model = args
            .model
            .map(|s| s.parse::<Model>().unwrap_or(Model::Custom(s)))
            .unwrap_or(Model::Known(KnownModel::Gemini25Flash));

        ChatConfig {
            model,
            max_output_tokens: args.max_output_tokens,
            history_limit: args.history_limit.map(|limit| limit as usize),
            use_color: !args.no_color,
            ..ChatConfig::new()
        }
    }
}
