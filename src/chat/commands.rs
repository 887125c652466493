//! Slash command parsing for the chat application.
//!
//! This module handles parsing of special commands that start with `/`,
//! allowing users to control the chat session without sending messages
//! to the API.

/// A parsed chat command.
///
/// These commands control the chat session and are not sent to the API.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatCommand {
    /// Clear the conversation history.
    Clear,

    /// Change the model.
    Model(String),

    /// Prompt for a new API key and persist it.
    Key,

    /// Set the sampling temperature.
    Temperature(f32),

    /// Clear the sampling temperature (use model default).
    ClearTemperature,

    /// Set the maximum output tokens per reply.
    MaxTokens(u32),

    /// Cap the number of history entries sent with each request.
    HistoryLimit(usize),

    /// Remove the history cap (send the full history again).
    ClearHistoryLimit,

    /// Save the transcript to a file.
    SaveTranscript(String),

    /// Load conversation history from a file.
    LoadTranscript(String),

    /// Display session statistics (message count, token totals, etc.).
    Stats,

    /// Display help information.
    Help,

    /// Exit the chat application.
    Quit,

    /// Report a parsing error back to the caller.
    Invalid(String),
}

/// Parses user input for slash commands.
///
/// Returns `Some(ChatCommand)` if the input is a command,
/// or `None` if it should be treated as a regular message.
///
/// # Examples
///
/// ```
/// # use geminius::chat::parse_command;
/// assert!(parse_command("/quit").is_some());
/// assert!(parse_command("/model gemini-2.5-pro").is_some());
/// assert!(parse_command("Hello, Anne!").is_none());
/// ```
pub fn parse_command(input: &str) -> Option<ChatCommand> {
    let input = input.trim();

    if !input.starts_with('/') {
        return None;
    }

    let mut parts = input[1..].splitn(2, ' ');
    let command = parts.next()?.to_lowercase();
    let argument = parts.next().map(|s| s.trim()).filter(|s| !s.is_empty());

    let result = match command.as_str() {
        "clear" => ChatCommand::Clear,
        "model" => match argument {
            Some(model) => ChatCommand::Model(model.to_string()),
            None => ChatCommand::Invalid("/model requires a model name".to_string()),
        },
        "key" => ChatCommand::Key,
        "temperature" => match argument {
            Some(value) => match value.parse::<f32>() {
                Ok(value) => ChatCommand::Temperature(value),
                Err(_) => {
                    ChatCommand::Invalid(format!("/temperature requires a number, got: {value}"))
                }
            },
            None => ChatCommand::ClearTemperature,
        },
        "max-tokens" => match argument {
            Some(value) => match value.parse::<u32>() {
                Ok(value) => ChatCommand::MaxTokens(value),
                Err(_) => {
                    ChatCommand::Invalid(format!("/max-tokens requires an integer, got: {value}"))
                }
            },
            None => ChatCommand::Invalid("/max-tokens requires an integer".to_string()),
        },
        "history-limit" => match argument {
            Some(value) => match value.parse::<usize>() {
                Ok(value) if value > 0 => ChatCommand::HistoryLimit(value),
                _ => ChatCommand::Invalid(format!(
                    "/history-limit requires a positive integer, got: {value}"
                )),
            },
            None => ChatCommand::ClearHistoryLimit,
        },
        "save" => match argument {
            Some(path) => ChatCommand::SaveTranscript(path.to_string()),
            None => ChatCommand::Invalid("/save requires a file path".to_string()),
        },
        "load" => match argument {
            Some(path) => ChatCommand::LoadTranscript(path.to_string()),
            None => ChatCommand::Invalid("/load requires a file path".to_string()),
        },
        "stats" => ChatCommand::Stats,
        "help" | "?" => ChatCommand::Help,
        "quit" | "exit" => ChatCommand::Quit,
        _ => ChatCommand::Invalid(format!("Unknown command: /{command}")),
    };

    Some(result)
}

/// Returns the help text listing available commands.
pub fn help_text() -> &'static str {
    "Available commands:\n\
     /clear              Clear conversation history\n\
     /model <name>       Change the model\n\
     /key                Enter and persist a new API key\n\
     /temperature [t]    Set sampling temperature (no value resets)\n\
     /max-tokens <n>     Cap tokens per reply\n\
     /history-limit [n]  Cap history entries per request (no value resets)\n\
     /save <path>        Save the transcript to a file\n\
     /load <path>        Load a transcript from a file\n\
     /stats              Show session statistics\n\
     /help               Show this help\n\
     /quit               Exit"
}
