//! Interactive chat with a roleplay persona over the Gemini API.
//!
//! This binary provides a REPL for conversing with the configured persona
//! (by default, the Anne Frank educational assistant). The persona answers
//! from a context document loaded at startup, and the API key is read from
//! a per-user credentials file; you are prompted once if none is stored.
//!
//! # Usage
//!
//! ```bash
//! # Basic usage with default settings
//! geminius-chat
//!
//! # Specify a model
//! geminius-chat --model gemini-2.5-pro
//!
//! # Point at a different context document
//! geminius-chat --context diary.txt
//!
//! # Disable colors (useful for piping output)
//! geminius-chat --no-color
//! ```
//!
//! # Commands
//!
//! While chatting, you can use slash commands:
//! - `/help` - Show available commands
//! - `/clear` - Clear conversation history
//! - `/model <name>` - Change the model
//! - `/key` - Enter and persist a new API key
//! - `/stats` - Show session statistics
//! - `/quit` - Exit the application

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use geminius::chat::{
    ChatArgs, ChatCommand, ChatConfig, ChatSession, DEFAULT_CONTEXT_PATH, PlainTextRenderer,
    Renderer, help_text, parse_command,
};
use geminius::{ContextDocument, CredentialPrompt, CredentialStore, Error, Model};

/// Credential prompt backed by a readline editor.
///
/// Declining is pressing Enter on an empty line, Ctrl-C, or Ctrl-D; the
/// session then aborts the turn with a visible notice.
struct ReadlinePrompt;

#[async_trait::async_trait]
impl CredentialPrompt for ReadlinePrompt {
    async fn request_credential(&mut self) -> geminius::Result<Option<String>> {
        let mut editor = DefaultEditor::new()
            .map_err(|err| Error::unknown(format!("failed to initialize input: {err}")))?;
        match editor.readline("Enter Google Gemini API Key: ") {
            Ok(line) => {
                let line = line.trim().to_string();
                if line.is_empty() { Ok(None) } else { Ok(Some(line)) }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(Error::unknown(format!("input error: {err}"))),
        }
    }
}

/// Main entry point for the geminius-chat application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("geminius-chat [OPTIONS]");
    let context_path = args
        .context
        .clone()
        .unwrap_or_else(|| DEFAULT_CONTEXT_PATH.to_string());
    let credentials_path = args.credentials.clone();
    let config = ChatConfig::from(args);
    let use_color = config.use_color;
    let persona_name = config.persona.name.clone();

    let store = match credentials_path {
        Some(path) => CredentialStore::with_path(path),
        None => CredentialStore::open_default()?,
    };

    let context = match ContextDocument::load(&context_path) {
        Ok(context) => context,
        Err(err) => {
            eprintln!("Warning: {err}");
            eprintln!("Continuing without background text.");
            ContextDocument::empty()
        }
    };

    let startup_key = store.load();
    let mut session = ChatSession::new(config, store, context);
    let mut renderer = PlainTextRenderer::with_color(use_color);
    let mut credentials = ReadlinePrompt;
    let mut rl = DefaultEditor::new()?;

    println!(
        "Chat with {} (model: {})",
        persona_name,
        session.model()
    );
    println!("Type /help for commands, /quit to exit\n");

    if let Ok(None) = startup_key {
        renderer.print_info("No API key stored yet; you will be asked for one on your first message.");
    }

    loop {
        let readline = rl.readline("You: ");

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                // Check for slash commands
                if let Some(cmd) = parse_command(line) {
                    match cmd {
                        ChatCommand::Quit => {
                            println!("Goodbye!");
                            break;
                        }
                        ChatCommand::Clear => {
                            session.clear();
                            renderer.print_info("Conversation cleared.");
                        }
                        ChatCommand::Help => {
                            for line in help_text().lines() {
                                println!("    {}", line);
                            }
                        }
                        ChatCommand::Model(model_name) => {
                            let model = model_name
                                .parse()
                                .unwrap_or_else(|_| Model::Custom(model_name.clone()));
                            session.set_model(model);
                            renderer.print_info(&format!("Model changed to: {}", model_name));
                        }
                        ChatCommand::Key => match credentials.request_credential().await {
                            Ok(Some(key)) => match session.set_credential(&key) {
                                Ok(()) => renderer.print_info("API key updated."),
                                Err(err) => renderer
                                    .print_error(&format!("Failed to store API key: {}", err)),
                            },
                            Ok(None) => renderer.print_info("API key unchanged."),
                            Err(err) => renderer.print_error(&err.to_string()),
                        },
                        ChatCommand::Temperature(value) => {
                            session.set_temperature(Some(value));
                            renderer.print_info(&format!("temperature set to {:.2}", value));
                        }
                        ChatCommand::ClearTemperature => {
                            session.set_temperature(None);
                            renderer.print_info("temperature reset to model default");
                        }
                        ChatCommand::MaxTokens(value) => {
                            session.set_max_output_tokens(Some(value));
                            renderer.print_info(&format!("max output tokens set to {value}"));
                        }
                        ChatCommand::HistoryLimit(value) => {
                            session.set_history_limit(Some(value));
                            renderer.print_info(&format!(
                                "history capped to the last {value} entries per request"
                            ));
                        }
                        ChatCommand::ClearHistoryLimit => {
                            session.set_history_limit(None);
                            renderer.print_info("history cap removed");
                        }
                        ChatCommand::SaveTranscript(path) => {
                            match session.save_transcript_to(&path) {
                                Ok(()) => {
                                    renderer.print_info(&format!("Transcript saved to {}", path))
                                }
                                Err(err) => renderer
                                    .print_error(&format!("Failed to save transcript: {}", err)),
                            }
                        }
                        ChatCommand::LoadTranscript(path) => {
                            match session.load_transcript_from(&path) {
                                Ok(()) => {
                                    renderer.print_info(&format!("Transcript loaded from {}", path))
                                }
                                Err(err) => renderer
                                    .print_error(&format!("Failed to load transcript: {}", err)),
                            }
                        }
                        ChatCommand::Stats => {
                            print_stats(&session);
                        }
                        ChatCommand::Invalid(message) => {
                            renderer.print_error(&message);
                        }
                    }
                    continue;
                }

                // Regular message - run one turn
                if let Err(e) = session.submit(line, &mut credentials, &mut renderer).await {
                    renderer.print_error(&e.to_string());
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C at prompt - soft interrupt
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("Input error: {}", err));
                break;
            }
        }
    }

    Ok(())
}

fn print_stats(session: &ChatSession) {
    let stats = session.stats();
    println!("    Session Statistics:");
    println!("      Model: {}", stats.model);
    println!("      Messages: {}", stats.message_count);
    println!("      Context: {} chars", stats.context_chars);
    println!(
        "      Max output tokens: {}",
        describe_u32(stats.max_output_tokens)
    );
    println!("      Temperature: {}", describe_float(stats.temperature));
    match stats.history_limit {
        Some(limit) => println!("      History limit: last {limit} entries"),
        None => println!("      History limit: (unlimited)"),
    }
    println!(
        "      Total tokens: {} in / {} out ({} requests)",
        stats.total_prompt_tokens, stats.total_candidate_tokens, stats.total_requests
    );
    if let Some(usage) = stats.last_turn_usage {
        println!(
            "      Last turn tokens: {} in / {} out",
            usage.prompt_token_count, usage.candidates_token_count
        );
    }
    match stats.transcript_path {
        Some(ref path) => println!("      Transcript file: {}", path.display()),
        None => println!("      Transcript file: (disabled)"),
    }
}

fn describe_float(value: Option<f32>) -> String {
    value
        .map(|v| format!("{v:.2}"))
        .unwrap_or_else(|| "default".to_string())
}

fn describe_u32(value: Option<u32>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "default".to_string())
}
