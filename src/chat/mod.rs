//! Chat application module for conversing with a roleplay persona.
//!
//! This module provides the session controller behind the geminius-chat
//! REPL. It owns one conversation against the `generateContent` endpoint:
//!
//! - Linear, append-only history sent in full with every request
//! - A fixed persona system instruction conditioned on a context document
//! - Lazy credential acquisition with file-backed persistence
//! - Slash commands for session control
//!
//! # Architecture
//!
//! The module is organized into several components:
//!
//! - [`config`]: CLI argument parsing and configuration
//! - [`persona`]: the roleplay character and its steering text
//! - [`session`]: core session management and API interaction
//! - [`commands`]: slash command parsing and handling
//! - [`render`]: output rendering abstraction

mod commands;
mod config;
mod persona;
mod render;
mod session;

pub use commands::{ChatCommand, help_text, parse_command};
pub use config::{ChatArgs, ChatConfig, DEFAULT_CONTEXT_PATH};
pub use persona::Persona;
pub use render::{PlainTextRenderer, Renderer};
pub use session::{ChatSession, SessionStats};
