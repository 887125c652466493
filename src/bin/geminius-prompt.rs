//! One-shot prompt runner for the Gemini API.
//!
//! Sends a single prompt, with no persona and no history, and prints the reply
//! to stdout. The API key comes from the GEMINI_API_KEY environment
//! variable. The exit status reflects whether a reply was produced, which
//! makes this binary convenient in scripts.
//!
//! # Usage
//!
//! ```bash
//! # Prompt from the command line
//! geminius-prompt "Summarize the first chapter."
//!
//! # Prompt from stdin
//! echo "Summarize the first chapter." | geminius-prompt
//!
//! # Specify a model
//! geminius-prompt --model gemini-2.5-pro "Summarize the first chapter."
//! ```

use std::io::Read;
use std::process::exit;

use arrrg::CommandLine;
use arrrg_derive::CommandLine;

use geminius::{Content, Gemini, GenerateContentRequest, KnownModel, Model};

/// Command-line arguments for the geminius-prompt tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
struct PromptArgs {
    /// Model to use.
    #[arrrg(optional, "Model to use (default: gemini-2.5-flash)", "MODEL")]
    model: Option<String>,
}

/// Main entry point for the geminius-prompt command-line tool.
#[tokio::main]
async fn main() {
    let (args, free) =
        PromptArgs::from_command_line_relaxed("geminius-prompt [OPTIONS] [PROMPT...]");

    let prompt = if free.is_empty() {
        let mut buffer = String::new();
        if let Err(err) = std::io::stdin().read_to_string(&mut buffer) {
            eprintln!("failed to read prompt from stdin: {err}");
            exit(1);
        }
        buffer
    } else {
        free.join(" ")
    };
    let prompt = prompt.trim();
    if prompt.is_empty() {
        eprintln!("no prompt provided");
        exit(1);
    }

    let model = args
        .model
        .map(|s| s.parse::<Model>().unwrap_or(Model::Custom(s)))
        .unwrap_or(Model::Known(KnownModel::Gemini25Flash));

    let client = match Gemini::new(None) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{err}");
            exit(1);
        }
    };

    let request = GenerateContentRequest::new(vec![Content::user(prompt)]);
    match client.generate(&model, request).await {
        Ok(response) => match response.first_text() {
            Some(text) => println!("{text}"),
            None => {
                eprintln!("the response carried no candidate text");
                exit(1);
            }
        },
        Err(err) => {
            eprintln!("{err}");
            exit(1);
        }
    }
}
