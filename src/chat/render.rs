//! Output rendering for the chat application.
//!
//! This module provides a trait-based rendering abstraction so the session
//! controller can be driven against a terminal or against a recording sink
//! in tests. The default implementation styles output with ANSI escape
//! codes and uses line erasure for the transient composing indicator.

use std::io::{self, Stdout, Write};

/// ANSI escape code for dim text (used for the composing indicator).
const ANSI_DIM: &str = "\x1b[2m";

/// ANSI escape code for italic text (used for the composing indicator).
const ANSI_ITALIC: &str = "\x1b[3m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// ANSI escape code for cyan text (used for the persona label).
const ANSI_CYAN: &str = "\x1b[36m";

/// ANSI escape code for red text (used for error notices).
const ANSI_RED: &str = "\x1b[31m";

/// Carriage return plus erase-line, which removes the composing indicator.
const ANSI_ERASE_LINE: &str = "\r\x1b[2K";

/// Trait for rendering chat output.
///
/// This abstraction allows for different rendering strategies:
/// - Plain text with ANSI styling
/// - Plain text without styling (for piping/redirecting)
/// - Recording sinks for tests
pub trait Renderer: Send {
    /// Print a completed persona reply.
    fn print_reply(&mut self, speaker: &str, text: &str);

    /// Print an error notice.
    fn print_error(&mut self, error: &str);

    /// Print an informational or system notice.
    fn print_info(&mut self, info: &str);

    /// Show the transient composing indicator.
    ///
    /// The indicator stays visible until [`Renderer::clear_composing`] and
    /// must not become part of the durable transcript.
    fn show_composing(&mut self, notice: &str);

    /// Remove the composing indicator, if one is showing.
    fn clear_composing(&mut self);
}

/// Plain text renderer with optional ANSI styling.
pub struct PlainTextRenderer {
    stdout: Stdout,
    use_color: bool,
    composing: bool,
}

impl PlainTextRenderer {
    /// Creates a new PlainTextRenderer with ANSI colors enabled.
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            use_color: true,
            composing: false,
        }
    }

    /// Creates a new PlainTextRenderer with specified color setting.
    pub fn with_color(use_color: bool) -> Self {
        Self {
            stdout: io::stdout(),
            use_color,
            composing: false,
        }
    }

    /// Flushes stdout to ensure immediate display.
    fn flush(&mut self) {
        let _ = self.stdout.flush();
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for PlainTextRenderer {
    fn print_reply(&mut self, speaker: &str, text: &str) {
        self.clear_composing();
        if self.use_color {
            println!("{ANSI_CYAN}{speaker}:{ANSI_RESET} {text}");
        } else {
            println!("{speaker}: {text}");
        }
        self.flush();
    }

    fn print_error(&mut self, error: &str) {
        self.clear_composing();
        if self.use_color {
            eprintln!("{ANSI_RED}{error}{ANSI_RESET}");
        } else {
            eprintln!("{error}");
        }
    }

    fn print_info(&mut self, info: &str) {
        self.clear_composing();
        println!("{info}");
        self.flush();
    }

    fn show_composing(&mut self, notice: &str) {
        if self.composing {
            return;
        }
        // Erasing the indicator needs ANSI control sequences, so it only
        // renders when styling is enabled.
        if self.use_color {
            print!("{ANSI_DIM}{ANSI_ITALIC}{notice}{ANSI_RESET}");
            self.flush();
        }
        self.composing = true;
    }

    fn clear_composing(&mut self) {
        if !self.composing {
            return;
        }
        if self.use_color {
            print!("{ANSI_ERASE_LINE}");
            self.flush();
        }
        self.composing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_default_has_color() {
        let renderer = PlainTextRenderer::new();
        assert!(renderer.use_color);
    }

    #[test]
    fn renderer_without_color() {
        let renderer = PlainTextRenderer::with_color(false);
        assert!(!renderer.use_color);
    }

    #[test]
    fn composing_state_tracks_show_and_clear() {
        let mut renderer = PlainTextRenderer::with_color(false);
        renderer.show_composing("Anne is writing...");
        assert!(renderer.composing);
        renderer.clear_composing();
        assert!(!renderer.composing);
    }
}
