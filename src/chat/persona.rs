//! The roleplay persona and its fixed steering text.
//!
//! A persona bundles everything user-facing about the character: the
//! system instruction template sent with every request, the transcript
//! label, and the composing/silence notices. The default persona is the
//! Anne Frank educational assistant this tool ships for.

use crate::context::MAX_CONTEXT_CHARS;

/// A roleplay character and the constraints it answers under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    /// Short name used for transcript labels and notices.
    pub name: String,

    /// Who the assistant roleplays as.
    pub identity: String,

    /// One-line characterization included in the instruction.
    pub profile: String,

    /// Tone the character keeps.
    pub tone: String,

    /// What the character is asked to do each turn.
    pub task: String,
}

impl Persona {
    /// Creates the default persona: the Anne Frank educational assistant.
    pub fn new() -> Self {
        Self {
            name: "Anne".to_string(),
            identity: "Anne Frank".to_string(),
            profile: "Anne Frank (age 13-15)".to_string(),
            tone: "Intelligent, observant, hopeful, honest".to_string(),
            task: "Answer correctly and concisely from Anne's perspective.".to_string(),
        }
    }

    /// Sets the short name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the roleplay identity.
    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = identity.into();
        self
    }

    /// Sets the profile line.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Sets the tone line.
    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = tone.into();
        self
    }

    /// Sets the per-turn task line.
    pub fn with_task(mut self, task: impl Into<String>) -> Self {
        self.task = task.into();
        self
    }

    /// Renders the system instruction for a request.
    ///
    /// The caller passes the context excerpt, already capped at
    /// [`MAX_CONTEXT_CHARS`]; the template wraps it in delimiters so the
    /// model can tell the source document from the instructions.
    pub fn system_text(&self, context: &str) -> String {
        debug_assert!(context.chars().count() <= MAX_CONTEXT_CHARS);
        format!(
            "Context: You are an AI educational assistant roleplaying as {identity}.\n\
             Persona: {profile}.\n\
             Tone: {tone}.\n\
             Knowledge Base: Use this context from the book:\n\
             === CONTEXT ===\n\
             {context}\n\
             === END CONTEXT ===\n\
             \n\
             Task: {task}\n\
             Safety: Educational purpose only.\n\
             Keep responses concise (max 3 sentences).",
            identity = self.identity,
            profile = self.profile,
            tone = self.tone,
            context = context,
            task = self.task,
        )
    }

    /// The transient indicator shown while a reply is pending.
    pub fn composing_notice(&self) -> String {
        format!("{} is writing...", self.name)
    }

    /// The fixed notice shown when the API returns no candidate text.
    pub fn silence_notice(&self) -> String {
        format!("{} is silent (Safety Block).", self.name)
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_persona_notices() {
        let persona = Persona::new();
        assert_eq!(persona.composing_notice(), "Anne is writing...");
        assert_eq!(persona.silence_notice(), "Anne is silent (Safety Block).");
    }

    #[test]
    fn system_text_wraps_context_in_delimiters() {
        let persona = Persona::new();
        let text = persona.system_text("the diary text");
        assert!(text.contains("roleplaying as Anne Frank"));
        assert!(text.contains("=== CONTEXT ===\nthe diary text\n=== END CONTEXT ==="));
        assert!(text.contains("Persona: Anne Frank (age 13-15)."));
        assert!(text.ends_with("Keep responses concise (max 3 sentences)."));
    }

    #[test]
    fn custom_persona_renders_its_own_fields() {
        let persona = Persona::new()
            .with_name("Ishmael")
            .with_identity("Ishmael the sailor")
            .with_profile("a wandering narrator")
            .with_tone("Wry, contemplative")
            .with_task("Answer as Ishmael would.");
        let text = persona.system_text("");
        assert!(text.contains("roleplaying as Ishmael the sailor"));
        assert!(text.contains("Tone: Wry, contemplative."));
        assert_eq!(persona.composing_notice(), "Ishmael is writing...");
    }
}
