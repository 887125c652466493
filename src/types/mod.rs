// Public modules
pub mod candidate;
pub mod content;
pub mod finish_reason;
pub mod generate_content_request;
pub mod generate_content_response;
pub mod generation_config;
pub mod harm_block_threshold;
pub mod harm_category;
pub mod model;
pub mod part;
pub mod prompt_feedback;
pub mod role;
pub mod safety_rating;
pub mod safety_setting;
pub mod system_instruction;
pub mod usage_metadata;

// Re-exports
pub use candidate::Candidate;
pub use content::Content;
pub use finish_reason::FinishReason;
pub use generate_content_request::GenerateContentRequest;
pub use generate_content_response::GenerateContentResponse;
pub use generation_config::GenerationConfig;
pub use harm_block_threshold::HarmBlockThreshold;
pub use harm_category::HarmCategory;
pub use model::{KnownModel, Model};
pub use part::Part;
pub use prompt_feedback::{BlockReason, PromptFeedback};
pub use role::Role;
pub use safety_rating::{HarmProbability, SafetyRating};
pub use safety_setting::SafetySetting;
pub use system_instruction::SystemInstruction;
pub use usage_metadata::UsageMetadata;
