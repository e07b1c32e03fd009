mod prompt;
mod service;
mod types;

pub use prompt::{build_prompt, SYSTEM_PROMPT};
pub use service::CoachService;
pub use types::{Classification, GenerateRequest, GenerationResult, Goal, ReplyCandidate, Tone};
