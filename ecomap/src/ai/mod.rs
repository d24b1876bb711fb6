pub mod assistant;
pub mod backend;
pub mod gemini;
pub mod prompts;

// Re-export for convenience
pub use assistant::{parse_item_analysis, Assistant, CHAT_APOLOGY, EMPTY_REPLY_FALLBACK};
pub use backend::{Content, GenerateRequest, GenerativeBackend, Part, Role};
pub use gemini::{AiError, GeminiClient};
