//! ECO-MAP - AI assistant gateway for the KIN ECO-MAP recycling app
//!
//! This library mediates the app's calls to a hosted generative-AI service
//! behind two operations: a conversational "Academy" chat session and a
//! single-shot "Marketplace" image analysis returning a structured record.
//!
//! # Quick Start
//!
//! ```no_run
//! use ecomap::{Assistant, GatewayConfig};
//!
//! # async fn run() {
//! let config = GatewayConfig::from_env();
//! let assistant = Assistant::from_config(&config);
//!
//! let reply = assistant.send_message("Comment trier le plastique ?").await;
//! println!("{}", reply);
//! # }
//! ```
//!
//! # Behavior
//!
//! - **Chat**: one lazily-created session per process, reused across calls;
//!   replies are always non-empty (a fixed apology replaces any failure)
//! - **Analysis**: strict JSON parsing with code-fence stripping; any failure
//!   yields the fixed fallback record instead of an error
//! - **Credentials**: read from the environment; an absent key degrades to
//!   the per-call fallbacks, it never crashes the gateway

pub mod ai;
pub mod chat;
pub mod config;
pub mod item;
pub mod media;

// Re-export main types
pub use ai::assistant::{parse_item_analysis, Assistant, CHAT_APOLOGY, EMPTY_REPLY_FALLBACK};
pub use ai::backend::{Content, GenerateRequest, GenerativeBackend, Part, Role};
pub use ai::gemini::{AiError, GeminiClient};
pub use chat::{ChatRole, ChatTurn};
pub use config::GatewayConfig;
pub use item::{Category, ItemAnalysis};
pub use media::ImagePayload;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        AiError, Assistant, Category, ChatRole, ChatTurn, GatewayConfig, ImagePayload,
        ItemAnalysis,
    };
}
