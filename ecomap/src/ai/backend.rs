//! Generative Backend Trait
//!
//! Defines the seam between the assistant gateway and the hosted
//! generative-AI service, so tests can substitute a fake upstream client.

use async_trait::async_trait;

use crate::ai::AiError;
use crate::media::ImagePayload;

/// Who produced a content entry in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Model,
}

impl Role {
    /// Wire name used by the hosted service.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// One piece of a content entry: plain text or an inline image.
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Text(String),
    InlineImage(ImagePayload),
}

/// A role-tagged group of parts, one conversational turn.
#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            parts: vec![Part::Text(text.into())],
        }
    }

    pub fn model_text(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            parts: vec![Part::Text(text.into())],
        }
    }

    pub fn user_parts(parts: Vec<Part>) -> Self {
        Self {
            role: Role::User,
            parts,
        }
    }

    /// Concatenated text of the textual parts (images contribute nothing).
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| match part {
                Part::Text(text) => Some(text.as_str()),
                Part::InlineImage(_) => None,
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

/// A single completion request against the upstream service.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenerateRequest {
    /// Persona/system instruction sent alongside the contents, if any.
    pub system_instruction: Option<String>,
    /// Conversation so far, oldest first, ending with the new user turn.
    pub contents: Vec<Content>,
    /// Sampling temperature override for this request.
    pub temperature: Option<f32>,
}

/// Common trait for upstream completion backends.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Get the backend name (for logging).
    fn name(&self) -> &str;

    /// Run one completion request and return the raw reply text.
    async fn generate(&self, request: GenerateRequest) -> Result<String, AiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        assert_eq!(Role::User.as_str(), "user");
        assert_eq!(Role::Model.as_str(), "model");
    }

    #[test]
    fn test_content_text_skips_images() {
        let content = Content::user_parts(vec![
            Part::InlineImage(ImagePayload::from_data_uri("Zm9v")),
            Part::Text("describe this".to_string()),
        ]);
        assert_eq!(content.text(), "describe this");
    }
}
