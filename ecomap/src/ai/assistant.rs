//! Assistant gateway.
//!
//! Mediates every call to the hosted generative-AI service behind two
//! operations, hiding session management and response parsing from the
//! caller. Upstream failures never escape: the chat operation degrades to a
//! fixed apology, the analysis operation to a fixed fallback record.

use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::ai::backend::{Content, GenerateRequest, GenerativeBackend, Part};
use crate::ai::gemini::{AiError, GeminiClient};
use crate::ai::prompts;
use crate::config::GatewayConfig;
use crate::item::ItemAnalysis;
use crate::media::ImagePayload;

/// User-facing reply substituted when a chat request fails.
pub const CHAT_APOLOGY: &str =
    "Désolé, je rencontre un problème technique pour le moment. Veuillez réessayer dans quelques instants.";

/// User-facing reply substituted when the upstream returns an empty text.
pub const EMPTY_REPLY_FALLBACK: &str =
    "Désolé, je n'ai pas pu formuler de réponse. Pouvez-vous reformuler votre question ?";

const CHAT_TEMPERATURE: f32 = 0.6;
// Low temperature for consistent structured output
const ANALYSIS_TEMPERATURE: f32 = 0.1;

struct ChatSession {
    id: Uuid,
    history: Vec<Content>,
}

impl ChatSession {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            history: Vec::new(),
        }
    }
}

/// Gateway owning the conversational session and the single-shot analysis
/// request.
///
/// The session is created lazily on the first [`Assistant::send_message`] and
/// reused for the rest of the process lifetime (or until
/// [`Assistant::reset_session`]). Session creation and turn append are
/// serialized behind a mutex so racing callers cannot interleave half-turns.
pub struct Assistant {
    backend: Arc<dyn GenerativeBackend>,
    session: Mutex<Option<ChatSession>>,
}

impl Assistant {
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self {
            backend,
            session: Mutex::new(None),
        }
    }

    /// Build a gateway backed by the hosted Gemini service.
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::new(Arc::new(GeminiClient::from_config(config)))
    }

    /// Send one user utterance through the conversational session and return
    /// the assistant's reply.
    ///
    /// The result is guaranteed non-empty. Transport and service errors are
    /// logged and converted to [`CHAT_APOLOGY`]; an empty upstream reply is
    /// substituted with [`EMPTY_REPLY_FALLBACK`]. The chat surface never
    /// shows a raw error to the end user.
    pub async fn send_message(&self, text: &str) -> String {
        match self.try_send_message(text).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!("chat request failed: {}", e);
                CHAT_APOLOGY.to_string()
            }
        }
    }

    async fn try_send_message(&self, text: &str) -> Result<String, AiError> {
        let mut guard = self.session.lock().await;
        let session = guard.get_or_insert_with(|| {
            tracing::debug!("creating chat session");
            ChatSession::new()
        });

        let mut contents = session.history.clone();
        contents.push(Content::user_text(text));

        let request = GenerateRequest {
            system_instruction: Some(prompts::SYSTEM_INSTRUCTION.to_string()),
            contents,
            temperature: Some(CHAT_TEMPERATURE),
        };

        let reply = self.backend.generate(request).await?;

        // Only a completed exchange advances the history; a failed call must
        // not desynchronize the context sent on the next turn.
        session.history.push(Content::user_text(text));
        session.history.push(Content::model_text(reply.clone()));

        if reply.trim().is_empty() {
            Ok(EMPTY_REPLY_FALLBACK.to_string())
        } else {
            Ok(reply)
        }
    }

    /// Classify a photographed item for resale.
    ///
    /// Accepts a data-URI-style encoded image (any `data:image/<fmt>;base64,`
    /// prefix is stripped before transmission) and returns a validated
    /// [`ItemAnalysis`]. On any transport error, service error or parse
    /// failure the fixed [`ItemAnalysis::unavailable`] record is returned so
    /// the caller always has a usable record to populate a form.
    pub async fn analyze_item(&self, image_data: &str) -> ItemAnalysis {
        match self.try_analyze_item(image_data).await {
            Ok(analysis) => analysis,
            Err(e) => {
                tracing::warn!("item analysis failed: {}", e);
                ItemAnalysis::unavailable()
            }
        }
    }

    async fn try_analyze_item(&self, image_data: &str) -> Result<ItemAnalysis, AiError> {
        let image = ImagePayload::from_data_uri(image_data);
        let request = GenerateRequest {
            system_instruction: None,
            contents: vec![Content::user_parts(vec![
                Part::InlineImage(image),
                Part::Text(prompts::ANALYSIS_INSTRUCTION.to_string()),
            ])],
            temperature: Some(ANALYSIS_TEMPERATURE),
        };

        let reply = self.backend.generate(request).await?;
        parse_item_analysis(&reply)
    }

    /// Identity of the active session, `None` before the first message.
    pub async fn session_id(&self) -> Option<Uuid> {
        self.session.lock().await.as_ref().map(|s| s.id)
    }

    /// Drop the active session; the next message starts a fresh one.
    pub async fn reset_session(&self) {
        let mut guard = self.session.lock().await;
        if guard.take().is_some() {
            tracing::debug!("chat session reset");
        }
    }
}

/// Parse a raw model reply into a validated [`ItemAnalysis`].
///
/// The reply may be wrapped in a markdown code fence; any fencing is stripped
/// before the structured parse. Parsing is strict: invalid or incomplete
/// JSON, an unrecognized category, or a non-positive weight is an error, not
/// a partial result.
pub fn parse_item_analysis(reply: &str) -> Result<ItemAnalysis, AiError> {
    let json = extract_json_from_text(reply);

    let analysis: ItemAnalysis = serde_json::from_str(&json)
        .map_err(|e| AiError::ParseError(format!("Failed to parse item analysis: {}", e)))?;

    if !analysis.is_valid() {
        return Err(AiError::InvalidResponse(format!(
            "weight must be a positive number of kilograms, got {}",
            analysis.weight_kg
        )));
    }

    Ok(analysis)
}

fn extract_json_from_text(text: &str) -> String {
    let text = text.trim();

    // Check if wrapped in markdown code block
    if let Some(start) = text.find("```json") {
        if let Some(end) = text.rfind("```") {
            if end > start + 7 {
                return text[start + 7..end].trim().to_string();
            }
        }
    }

    // Check if wrapped in regular code block
    if let Some(start) = text.find("```") {
        if let Some(end) = text.rfind("```") {
            if end > start + 3 {
                let content = &text[start + 3..end];
                if content.trim().starts_with('{') {
                    return content.trim().to_string();
                }
            }
        }
    }

    // Try to find JSON object boundaries
    if let Some(start) = text.find('{') {
        if let Some(end) = text.rfind('}') {
            if end >= start {
                return text[start..=end].to_string();
            }
        }
    }

    // If no JSON found, return original text (will fail parsing but that's ok)
    text.to_string()
}
