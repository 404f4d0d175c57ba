//! AI reply generation for `/api/chat`.
//!
//! DESIGN
//! ======
//! One visitor message in, one short reply out. There is no conversation
//! history: every call sends the fixed persona prompt and the single message.
//! Without a configured LLM the service answers with a fixed nudge instead of
//! failing, so the endpoint stays usable in demos.

#[cfg(test)]
#[path = "reply_test.rs"]
mod reply_test;

use tracing::{debug, info};

use crate::llm::LlmChat;
use crate::llm::types::{ChatRequest, LlmError, Message};

pub const SYSTEM_PROMPT: &str =
    "Ты дружелюбный AI чат-бот. Отвечай коротко и по делу, используй эмодзи. Будь полезным и позитивным.";
pub const OFFLINE_REPLY: &str = "🤔 Интересно! Расскажи подробнее. (Подключи OpenAI API ключ для полноценной работы)";
pub const MAX_TOKENS: u32 = 300;
pub const TEMPERATURE: f32 = 0.7;

/// The completion request sent for one visitor message.
#[must_use]
pub fn build_request(message: &str) -> ChatRequest {
    ChatRequest {
        system: SYSTEM_PROMPT.to_string(),
        messages: vec![Message::user(message)],
        max_tokens: MAX_TOKENS,
        temperature: TEMPERATURE,
    }
}

/// Answer `message`, or return [`OFFLINE_REPLY`] when no LLM is configured.
///
/// # Errors
///
/// Propagates the LLM's error when a configured model call fails.
pub async fn generate_reply(llm: Option<&dyn LlmChat>, message: &str) -> Result<String, LlmError> {
    let Some(llm) = llm else {
        debug!("no LLM configured; sending offline reply");
        return Ok(OFFLINE_REPLY.to_string());
    };

    let response = llm.chat(&build_request(message)).await?;
    info!(
        model = %response.model,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "chat reply generated"
    );
    Ok(response.text)
}
