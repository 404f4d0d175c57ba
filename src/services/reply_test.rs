use std::sync::Mutex;

use super::*;
use crate::llm::types::ChatResponse;

// =========================================================================
// MockLlm
// =========================================================================

struct MockLlm {
    reply: Result<String, String>,
    seen: Mutex<Vec<ChatRequest>>,
}

impl MockLlm {
    fn answering(text: &str) -> Self {
        Self { reply: Ok(text.into()), seen: Mutex::new(Vec::new()) }
    }

    fn failing(detail: &str) -> Self {
        Self { reply: Err(detail.into()), seen: Mutex::new(Vec::new()) }
    }
}

#[async_trait::async_trait]
impl LlmChat for MockLlm {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        self.seen.lock().unwrap().push(request.clone());
        match &self.reply {
            Ok(text) => Ok(ChatResponse { text: text.clone(), model: "mock".into(), input_tokens: 3, output_tokens: 2 }),
            Err(detail) => Err(LlmError::ApiRequest(detail.clone())),
        }
    }
}

// =========================================================================
// build_request
// =========================================================================

#[test]
fn request_carries_persona_and_sampling() {
    let req = build_request("как дела?");
    assert_eq!(req.system, SYSTEM_PROMPT);
    assert_eq!(req.messages, vec![Message::user("как дела?")]);
    assert_eq!(req.max_tokens, 300);
    assert!((req.temperature - 0.7).abs() < f32::EPSILON);
}

// =========================================================================
// generate_reply
// =========================================================================

#[tokio::test]
async fn without_llm_returns_offline_reply() {
    let reply = generate_reply(None, "привет").await.unwrap();
    assert_eq!(reply, OFFLINE_REPLY);
}

#[tokio::test]
async fn with_llm_returns_model_text() {
    let mock = MockLlm::answering("Привет! 🎉");
    let reply = generate_reply(Some(&mock), "привет").await.unwrap();
    assert_eq!(reply, "Привет! 🎉");

    let seen = mock.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].messages[0].content, "привет");
}

#[tokio::test]
async fn llm_failure_propagates() {
    let mock = MockLlm::failing("connection reset");
    let err = generate_reply(Some(&mock), "привет").await.unwrap_err();
    assert_eq!(err.to_string(), "API request failed: connection reset");
}
