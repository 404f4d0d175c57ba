use super::*;

use crate::llm::types::Message;

fn request(system: &str) -> ChatRequest {
    ChatRequest {
        system: system.into(),
        messages: vec![Message::user("привет")],
        max_tokens: 300,
        temperature: 0.7,
    }
}

// ===== request building =====

#[test]
fn cc_messages_lead_with_system_prompt() {
    let req = request("be brief");
    let msgs = build_chat_completions_messages(&req);
    assert_eq!(
        msgs,
        vec![CcMessage { role: "system", content: "be brief" }, CcMessage { role: "user", content: "привет" }]
    );
}

#[test]
fn cc_messages_skip_blank_system_prompt() {
    let req = request("  ");
    let msgs = build_chat_completions_messages(&req);
    assert_eq!(msgs.len(), 1);
    assert_eq!(msgs[0].role, "user");
}

#[test]
fn cc_request_serializes_sampling_fields() {
    let req = request("sys");
    let msgs = build_chat_completions_messages(&req);
    let body = CcRequest { model: "gpt-4o-mini", max_tokens: 300, temperature: 0.7, messages: &msgs };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["model"], "gpt-4o-mini");
    assert_eq!(json["max_tokens"], 300);
    assert!((json["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    assert_eq!(json["messages"][1]["content"], "привет");
}

// ===== response parsing =====

#[test]
fn cc_parse_text_response() {
    let json = serde_json::json!({
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": "Привет! 👋" },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 10, "completion_tokens": 5 }
    })
    .to_string();
    let resp = parse_chat_completions_response(&json).unwrap();
    assert_eq!(resp.text, "Привет! 👋");
    assert_eq!(resp.model, "gpt-4o-mini");
    assert_eq!(resp.input_tokens, 10);
    assert_eq!(resp.output_tokens, 5);
}

#[test]
fn cc_parse_missing_usage_defaults_to_zero() {
    let json = serde_json::json!({
        "choices": [{ "message": { "role": "assistant", "content": "ok" } }]
    })
    .to_string();
    let resp = parse_chat_completions_response(&json).unwrap();
    assert_eq!(resp.input_tokens, 0);
    assert_eq!(resp.model, "");
}

#[test]
fn cc_parse_missing_choices() {
    let json = serde_json::json!({ "model": "gpt-4o-mini", "choices": [] }).to_string();
    assert!(matches!(parse_chat_completions_response(&json), Err(LlmError::ApiParse(_))));
}

#[test]
fn cc_parse_null_content_is_an_error() {
    let json = serde_json::json!({
        "choices": [{ "message": { "role": "assistant", "content": null } }]
    })
    .to_string();
    assert!(matches!(parse_chat_completions_response(&json), Err(LlmError::ApiParse(_))));
}

#[test]
fn cc_parse_invalid_json() {
    assert!(matches!(parse_chat_completions_response("not json"), Err(LlmError::ApiParse(_))));
}
