//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! only shared dependency is the optional LLM client; when it is `None` the
//! chat endpoint answers with its offline reply.

use std::sync::Arc;

use crate::llm::LlmChat;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone, Default)]
pub struct AppState {
    pub llm: Option<Arc<dyn LlmChat>>,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>) -> Self {
        Self { llm }
    }
}
