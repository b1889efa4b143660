//! Scripted backend for unit tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use super::backend::ChatBackend;
use super::error::Result;
use super::types::{AssistantMessage, ChatRequest, ChatResponse, Choice, Role};

/// Replays canned results and records every request it receives
pub(crate) struct ScriptedBackend {
    script: Mutex<VecDeque<Result<ChatResponse>>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedBackend {
    pub(crate) fn new(script: Vec<Result<ChatResponse>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        self.requests.lock().unwrap().push(request.clone());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .expect("backend called more times than scripted")
    }
}

pub(crate) fn response(content: Option<&str>, reasoning: Option<&str>) -> ChatResponse {
    ChatResponse {
        id: None,
        model: None,
        choices: vec![Choice {
            index: 0,
            message: AssistantMessage {
                role: Role::Assistant,
                content: content.map(str::to_string),
                reasoning_content: reasoning.map(str::to_string),
            },
            finish_reason: Some("stop".to_string()),
        }],
        usage: None,
    }
}

pub(crate) fn ok(content: &str) -> Result<ChatResponse> {
    Ok(response(Some(content), None))
}
