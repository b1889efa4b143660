use async_trait::async_trait;

use super::error::Result;
use super::types::{ChatRequest, ChatResponse};

/// Anything that can answer a chat completion request.
///
/// `LLMClient` talks to the remote API; tests substitute scripted stubs.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse>;
}

#[async_trait]
impl<T: ChatBackend + ?Sized> ChatBackend for &T {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        (**self).chat(request).await
    }
}
