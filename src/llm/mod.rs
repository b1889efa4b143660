pub mod backend;
pub mod client;
pub mod error;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::ChatBackend;
pub use client::LLMClient;
pub use error::LlmError;
pub use types::{
    AssistantMessage, ChatRequest, ChatResponse, Choice, FimChoice, FimRequest, FimResponse,
    Message, ModelInfo, ModelList, Role, Usage,
};
