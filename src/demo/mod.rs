//! The demo tasks. Each one is a plain async function over a backend or
//! client and returns its results for the caller to print.

mod fim;
mod rounds;
mod verse;

pub use fim::{fibonacci_fim, fibonacci_request};
pub use rounds::{mountain_conversation, reasoning_rounds, Conversation};
pub use verse::{explain_bible_verse, DEFAULT_VERSE};

use crate::core::Result;
use crate::llm::{LLMClient, ModelInfo};

/// Fetch every model the API key can use
pub async fn list_models(client: &LLMClient) -> Result<Vec<ModelInfo>> {
    let models = client.list_models().await?;
    Ok(models.data)
}
