use tracing::debug;

use crate::core::Result;
use crate::llm::{FimRequest, FimResponse, LLMClient, LlmError};

const FIB_PROMPT: &str = "def fib(a):";
const FIB_SUFFIX: &str = "    return fib(a-1) + fib(a-2)";
const FIB_MAX_TOKENS: u32 = 128;

/// Fill-in-the-middle request asking for the body of a recursive Fibonacci
pub fn fibonacci_request(model: &str) -> FimRequest {
    FimRequest {
        model: model.to_string(),
        prompt: FIB_PROMPT.to_string(),
        suffix: Some(FIB_SUFFIX.to_string()),
        max_tokens: Some(FIB_MAX_TOKENS),
    }
}

/// Have the beta endpoint complete the middle of the Fibonacci function
pub async fn fibonacci_fim(client: &LLMClient) -> Result<FimResponse> {
    let request = fibonacci_request(client.chat_model());
    let response = client.complete_fim(&request).await?;

    if response.choices.is_empty() {
        return Err(LlmError::EmptyResponse.into());
    }

    debug!(choices = response.choices.len(), "FIM completion received");
    Ok(response)
}
