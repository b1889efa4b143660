use tracing::info;

use crate::core::{Result, SeekError};
use crate::llm::{ChatBackend, Message};
use crate::session::{self, ConversationSession, Reply};

const REASONING_QUESTIONS: [&str; 2] = [
    "9.11 and 9.8, which is greater?",
    "How many Rs are there in the word 'strawberry'?",
];

const MOUNTAIN_QUESTIONS: [&str; 2] = [
    "What's the highest mountain in the world?",
    "What is the second?",
];

/// Outcome of a two-round conversation
#[derive(Debug, Clone)]
pub struct Conversation {
    pub first: Reply,
    pub second: Reply,
    pub transcript: Vec<Message>,
}

/// Two rounds against a reasoning model. The first round's reasoning trace is
/// in `first.reasoning_content`.
pub async fn reasoning_rounds<B: ChatBackend>(backend: B, model: &str) -> Result<Conversation> {
    two_rounds(backend, model, REASONING_QUESTIONS)
        .await
        .map_err(|e| SeekError::in_demo("reasoning rounds", e))
}

/// Two rounds about mountains; the second question only makes sense with the
/// first answer in context.
pub async fn mountain_conversation<B: ChatBackend>(backend: B, model: &str) -> Result<Conversation> {
    two_rounds(backend, model, MOUNTAIN_QUESTIONS)
        .await
        .map_err(|e| SeekError::in_demo("mountain conversation", e))
}

async fn two_rounds<B: ChatBackend>(
    backend: B,
    model: &str,
    questions: [&str; 2],
) -> session::Result<Conversation> {
    let mut session = ConversationSession::new(backend, model);

    let first = session.advance(questions[0]).await?;
    info!(transcript = ?session.transcript(), "Messages round 1");

    let second = session.advance(questions[1]).await?;
    info!(transcript = ?session.transcript(), "Messages round 2");

    Ok(Conversation {
        first,
        second,
        transcript: session.into_transcript(),
    })
}
