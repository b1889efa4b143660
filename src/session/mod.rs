//! Multi-round conversation state.
//!
//! A transcript grows by one `user` turn and one `assistant` turn per round and
//! is resubmitted in full on every round. Reasoning traces are handed back to
//! the caller but never enter the transcript.

pub mod error;

use tracing::debug;

use crate::llm::{ChatBackend, ChatRequest, ChatResponse, LlmError, Message, Role};

pub use error::{Result, SessionError};

/// Assistant output of one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub content: String,
    /// Present only for reasoning models
    pub reasoning_content: Option<String>,
}

/// Result of a single `advance`
#[derive(Debug, Clone)]
pub struct Round {
    pub transcript: Vec<Message>,
    pub reply: Reply,
}

/// Run one round against `backend` without touching the caller's transcript.
///
/// On success the returned transcript is `transcript` plus the new `user`
/// turn and the assistant's answer. On failure nothing is appended anywhere.
pub async fn advance<B: ChatBackend + ?Sized>(
    backend: &B,
    model: &str,
    transcript: &[Message],
    user_text: &str,
) -> Result<Round> {
    if user_text.trim().is_empty() {
        return Err(SessionError::EmptyInput);
    }

    let round = transcript
        .iter()
        .filter(|m| m.role == Role::Assistant)
        .count()
        + 1;

    let mut messages = Vec::with_capacity(transcript.len() + 2);
    messages.extend_from_slice(transcript);
    messages.push(Message::user(user_text));
    let request = ChatRequest::new(model, messages);

    debug!(round, turns = request.messages.len(), model, "Advancing conversation");

    let reply = backend
        .chat(&request)
        .await
        .and_then(first_reply)
        .map_err(|source| SessionError::RemoteCallFailed { round, source })?;

    let mut transcript = request.messages;
    transcript.push(Message::assistant(reply.content.clone()));

    Ok(Round { transcript, reply })
}

/// Take the first candidate. No candidates, or a candidate without content,
/// counts as a failed call.
fn first_reply(response: ChatResponse) -> crate::llm::error::Result<Reply> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(LlmError::EmptyResponse)?;

    let content = choice.message.content.ok_or_else(|| {
        LlmError::InvalidResponse("assistant message has no content".to_string())
    })?;

    Ok(Reply {
        content,
        reasoning_content: choice.message.reasoning_content.filter(|r| !r.is_empty()),
    })
}

/// Owns a transcript and extends it one round at a time
pub struct ConversationSession<B> {
    backend: B,
    model: String,
    transcript: Vec<Message>,
}

impl<B: ChatBackend> ConversationSession<B> {
    /// Session with an empty transcript
    pub fn new(backend: B, model: impl Into<String>) -> Self {
        Self::seeded(backend, model, Vec::new())
    }

    /// Session starting from an existing transcript
    pub fn seeded(backend: B, model: impl Into<String>, transcript: Vec<Message>) -> Self {
        Self {
            backend,
            model: model.into(),
            transcript,
        }
    }

    /// Put a system turn at the head of the transcript
    pub fn with_system(mut self, prompt: impl Into<String>) -> Self {
        self.transcript.insert(0, Message::system(prompt));
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn into_transcript(self) -> Vec<Message> {
        self.transcript
    }

    /// Number of completed rounds
    pub fn rounds(&self) -> usize {
        self.transcript
            .iter()
            .filter(|m| m.role == Role::Assistant)
            .count()
    }

    /// Submit `user_text` with the whole transcript. The transcript is only
    /// replaced once a reply has been received.
    pub async fn advance(&mut self, user_text: &str) -> Result<Reply> {
        let round = advance(&self.backend, &self.model, &self.transcript, user_text).await?;
        self.transcript = round.transcript;
        Ok(round.reply)
    }
}
