use crate::core::Result;
use crate::llm::ChatBackend;
use crate::session::{ConversationSession, Reply};

pub const DEFAULT_VERSE: &str = "Proverbs 17:3";

const BIBLE_EXPERT_PROMPT: &str = "You are a bible study expert. When you are given a bible verse, you will provide a summary of the verse that is easy to understand.";

/// Ask for a plain-language explanation of a bible verse
pub async fn explain_bible_verse<B: ChatBackend>(backend: B, model: &str, verse: &str) -> Result<Reply> {
    let mut session = ConversationSession::new(backend, model).with_system(BIBLE_EXPERT_PROMPT);

    let reply = session
        .advance(&format!("Explain the meaning of the bible verse: {}", verse))
        .await?;

    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SeekError;
    use crate::llm::testing::{ok, ScriptedBackend};
    use crate::llm::{LlmError, Message, Role};

    #[tokio::test]
    async fn test_explain_sends_system_and_user_turns() {
        let backend = ScriptedBackend::new(vec![ok("The Lord tests the heart.")]);

        let reply = explain_bible_verse(&backend, "deepseek-chat", DEFAULT_VERSE)
            .await
            .unwrap();
        assert_eq!(reply.content, "The Lord tests the heart.");

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].messages,
            vec![
                Message::system(BIBLE_EXPERT_PROMPT),
                Message::user("Explain the meaning of the bible verse: Proverbs 17:3"),
            ]
        );
    }

    #[tokio::test]
    async fn test_explain_propagates_failure() {
        let backend = ScriptedBackend::new(vec![Err(LlmError::RateLimitExceeded)]);

        let err = explain_bible_verse(&backend, "deepseek-chat", "John 3:16")
            .await
            .unwrap_err();
        assert!(matches!(err, SeekError::Session(_)));
        assert_eq!(backend.requests()[0].messages[0].role, Role::System);
    }
}
