//! Briefing synthesis
//!
//! One completion call over the full transcript produces the markdown
//! briefing. Runs even for an empty transcript, which renders as the
//! placeholder sentinel.

use crate::domain::models::MeetingSession;
use crate::domain::prompts;
use crate::error::Result;
use crate::ports::completion::{ChatMessage, CompletionConfig, CompletionServicePort};
use std::sync::Arc;

/// Produces the structured briefing for a completed session
pub struct Summarizer {
    completion: Arc<dyn CompletionServicePort>,
    config: CompletionConfig,
}

impl Summarizer {
    pub fn new(completion: Arc<dyn CompletionServicePort>, config: CompletionConfig) -> Self {
        Self { completion, config }
    }

    /// Summarize the session; failure semantics match turn generation
    pub async fn summarize(
        &self,
        session: &MeetingSession,
        reference_context: &str,
    ) -> Result<String> {
        let messages = vec![
            ChatMessage::system(prompts::summary_system_prompt().to_string()),
            ChatMessage::user(prompts::summary_user_prompt(
                &session.meeting_question,
                reference_context,
                session.entries(),
            )),
        ];

        let response = self.completion.complete(&messages, &self.config).await?;
        Ok(response.text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prompts::EMPTY_TRANSCRIPT_SENTINEL;
    use crate::ports::mocks::ScriptedCompletion;
    use chrono::Utc;

    #[tokio::test]
    async fn test_summarize_sends_transcript_and_trims() {
        let completion = Arc::new(ScriptedCompletion::new());
        let summarizer = Summarizer::new(completion.clone(), CompletionConfig::default());
        let session = MeetingSession::new("question", Utc::now(), 0);

        let summary = summarizer.summarize(&session, "ctx").await.unwrap();
        assert_eq!(summary, "contribution 1");

        let exchange = &completion.captured_exchanges()[0];
        assert_eq!(exchange[0].role, "system");
        assert!(exchange[0].content.contains("Meeting Overview"));
        assert!(exchange[1].content.contains(EMPTY_TRANSCRIPT_SENTINEL));
    }

    #[tokio::test]
    async fn test_summarize_propagates_completion_error() {
        let completion = Arc::new(ScriptedCompletion::failing_at(1));
        let summarizer = Summarizer::new(completion, CompletionConfig::default());
        let session = MeetingSession::new("question", Utc::now(), 0);

        let err = summarizer.summarize(&session, "ctx").await.unwrap_err();
        assert_eq!(err.to_string(), "Completion service error: quota exceeded");
    }
}
