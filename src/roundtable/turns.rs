//! Turn generation
//!
//! Combines the persona-grounding system prompt with the turn instruction and
//! issues one completion call per turn.

use crate::domain::models::{MeetingSession, Persona};
use crate::domain::prompts;
use crate::error::Result;
use crate::ports::completion::{ChatMessage, CompletionConfig, CompletionServicePort};
use std::sync::Arc;

/// Produces one persona contribution per call
pub struct TurnGenerator {
    completion: Arc<dyn CompletionServicePort>,
    config: CompletionConfig,
}

impl TurnGenerator {
    pub fn new(completion: Arc<dyn CompletionServicePort>, config: CompletionConfig) -> Self {
        Self { completion, config }
    }

    /// Generate the next contribution for `persona` at the given clock position
    ///
    /// Completion failures propagate unchanged; retries are not attempted at
    /// this layer.
    pub async fn generate(
        &self,
        persona: &Persona,
        session: &MeetingSession,
        reference_context: &str,
        elapsed_minutes: u32,
    ) -> Result<String> {
        let messages = vec![
            ChatMessage::system(prompts::system_prompt(
                persona,
                &session.meeting_question,
                reference_context,
            )),
            ChatMessage::user(prompts::turn_prompt(
                session.entries(),
                elapsed_minutes,
                session.total_duration_minutes,
            )),
        ];

        let response = self.completion.complete(&messages, &self.config).await?;
        Ok(response.text.trim().to_string())
    }
}
