/// Completion service port trait
///
/// Defines the interface for text-completion services.
/// Implementations: OpenAI-compatible chat APIs.
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single role-tagged message in a completion exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: String) -> Self {
        Self {
            role: "system".to_string(),
            content,
        }
    }

    pub fn user(content: String) -> Self {
        Self {
            role: "user".to_string(),
            content,
        }
    }
}

/// Completion response reduced to its text payload
///
/// Adapters are responsible for unwrapping provider response shapes into this
/// type; call sites never inspect anything else.
#[derive(Debug, Clone)]
pub struct CompletionText {
    pub text: String,
}

/// Configuration for completion requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Model name (e.g., "gpt-4o")
    pub model: String,

    /// Temperature for generation (0.0 to 1.0)
    pub temperature: Option<f32>,

    /// Maximum tokens in response
    pub max_tokens: Option<u32>,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o".to_string(),
            temperature: Some(0.6),
            max_tokens: Some(2000),
        }
    }
}

/// Port trait for completion services
#[async_trait]
pub trait CompletionServicePort: Send + Sync {
    /// Issue one completion call over a message-list exchange
    async fn complete(
        &self,
        messages: &[ChatMessage],
        config: &CompletionConfig,
    ) -> Result<CompletionText>;

    /// Get the provider name
    fn provider_name(&self) -> &str;

    /// Check if the service is configured (has API key)
    fn is_configured(&self) -> bool;
}
