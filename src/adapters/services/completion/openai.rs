//! OpenAI-compatible completion service adapter
//!
//! Implements the CompletionServicePort against a chat-completions endpoint.
//! The adapter owns response unwrapping: call sites only ever see
//! `CompletionText`.

use crate::error::{AppError, Result};
use crate::ports::completion::{
    ChatMessage, CompletionConfig, CompletionServicePort, CompletionText,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// OpenAI-compatible service implementation
pub struct OpenAIService {
    client: Client,
    api_base: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl OpenAIService {
    /// Create a new service with the given API key against the default base URL
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_base: DEFAULT_API_BASE.to_string(),
            api_key,
        }
    }

    /// Point the adapter at a different OpenAI-compatible base URL
    pub fn with_api_base(mut self, api_base: String) -> Self {
        self.api_base = api_base;
        self
    }
}

#[async_trait]
impl CompletionServicePort for OpenAIService {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        config: &CompletionConfig,
    ) -> Result<CompletionText> {
        let request_body = ChatCompletionRequest {
            model: &config.model,
            messages,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        };

        log::info!("Calling chat completion with model: {}", config.model);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AppError::Completion(format!("Chat completion request failed: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Completion(format!(
                "Chat completion failed: {}",
                error_text
            )));
        }

        let completion_response: ChatCompletionResponse = response.json().await.map_err(|e| {
            AppError::Completion(format!("Failed to parse completion response: {}", e))
        })?;

        let choice = completion_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Completion("No completion choices returned".to_string()))?;

        log::info!(
            "Completion successful, generated {} characters",
            choice.message.content.len()
        );

        Ok(CompletionText {
            text: choice.message.content,
        })
    }

    fn provider_name(&self) -> &str {
        "openai"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
