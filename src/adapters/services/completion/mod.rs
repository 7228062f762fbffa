//! Completion service adapters
//!
//! Implementations of the CompletionServicePort. The OpenAI adapter speaks
//! the chat-completions wire contract, so any compatible endpoint works
//! through the configurable base URL.

pub mod openai;

pub use openai::OpenAIService;
