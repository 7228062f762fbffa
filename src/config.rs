//! Runtime configuration
//!
//! Every knob is settable as a flag or an environment variable.

use crate::error::{AppError, Result};
use crate::ports::completion::CompletionConfig;
use crate::roundtable::SchedulerSettings;
use clap::Parser;
use std::path::PathBuf;

/// Simulated executive roundtable service
#[derive(Debug, Parser)]
#[command(name = "roundtable", version, about)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    #[arg(long, env = "ROUNDTABLE_BIND_ADDR", default_value = "127.0.0.1:8000")]
    pub bind_addr: String,

    /// Reference document grounding every contribution
    #[arg(
        long,
        env = "ROUNDTABLE_REFERENCE_PATH",
        default_value = "artifacts/day1_prd.md"
    )]
    pub reference_path: PathBuf,

    /// Directory meeting artifacts are written under
    #[arg(
        long,
        env = "ROUNDTABLE_ARTIFACT_DIR",
        default_value = "artifacts/agent_meetings"
    )]
    pub artifact_dir: PathBuf,

    /// Base URL of the OpenAI-compatible completion API
    #[arg(
        long,
        env = "ROUNDTABLE_API_BASE",
        default_value = "https://api.openai.com/v1"
    )]
    pub api_base: String,

    /// API key for the completion service
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, default_value = "")]
    pub api_key: String,

    /// Chat model used for turns and the briefing
    #[arg(long, env = "ROUNDTABLE_MODEL", default_value = "gpt-4o")]
    pub model: String,

    /// Sampling temperature
    #[arg(long, env = "ROUNDTABLE_TEMPERATURE", default_value_t = 0.6)]
    pub temperature: f32,

    /// Maximum tokens per completion
    #[arg(long, env = "ROUNDTABLE_MAX_TOKENS", default_value_t = 2000)]
    pub max_tokens: u32,

    /// Simulated meeting length in minutes
    #[arg(long, env = "ROUNDTABLE_DURATION_MINUTES", default_value_t = 120)]
    pub duration_minutes: u32,

    /// Smallest simulated gap between turns, in minutes
    #[arg(long, env = "ROUNDTABLE_MIN_STEP_MINUTES", default_value_t = 7)]
    pub min_step_minutes: u32,

    /// Largest simulated gap between turns, in minutes
    #[arg(long, env = "ROUNDTABLE_MAX_STEP_MINUTES", default_value_t = 18)]
    pub max_step_minutes: u32,

    /// Shell command launching the dashboard UI alongside the server
    #[arg(long, env = "ROUNDTABLE_DASHBOARD_CMD")]
    pub dashboard_command: Option<String>,
}

impl AppConfig {
    /// Reject configurations the scheduler or the completion adapter cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(AppError::Config(
                "completion API key is not set (OPENAI_API_KEY)".to_string(),
            ));
        }
        self.scheduler_settings().validate()
    }

    pub fn scheduler_settings(&self) -> SchedulerSettings {
        SchedulerSettings {
            total_duration_minutes: self.duration_minutes,
            min_step_minutes: self.min_step_minutes,
            max_step_minutes: self.max_step_minutes,
        }
    }

    pub fn completion_config(&self) -> CompletionConfig {
        CompletionConfig {
            model: self.model.clone(),
            temperature: Some(self.temperature),
            max_tokens: Some(self.max_tokens),
        }
    }
}
