//! Roundtable orchestration
//!
//! One session runs sequentially: load the reference document, drive the
//! scheduler, summarize, persist. The reference document is read before any
//! network call so a missing prerequisite aborts cheaply.

pub mod scheduler;
pub mod summarizer;
pub mod turns;

pub use scheduler::{Scheduler, SchedulerSettings};
pub use summarizer::Summarizer;
pub use turns::TurnGenerator;

use crate::domain::models::{Persona, TranscriptDocument};
use crate::error::{AppError, Result};
use crate::ports::artifacts::ArtifactStorePort;
use crate::ports::completion::{CompletionConfig, CompletionServicePort};
use crate::ports::rng::SchedulerRng;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Question used when the request does not carry one
pub const DEFAULT_MEETING_QUESTION: &str = "Given the product requirements document, which customer segments should we prioritize for launch, and how should product, pricing, and positioning evolve over the next year to win those segments?";

/// What a completed session hands back to the HTTP boundary
#[derive(Debug, Clone, Serialize)]
pub struct SessionOutcome {
    pub summary: String,
    pub summary_path: String,
    pub transcript_path: String,
}

/// Wires the panel, pacing, generation, and persistence for session runs
pub struct RoundtableService {
    personas: Vec<Persona>,
    settings: SchedulerSettings,
    turns: TurnGenerator,
    summarizer: Summarizer,
    artifacts: Arc<dyn ArtifactStorePort>,
    reference_path: PathBuf,
}

impl RoundtableService {
    pub fn new(
        personas: Vec<Persona>,
        settings: SchedulerSettings,
        completion: Arc<dyn CompletionServicePort>,
        completion_config: CompletionConfig,
        artifacts: Arc<dyn ArtifactStorePort>,
        reference_path: PathBuf,
    ) -> Self {
        Self {
            personas,
            settings,
            turns: TurnGenerator::new(completion.clone(), completion_config.clone()),
            summarizer: Summarizer::new(completion, completion_config),
            artifacts,
            reference_path,
        }
    }

    /// Run one complete session from reference load to artifact persistence
    pub async fn run_session(
        &self,
        meeting_question: &str,
        rng: &mut dyn SchedulerRng,
    ) -> Result<SessionOutcome> {
        let reference_context = self.load_reference()?;
        log::info!("Starting roundtable session: {}", meeting_question);

        let scheduler = Scheduler::new(&self.personas, self.settings.clone());
        let session = scheduler
            .run(meeting_question, &reference_context, &self.turns, rng)
            .await?;

        let summary = self
            .summarizer
            .summarize(&session, &reference_context)
            .await?;

        let document = TranscriptDocument::from_session(&session, &self.personas);
        let paths = self.artifacts.persist(&document, &summary).await?;

        Ok(SessionOutcome {
            summary,
            summary_path: paths.summary_path.display().to_string(),
            transcript_path: paths.transcript_path.display().to_string(),
        })
    }

    fn load_reference(&self) -> Result<String> {
        if !self.reference_path.exists() {
            return Err(AppError::MissingReference(self.reference_path.clone()));
        }
        Ok(std::fs::read_to_string(&self.reference_path)?)
    }
}
