//! Mock implementations for testing

use crate::domain::models::TranscriptDocument;
use crate::error::{AppError, Result};
use crate::ports::artifacts::{ArtifactPaths, ArtifactStorePort};
use crate::ports::completion::{ChatMessage, CompletionConfig, CompletionServicePort, CompletionText};
use crate::ports::rng::SchedulerRng;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Mutex;

/// Deterministic rng cycling over scripted step and pick sequences
pub struct ScriptedRng {
    steps: Vec<u32>,
    picks: Vec<usize>,
    step_cursor: usize,
    pick_cursor: usize,
}

impl ScriptedRng {
    pub fn new(steps: Vec<u32>, picks: Vec<usize>) -> Self {
        Self {
            steps,
            picks,
            step_cursor: 0,
            pick_cursor: 0,
        }
    }
}

impl SchedulerRng for ScriptedRng {
    fn step_minutes(&mut self, min: u32, max: u32) -> u32 {
        let step = self.steps[self.step_cursor % self.steps.len()];
        self.step_cursor += 1;
        step.clamp(min, max)
    }

    fn choose(&mut self, len: usize) -> usize {
        let pick = self.picks[self.pick_cursor % self.picks.len()];
        self.pick_cursor += 1;
        pick % len
    }
}

/// Mock completion service returning numbered canned contributions
///
/// Optionally fails on the nth call (1-based) to exercise abort paths.
#[derive(Default)]
pub struct ScriptedCompletion {
    calls: Mutex<u32>,
    fail_at: Option<u32>,
    captured: Mutex<Vec<Vec<ChatMessage>>>,
}

impl ScriptedCompletion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(call: u32) -> Self {
        Self {
            fail_at: Some(call),
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> u32 {
        *self.calls.lock().unwrap()
    }

    pub fn captured_exchanges(&self) -> Vec<Vec<ChatMessage>> {
        self.captured.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionServicePort for ScriptedCompletion {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        _config: &CompletionConfig,
    ) -> Result<CompletionText> {
        let count = {
            let mut calls = self.calls.lock().unwrap();
            *calls += 1;
            *calls
        };
        self.captured.lock().unwrap().push(messages.to_vec());

        if self.fail_at == Some(count) {
            return Err(AppError::Completion("quota exceeded".to_string()));
        }
        Ok(CompletionText {
            text: format!("  contribution {}  ", count),
        })
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }

    fn is_configured(&self) -> bool {
        true
    }
}

/// In-memory artifact store recording what would have been written
#[derive(Default)]
pub struct MemoryArtifactStore {
    persisted: Mutex<Vec<(TranscriptDocument, String)>>,
}

impl MemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn persisted_count(&self) -> usize {
        self.persisted.lock().unwrap().len()
    }

    pub fn last_persisted(&self) -> Option<(TranscriptDocument, String)> {
        self.persisted.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ArtifactStorePort for MemoryArtifactStore {
    async fn persist(
        &self,
        document: &TranscriptDocument,
        summary_text: &str,
    ) -> Result<ArtifactPaths> {
        self.persisted
            .lock()
            .unwrap()
            .push((document.clone(), summary_text.to_string()));
        Ok(ArtifactPaths {
            transcript_path: PathBuf::from("memory/meeting.json"),
            summary_path: PathBuf::from("memory/meeting.md"),
        })
    }
}
