//! Roundtable scheduler
//!
//! Drives one meeting: advances a simulated clock by random steps, picks the
//! next speaker excluding whoever just spoke, and accumulates the transcript.

use crate::domain::models::{MeetingSession, Persona, TranscriptEntry};
use crate::error::{AppError, Result};
use crate::ports::rng::SchedulerRng;
use crate::roundtable::turns::TurnGenerator;
use chrono::{Duration, DurationRound, Utc};

/// Pacing knobs for a simulated meeting
#[derive(Debug, Clone)]
pub struct SchedulerSettings {
    pub total_duration_minutes: u32,
    pub min_step_minutes: u32,
    pub max_step_minutes: u32,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            total_duration_minutes: 120,
            min_step_minutes: 7,
            max_step_minutes: 18,
        }
    }
}

impl SchedulerSettings {
    /// A zero minimum step would stall the clock, so the range must start at 1.
    pub fn validate(&self) -> Result<()> {
        if self.min_step_minutes == 0 {
            return Err(AppError::Config(
                "minimum step must be at least one minute".to_string(),
            ));
        }
        if self.min_step_minutes > self.max_step_minutes {
            return Err(AppError::Config(format!(
                "step range is inverted: {}..{}",
                self.min_step_minutes, self.max_step_minutes
            )));
        }
        Ok(())
    }
}

/// State machine for one roundtable run
pub struct Scheduler<'a> {
    personas: &'a [Persona],
    settings: SchedulerSettings,
}

impl<'a> Scheduler<'a> {
    pub fn new(personas: &'a [Persona], settings: SchedulerSettings) -> Self {
        Self { personas, settings }
    }

    /// Run the meeting to completion
    ///
    /// Terminal state is `elapsed == total`; the final step is clamped so the
    /// last entry always lands exactly on the configured duration. Any turn
    /// failure aborts the whole session.
    pub async fn run(
        &self,
        meeting_question: &str,
        reference_context: &str,
        turns: &TurnGenerator,
        rng: &mut dyn SchedulerRng,
    ) -> Result<MeetingSession> {
        if self.personas.is_empty() {
            return Err(AppError::Config("persona panel is empty".to_string()));
        }
        self.settings.validate()?;

        let now = Utc::now();
        let start_time = now.duration_trunc(Duration::minutes(1)).unwrap_or(now);
        let total = self.settings.total_duration_minutes;
        let mut session = MeetingSession::new(meeting_question, start_time, total);
        let mut elapsed = 0u32;

        while elapsed < total {
            let step =
                rng.step_minutes(self.settings.min_step_minutes, self.settings.max_step_minutes);
            elapsed = (elapsed + step).min(total);
            let timestamp = start_time + Duration::minutes(i64::from(elapsed));

            let persona = self.pick_speaker(session.last_speaker(), rng);
            let content = turns
                .generate(persona, &session, reference_context, elapsed)
                .await?;

            session.record(TranscriptEntry {
                timestamp,
                elapsed_minutes: elapsed,
                speaker_name: persona.name.clone(),
                speaker_title: persona.title.clone(),
                content,
            });
        }

        log::info!(
            "Roundtable complete: {} turns over {} simulated minutes",
            session.entries().len(),
            total
        );
        Ok(session)
    }

    /// Uniform pick among personas excluding the last speaker
    ///
    /// Falls back to the full panel when the exclusion empties the pool,
    /// which only happens with a single-seat panel.
    fn pick_speaker(&self, last_speaker: Option<&str>, rng: &mut dyn SchedulerRng) -> &'a Persona {
        let eligible: Vec<&Persona> = self
            .personas
            .iter()
            .filter(|p| Some(p.name.as_str()) != last_speaker)
            .collect();

        if eligible.is_empty() {
            &self.personas[rng.choose(self.personas.len())]
        } else {
            eligible[rng.choose(eligible.len())]
        }
    }
}
