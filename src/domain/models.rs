/// Domain models for the roundtable service
///
/// These models represent core business entities and carry no transport or
/// provider concerns.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fixed roundtable participant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Persona {
    pub name: String,
    pub title: String,
    pub goal: String,
    pub backstory: String,
}

impl Persona {
    /// Creates a new persona record
    pub fn new(name: &str, title: &str, goal: &str, backstory: &str) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            goal: goal.to_string(),
            backstory: backstory.to_string(),
        }
    }
}

/// One persona's contribution to the meeting transcript
///
/// Immutable once recorded; serialized field names match the persisted
/// transcript payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub timestamp: DateTime<Utc>,
    pub elapsed_minutes: u32,
    #[serde(rename = "speaker")]
    pub speaker_name: String,
    #[serde(rename = "title")]
    pub speaker_title: String,
    pub content: String,
}

/// Represents one roundtable run from start to artifact persistence
///
/// Owns the transcript sequence exclusively for the lifetime of the session.
#[derive(Debug, Clone)]
pub struct MeetingSession {
    pub meeting_question: String,
    pub start_time: DateTime<Utc>,
    pub total_duration_minutes: u32,
    entries: Vec<TranscriptEntry>,
    last_speaker: Option<String>,
}

impl MeetingSession {
    /// Creates an empty session at minute zero
    pub fn new(
        meeting_question: &str,
        start_time: DateTime<Utc>,
        total_duration_minutes: u32,
    ) -> Self {
        Self {
            meeting_question: meeting_question.to_string(),
            start_time,
            total_duration_minutes,
            entries: Vec::new(),
            last_speaker: None,
        }
    }

    /// Appends an entry and remembers its speaker for exclusion next turn
    pub fn record(&mut self, entry: TranscriptEntry) {
        self.last_speaker = Some(entry.speaker_name.clone());
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn last_speaker(&self) -> Option<&str> {
        self.last_speaker.as_deref()
    }
}

/// Structured transcript payload persisted alongside the briefing text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptDocument {
    pub meeting_question: String,
    pub generated_at: DateTime<Utc>,
    pub duration_minutes: u32,
    pub participants: Vec<Persona>,
    pub messages: Vec<TranscriptEntry>,
}

impl TranscriptDocument {
    /// Builds the write-once document from a completed session
    pub fn from_session(session: &MeetingSession, participants: &[Persona]) -> Self {
        Self {
            meeting_question: session.meeting_question.clone(),
            generated_at: Utc::now(),
            duration_minutes: session.total_duration_minutes,
            participants: participants.to_vec(),
            messages: session.entries().to_vec(),
        }
    }
}
