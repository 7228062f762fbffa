/// Domain layer - core business models
///
/// These models are transport-agnostic and represent core business entities.
pub mod models;
pub mod personas;
pub mod prompts;

pub use models::{MeetingSession, Persona, TranscriptDocument, TranscriptEntry};
pub use personas::default_panel;
