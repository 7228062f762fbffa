//! Filesystem artifact store
//!
//! Writes each completed session as a timestamp-stemmed file pair under the
//! artifact directory: `meeting_<UTC-timestamp>.json` (structured transcript)
//! and `meeting_<UTC-timestamp>.md` (briefing text).

use crate::domain::models::TranscriptDocument;
use crate::error::Result;
use crate::ports::artifacts::{ArtifactPaths, ArtifactStorePort};
use async_trait::async_trait;
use std::path::PathBuf;

const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Flat-file artifact store
///
/// Stems are derived from the document's generation instant; two sessions
/// stamped within the same second would collide, which is not defended
/// against.
pub struct FsArtifactStore {
    dir: PathBuf,
}

impl FsArtifactStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

#[async_trait]
impl ArtifactStorePort for FsArtifactStore {
    async fn persist(
        &self,
        document: &TranscriptDocument,
        summary_text: &str,
    ) -> Result<ArtifactPaths> {
        std::fs::create_dir_all(&self.dir)?;

        let stem = format!(
            "meeting_{}",
            document.generated_at.format(TIMESTAMP_FORMAT)
        );
        let transcript_path = self.dir.join(format!("{}.json", stem));
        let summary_path = self.dir.join(format!("{}.md", stem));

        let payload = serde_json::to_string_pretty(document)?;
        std::fs::write(&transcript_path, payload)?;
        std::fs::write(&summary_path, summary_text)?;

        log::info!(
            "Persisted meeting artifacts under {}",
            transcript_path.display()
        );

        Ok(ArtifactPaths {
            transcript_path,
            summary_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{MeetingSession, Persona, TranscriptEntry};
    use chrono::Utc;
    use tempfile::tempdir;

    fn sample_document() -> TranscriptDocument {
        let mut session = MeetingSession::new("question", Utc::now(), 120);
        session.record(TranscriptEntry {
            timestamp: Utc::now(),
            elapsed_minutes: 12,
            speaker_name: "Dana Mitchell".to_string(),
            speaker_title: "Chief Executive Officer".to_string(),
            content: "Let's focus the launch.".to_string(),
        });
        let participants = vec![Persona::new("Dana Mitchell", "CEO", "goal", "story")];
        TranscriptDocument::from_session(&session, &participants)
    }

    #[test]
    fn test_persist_writes_stemmed_file_pair() {
        let dir = tempdir().unwrap();
        let store = FsArtifactStore::new(dir.path().to_path_buf());
        let document = sample_document();

        let paths = tokio_test::block_on(store.persist(&document, "## Briefing")).unwrap();

        assert!(paths.transcript_path.exists());
        assert!(paths.summary_path.exists());
        assert_eq!(
            paths.transcript_path.file_stem(),
            paths.summary_path.file_stem()
        );
        let stem = paths.transcript_path.file_stem().unwrap().to_string_lossy();
        assert!(stem.starts_with("meeting_"));
        assert!(stem.ends_with('Z'));

        let summary = std::fs::read_to_string(&paths.summary_path).unwrap();
        assert_eq!(summary, "## Briefing");
    }

    #[test]
    fn test_persisted_transcript_round_trips() {
        let dir = tempdir().unwrap();
        let store = FsArtifactStore::new(dir.path().to_path_buf());
        let document = sample_document();

        let paths = tokio_test::block_on(store.persist(&document, "summary")).unwrap();

        let raw = std::fs::read_to_string(&paths.transcript_path).unwrap();
        let parsed: TranscriptDocument = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.meeting_question, document.meeting_question);
        assert_eq!(parsed.duration_minutes, document.duration_minutes);
        assert_eq!(parsed.messages.len(), document.messages.len());
    }

    #[test]
    fn test_persist_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("agent_meetings");
        let store = FsArtifactStore::new(nested.clone());

        tokio_test::block_on(store.persist(&sample_document(), "summary")).unwrap();
        assert!(nested.is_dir());
    }
}
