/// Artifact store port trait
///
/// Defines the interface for persisting a completed session.
/// Implementation: filesystem adapter writing a timestamp-stemmed file pair.
use crate::domain::models::TranscriptDocument;
use crate::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Locations of the persisted artifact pair
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub transcript_path: PathBuf,
    pub summary_path: PathBuf,
}

/// Port trait for artifact persistence
#[async_trait]
pub trait ArtifactStorePort: Send + Sync {
    /// Persist the structured transcript and the briefing text together
    ///
    /// Nothing is written unless both payloads are available; persistence
    /// failures surface to the caller uncaught.
    async fn persist(
        &self,
        document: &TranscriptDocument,
        summary_text: &str,
    ) -> Result<ArtifactPaths>;
}
