//! Artifact persistence adapters

pub mod fs;

pub use fs::FsArtifactStore;
