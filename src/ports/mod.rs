/// Port trait definitions (interfaces)
///
/// These traits define the contracts for adapters to implement.
/// Following the ports-and-adapters (hexagonal) architecture pattern.
pub mod artifacts;
pub mod completion;
pub mod rng;

#[cfg(test)]
pub mod mocks;

pub use artifacts::{ArtifactPaths, ArtifactStorePort};
pub use completion::{ChatMessage, CompletionConfig, CompletionServicePort, CompletionText};
pub use rng::{EntropyRng, SchedulerRng};
