/// Service adapters for external APIs
pub mod completion;
