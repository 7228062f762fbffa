/// Utility modules
pub mod dashboard;

pub use dashboard::DashboardProcess;
