//! Optional dashboard child process
//!
//! The dashboard UI runs as an explicitly owned child whose lifecycle is
//! bound to server startup and shutdown. The handle lives in `main`, never in
//! module-level state.

use crate::error::Result;
use tokio::process::{Child, Command};

/// Owned handle to the dashboard child process
pub struct DashboardProcess {
    child: Child,
}

impl DashboardProcess {
    /// Spawn the dashboard command via the platform shell
    pub fn spawn(command: &str) -> Result<Self> {
        let mut shell = if cfg!(target_os = "windows") {
            let mut c = Command::new("cmd");
            c.args(["/C", command]);
            c
        } else {
            let mut c = Command::new("sh");
            c.args(["-c", command]);
            c
        };

        let child = shell.spawn()?;
        log::info!("Launched dashboard process: {}", command);
        Ok(Self { child })
    }

    /// Stop the child; called from the server shutdown path
    pub async fn stop(&mut self) {
        if let Err(e) = self.child.kill().await {
            log::warn!("Failed to stop dashboard process: {}", e);
        } else {
            log::info!("Dashboard process stopped");
        }
    }
}
