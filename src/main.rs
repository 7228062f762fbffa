mod adapters;
mod config;
mod domain;
mod error;
mod ports;
mod roundtable;
mod server;
mod utils;

use adapters::artifacts::FsArtifactStore;
use adapters::services::completion::OpenAIService;
use clap::Parser;
use config::AppConfig;
use domain::personas::default_panel;
use ports::artifacts::ArtifactStorePort;
use ports::completion::CompletionServicePort;
use roundtable::RoundtableService;
use server::AppState;
use std::sync::Arc;
use utils::DashboardProcess;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = AppConfig::parse();
    config.validate()?;

    let completion: Arc<dyn CompletionServicePort> = Arc::new(
        OpenAIService::new(config.api_key.clone()).with_api_base(config.api_base.clone()),
    );
    let artifacts: Arc<dyn ArtifactStorePort> =
        Arc::new(FsArtifactStore::new(config.artifact_dir.clone()));

    let roundtable = RoundtableService::new(
        default_panel(),
        config.scheduler_settings(),
        completion,
        config.completion_config(),
        artifacts,
        config.reference_path.clone(),
    );

    let mut dashboard = match config.dashboard_command.as_deref() {
        Some(command) => Some(DashboardProcess::spawn(command)?),
        None => None,
    };

    let state = Arc::new(AppState { roundtable });
    let result = server::serve(state, &config.bind_addr).await;

    if let Some(dashboard) = dashboard.as_mut() {
        dashboard.stop().await;
    }

    result
}
