// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kie_sandbox_deployer::cli::{Cli, Command};
use kie_sandbox_deployer::deployer::{Deployer, UndeployOutcome};
use kie_sandbox_deployer::kubernetes::create_client;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Validate everything before the cluster is contacted
    let (command, config) = Cli::parse().into_config()?;
    info!(
        "Running {} for project {} on {}",
        command, config.project, config.url
    );

    let client = create_client(&config).await?;
    let deployer = Deployer::new(client);

    match command {
        Command::Deploy => {
            let url = deployer.deploy(&config.project).await?;
            println!("{}", url);
        }
        Command::Undeploy => {
            if deployer.undeploy(&config.project).await? == UndeployOutcome::Deleted {
                info!("Project {} scheduled for deletion", config.project);
            }
        }
    }

    Ok(())
}
