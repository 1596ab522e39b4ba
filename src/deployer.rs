// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deploy and undeploy recipes for a KIE Sandbox installation.
//!
//! Routes only learn their host once the cluster has admitted them, so the
//! sandbox can only be created after both backing applications are routed.
//! Nothing is rolled back when a step fails.

use crate::apps::{https_url, AppSpec};
use crate::error::{DeployerError, Result};
use crate::kubernetes::{
    apply, build_deployment, build_route, build_service, create_project, delete_project,
    find_project,
};
use kube::Client;
use tracing::{info, instrument};

/// What `undeploy` ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndeployOutcome {
    Deleted,
    NotFound,
}

pub struct Deployer {
    client: Client,
}

impl Deployer {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create the project and all three applications, returning the public sandbox URL
    #[instrument(skip(self))]
    pub async fn deploy(&self, project: &str) -> Result<String> {
        create_project(&self.client, project).await?;

        let cors_proxy_host = self.deploy_app(project, &AppSpec::cors_proxy()).await?;
        let extended_services_host = self
            .deploy_app(project, &AppSpec::extended_services())
            .await?;

        let sandbox = AppSpec::kie_sandbox(&cors_proxy_host, &extended_services_host);
        let sandbox_url = https_url(&self.deploy_app(project, &sandbox).await?);

        info!("KIE Sandbox is available on: {}", sandbox_url);
        Ok(sandbox_url)
    }

    /// Delete the project if it exists; a missing project is not an error
    #[instrument(skip(self))]
    pub async fn undeploy(&self, project: &str) -> Result<UndeployOutcome> {
        match find_project(&self.client, project).await? {
            Some(existing) if existing.is_terminating() => {
                info!("Project {} is already being deleted", project);
                Ok(UndeployOutcome::Deleted)
            }
            Some(existing) => {
                delete_project(&self.client, &existing).await?;
                Ok(UndeployOutcome::Deleted)
            }
            None => {
                info!(
                    "Project cannot be deleted because it does not exist: {}",
                    project
                );
                Ok(UndeployOutcome::NotFound)
            }
        }
    }

    /// Apply deployment, service and route for one app and return the route host
    #[instrument(skip(self, app), fields(app = %app.name))]
    async fn deploy_app(&self, project: &str, app: &AppSpec) -> Result<String> {
        info!("Deploying {} ({}) on port {}", app.name, app.image, app.port);

        apply(&self.client, project, &build_deployment(app)).await?;
        apply(&self.client, project, &build_service(app)).await?;
        let route = apply(&self.client, project, &build_route(app)).await?;

        let host = route
            .host()
            .ok_or_else(|| DeployerError::RouteHostMissing(app.route_name()))?
            .to_string();
        info!("{} exposed at {}", app.name, host);

        Ok(host)
    }
}
