// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! OpenShift project lookup, creation and removal

use crate::error::{DeployerError, Result};
use crate::types::project::{project_request, project_request_resource};
use crate::types::Project;
use kube::{
    api::{DeleteParams, ListParams, PostParams},
    core::DynamicObject,
    Api, Client, ResourceExt,
};
use tracing::{debug, info, instrument};

/// Find the project with exactly this name
#[instrument(skip(client))]
pub async fn find_project(client: &Client, name: &str) -> Result<Option<Project>> {
    let projects: Api<Project> = Api::all(client.clone());
    let project_list = projects.list(&ListParams::default()).await?;

    debug!("Cluster has {} projects", project_list.items.len());

    Ok(project_list.items.into_iter().find(|p| p.name_any() == name))
}

/// Request a new project, refusing to touch one that already exists
#[instrument(skip(client))]
pub async fn create_project(client: &Client, name: &str) -> Result<()> {
    if find_project(client, name).await?.is_some() {
        return Err(DeployerError::ProjectAlreadyExists(name.to_string()));
    }

    info!("Creating project {}", name);
    let requests: Api<DynamicObject> = Api::all_with(client.clone(), &project_request_resource());
    requests
        .create(&PostParams::default(), &project_request(name))
        .await?;
    info!("Project {} created successfully", name);

    Ok(())
}

/// Delete a project; the cluster removes everything inside it
#[instrument(skip(client, project), fields(project = %project.name_any()))]
pub async fn delete_project(client: &Client, project: &Project) -> Result<()> {
    let projects: Api<Project> = Api::all(client.clone());
    projects
        .delete(&project.name_any(), &DeleteParams::default())
        .await?;
    info!("Project {} deleted", project.name_any());

    Ok(())
}
