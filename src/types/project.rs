// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::groups;
use kube::core::{ApiResource, DynamicObject, GroupVersionKind};
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// OpenShift project, the namespace wrapper every application lives in
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(group = "project.openshift.io", version = "v1", kind = "Project")]
#[kube(status = "ProjectStatus")]
#[serde(rename_all = "camelCase")]
pub struct ProjectSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finalizers: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
}

impl Project {
    pub fn is_terminating(&self) -> bool {
        self.status
            .as_ref()
            .and_then(|s| s.phase.as_deref())
            .is_some_and(|p| p == "Terminating")
    }
}

/// `ProjectRequest` is the self-service way to create a project; it has no spec
pub fn project_request_resource() -> ApiResource {
    ApiResource::from_gvk(&GroupVersionKind::gvk(
        groups::PROJECT,
        "v1",
        "ProjectRequest",
    ))
}

/// Build the request object asking the cluster for a project with the given name
pub fn project_request(name: &str) -> DynamicObject {
    DynamicObject::new(name, &project_request_resource()).data(serde_json::json!({}))
}
