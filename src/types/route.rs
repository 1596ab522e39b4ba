// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// OpenShift route exposing a service outside of the cluster
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[kube(group = "route.openshift.io", version = "v1", kind = "Route")]
#[kube(namespaced)]
#[kube(status = "RouteStatus")]
#[serde(rename_all = "camelCase")]
pub struct RouteSpec {
    /// Assigned by the router when left empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    pub to: RouteTargetReference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<TlsConfig>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteTargetReference {
    pub kind: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TlsConfig {
    pub termination: TlsTermination,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insecure_edge_termination_policy: Option<InsecureEdgeTerminationPolicy>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TlsTermination {
    Edge,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, schemars::JsonSchema)]
pub enum InsecureEdgeTerminationPolicy {
    None,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingress: Option<Vec<RouteIngress>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteIngress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub router_name: Option<String>,
}

impl Route {
    /// Externally reachable host of this route.
    /// Prefers `spec.host` and falls back to the first admitted ingress.
    pub fn host(&self) -> Option<&str> {
        self.spec
            .host
            .as_deref()
            .filter(|h| !h.is_empty())
            .or_else(|| {
                self.status
                    .as_ref()
                    .and_then(|s| s.ingress.as_ref())
                    .and_then(|ingress| {
                        ingress
                            .iter()
                            .filter_map(|i| i.host.as_deref())
                            .find(|h| !h.is_empty())
                    })
            })
    }
}
