// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deployment, service and route records for an application, and applying them

use crate::apps::AppSpec;
use crate::constants::{APP_LABEL, FIELD_MANAGER};
use crate::error::Result;
use crate::types::{
    InsecureEdgeTerminationPolicy, Route, RouteSpec, RouteTargetReference, TlsConfig,
    TlsTermination,
};
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{
    Container, EnvVar, PodSpec, PodTemplateSpec, Service, ServicePort, ServiceSpec,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kube::{
    api::{ObjectMeta, Patch, PatchParams},
    Api, Client, Resource, ResourceExt,
};
use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;
use std::fmt::Debug;
use tracing::{debug, instrument};

fn app_labels(app: &AppSpec) -> BTreeMap<String, String> {
    BTreeMap::from([(APP_LABEL.to_string(), app.name.clone())])
}

/// Single container named after the application
pub fn build_container(app: &AppSpec) -> Container {
    let env = (!app.env.is_empty()).then(|| {
        app.env
            .iter()
            .map(|(name, value)| EnvVar {
                name: name.clone(),
                value: Some(value.clone()),
                ..Default::default()
            })
            .collect()
    });

    Container {
        name: app.name.clone(),
        image: Some(app.image.clone()),
        env,
        ..Default::default()
    }
}

/// Deployment selecting its pods by the `app` label; replicas left to the cluster default
pub fn build_deployment(app: &AppSpec) -> Deployment {
    Deployment {
        metadata: ObjectMeta {
            name: Some(app.name.clone()),
            labels: Some(app_labels(app)),
            ..Default::default()
        },
        spec: Some(DeploymentSpec {
            selector: LabelSelector {
                match_labels: Some(app_labels(app)),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(app_labels(app)),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![build_container(app)],
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Service forwarding the application port to the same port on the pod
pub fn build_service(app: &AppSpec) -> Service {
    Service {
        metadata: ObjectMeta {
            name: Some(app.service_name()),
            ..Default::default()
        },
        spec: Some(ServiceSpec {
            selector: Some(app_labels(app)),
            ports: Some(vec![ServicePort {
                protocol: Some("TCP".to_string()),
                port: app.port,
                target_port: Some(IntOrString::Int(app.port)),
                ..Default::default()
            }]),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Edge terminated route to the application service, plain http is refused
pub fn build_route(app: &AppSpec) -> Route {
    Route::new(
        &app.route_name(),
        RouteSpec {
            host: None,
            to: RouteTargetReference {
                kind: "Service".to_string(),
                name: app.service_name(),
                weight: None,
            },
            tls: Some(TlsConfig {
                termination: TlsTermination::Edge,
                insecure_edge_termination_policy: Some(InsecureEdgeTerminationPolicy::None),
            }),
        },
    )
}

/// Create or replace an object through forced server-side apply
#[instrument(skip(client, obj), fields(kind = %K::kind(&()), name = %obj.name_any()))]
pub async fn apply<K>(client: &Client, namespace: &str, obj: &K) -> Result<K>
where
    K: Resource<Scope = k8s_openapi::NamespaceResourceScope, DynamicType = ()>
        + Clone
        + Debug
        + Serialize
        + DeserializeOwned,
{
    let api: Api<K> = Api::namespaced(client.clone(), namespace);
    let pp = PatchParams::apply(FIELD_MANAGER).force();

    let applied = api.patch(&obj.name_any(), &pp, &Patch::Apply(obj)).await?;
    debug!("Applied {} {}/{}", K::kind(&()), namespace, applied.name_any());

    Ok(applied)
}
