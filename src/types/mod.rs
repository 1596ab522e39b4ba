// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed OpenShift resources not covered by k8s-openapi.

pub mod project;
pub mod route;

pub use project::Project;
pub use route::{
    InsecureEdgeTerminationPolicy, Route, RouteSpec, RouteTargetReference, TlsConfig,
    TlsTermination,
};
