// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployerError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to build cluster client: {0}")]
    KubeconfigError(String),

    #[error("OpenShift authentication failed: {0}")]
    AuthenticationError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Unsupported command: {0}")]
    UnsupportedCommand(String),

    #[error("Project already exists: {0}")]
    ProjectAlreadyExists(String),

    #[error("Route {0} has no assigned host")]
    RouteHostMissing(String),
}

pub type Result<T> = std::result::Result<T, DeployerError>;
