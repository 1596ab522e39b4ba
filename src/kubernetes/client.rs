// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation from explicit connection settings

use crate::config::Config;
use crate::constants::KUBECONFIG_CONTEXT;
use crate::error::{DeployerError, Result};
use crate::kubernetes::oauth::request_token;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use tracing::{info, instrument};

/// Log in with the configured user and create a client carrying the OAuth token
#[instrument(skip(config), fields(url = %config.url))]
pub async fn create_client(config: &Config) -> Result<Client> {
    let token = request_token(config).await?;
    let client_config = client_config(config, &token).await?;

    let client = Client::try_from(client_config)
        .map_err(|e| DeployerError::KubeconfigError(format!("Failed to create client: {}", e)))?;
    info!("Client created for {} as {}", config.url, config.user);

    Ok(client)
}

/// Client settings for the API server, authenticating with a bearer token
pub async fn client_config(config: &Config, token: &str) -> Result<KConfig> {
    let kubeconfig = build_kubeconfig(config, token)?;

    KConfig::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|e| DeployerError::KubeconfigError(format!("Failed to create config: {}", e)))
}

/// Single-context kubeconfig holding the access token
fn build_kubeconfig(config: &Config, token: &str) -> Result<Kubeconfig> {
    let server = config.url.as_str().trim_end_matches('/');

    serde_json::from_value(serde_json::json!({
        "apiVersion": "v1",
        "kind": "Config",
        "clusters": [{
            "name": KUBECONFIG_CONTEXT,
            "cluster": {
                "server": server,
                "insecure-skip-tls-verify": config.insecure_skip_tls_verify,
            },
        }],
        "users": [{
            "name": KUBECONFIG_CONTEXT,
            "user": {
                "token": token,
            },
        }],
        "contexts": [{
            "name": KUBECONFIG_CONTEXT,
            "context": {
                "cluster": KUBECONFIG_CONTEXT,
                "user": KUBECONFIG_CONTEXT,
            },
        }],
        "current-context": KUBECONFIG_CONTEXT,
    }))
    .map_err(|e| DeployerError::KubeconfigError(format!("Failed to build kubeconfig: {}", e)))
}
