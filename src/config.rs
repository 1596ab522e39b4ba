// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::{DeployerError, Result};
use url::Url;

/// Connection and target settings for a single deployer run
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenShift API server URL
    pub url: Url,
    pub user: String,
    pub password: String,
    /// Project the applications are deployed into
    pub project: String,
    /// Skip verification of the API server certificate
    pub insecure_skip_tls_verify: bool,
}

impl Config {
    /// Validate raw inputs. Checks run in the order url, credentials, project.
    pub fn new(
        url: Option<&str>,
        user: Option<&str>,
        password: Option<&str>,
        project: Option<&str>,
        insecure_skip_tls_verify: bool,
    ) -> Result<Self> {
        let Some(url) = non_blank(url) else {
            return Err(DeployerError::ConfigError(
                "Please specify OpenShift server url: --url https://...".to_string(),
            ));
        };
        let url = Url::parse(url).map_err(|e| {
            DeployerError::ConfigError(format!("Invalid OpenShift server url {}: {}", url, e))
        })?;

        let (Some(user), Some(password)) = (non_blank(user), non_blank(password)) else {
            return Err(DeployerError::ConfigError(
                "Please specify OpenShift credentials: --user admin --password admin".to_string(),
            ));
        };

        let Some(project) = non_blank(project) else {
            return Err(DeployerError::ConfigError(
                "Please specify OpenShift project: --project projectName".to_string(),
            ));
        };

        Ok(Config {
            url,
            user: user.to_string(),
            password: password.to_string(),
            project: project.to_string(),
            insecure_skip_tls_verify,
        })
    }
}

/// Returns the value unless it is missing or only whitespace
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
