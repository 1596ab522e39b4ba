// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The three applications that make up a KIE Sandbox installation

use crate::constants::{apps, env, ROUTE_SUFFIX, SERVICE_SUFFIX};

/// Everything needed to run one application: image, port and environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSpec {
    pub name: String,
    pub image: String,
    pub port: i32,
    pub env: Vec<(String, String)>,
}

impl AppSpec {
    pub fn new(name: &str, image: &str, port: i32) -> Self {
        Self {
            name: name.to_string(),
            image: image.to_string(),
            port,
            env: Vec::new(),
        }
    }

    pub fn with_env(mut self, key: &str, value: impl Into<String>) -> Self {
        self.env.push((key.to_string(), value.into()));
        self
    }

    pub fn cors_proxy() -> Self {
        Self::new(apps::CORS_PROXY_NAME, apps::CORS_PROXY_IMAGE, apps::CORS_PROXY_PORT)
    }

    pub fn extended_services() -> Self {
        Self::new(
            apps::EXTENDED_SERVICES_NAME,
            apps::EXTENDED_SERVICES_IMAGE,
            apps::EXTENDED_SERVICES_PORT,
        )
    }

    /// The sandbox itself needs the public hosts of the two backing apps
    pub fn kie_sandbox(cors_proxy_host: &str, extended_services_host: &str) -> Self {
        Self::new(apps::KIE_SANDBOX_NAME, apps::KIE_SANDBOX_IMAGE, apps::KIE_SANDBOX_PORT)
            .with_env(env::CORS_PROXY_URL, https_url(cors_proxy_host))
            .with_env(env::EXTENDED_SERVICES_URL, https_url(extended_services_host))
    }

    pub fn service_name(&self) -> String {
        format!("{}{}", self.name, SERVICE_SUFFIX)
    }

    pub fn route_name(&self) -> String {
        format!("{}{}", self.name, ROUTE_SUFFIX)
    }
}

/// Routes are edge terminated, so every public URL is https
pub fn https_url(host: &str) -> String {
    format!("https://{}", host)
}
