// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Field manager used for server-side apply
pub const FIELD_MANAGER: &str = "kie-sandbox-deployer";

/// Label key used to tie pods, deployments and services together
pub const APP_LABEL: &str = "app";

pub const SERVICE_SUFFIX: &str = "-service";
pub const ROUTE_SUFFIX: &str = "-route";

/// The fixed set of applications making up a KIE Sandbox installation
pub mod apps {
    pub const CORS_PROXY_NAME: &str = "cors-proxy";
    pub const CORS_PROXY_IMAGE: &str = "quay.io/kogito_tooling_bot/cors-proxy-image:latest";
    pub const CORS_PROXY_PORT: i32 = 8080;

    pub const EXTENDED_SERVICES_NAME: &str = "extended-services";
    pub const EXTENDED_SERVICES_IMAGE: &str =
        "quay.io/kogito_tooling_bot/kie-sandbox-extended-services-image:latest";
    pub const EXTENDED_SERVICES_PORT: i32 = 21345;

    pub const KIE_SANDBOX_NAME: &str = "kie-sandbox";
    pub const KIE_SANDBOX_IMAGE: &str = "quay.io/kogito_tooling_bot/kie-sandbox-image:latest";
    pub const KIE_SANDBOX_PORT: i32 = 8080;
}

/// Environment variables handed to the kie-sandbox container
pub mod env {
    pub const CORS_PROXY_URL: &str = "CORS_PROXY_URL";
    pub const EXTENDED_SERVICES_URL: &str = "KIE_SANDBOX_EXTENDED_SERVICES_URL";
}

/// OpenShift API groups
pub mod groups {
    pub const PROJECT: &str = "project.openshift.io";
}

/// Name used for the cluster, user and context of the generated kubeconfig
pub const KUBECONFIG_CONTEXT: &str = "kie-sandbox-deployer";

/// OpenShift OAuth token exchange
pub mod oauth {
    /// Discovery document served by the API server
    pub const METADATA_PATH: &str = "/.well-known/oauth-authorization-server";
    /// Built-in client that answers basic-auth challenges with a token redirect
    pub const CHALLENGING_CLIENT_ID: &str = "openshift-challenging-client";
    pub const CSRF_HEADER: &str = "X-CSRF-Token";
}
