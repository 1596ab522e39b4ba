// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Trade a user name and password for an OpenShift OAuth access token.
//!
//! The API server only accepts bearer tokens. The OAuth server hands one out
//! to `openshift-challenging-client` as a redirect whose fragment carries
//! `access_token`, in exchange for basic-auth credentials.

use crate::config::Config;
use crate::constants::oauth::{CHALLENGING_CLIENT_ID, CSRF_HEADER, METADATA_PATH};
use crate::error::{DeployerError, Result};
use http::{header, Request, StatusCode, Uri};
use kube::client::Body;
use kube::config::AuthInfo;
use kube::{Client, Config as KConfig};
use serde::Deserialize;
use tracing::{debug, info, instrument};
use url::Url;

/// The parts of the OAuth discovery document the exchange needs
#[derive(Deserialize, Debug, Clone)]
pub struct OAuthServerMetadata {
    pub issuer: String,
    pub authorization_endpoint: String,
}

/// Obtain an access token for the configured user
#[instrument(skip(config), fields(url = %config.url, user = %config.user))]
pub async fn request_token(config: &Config) -> Result<String> {
    let server = config.url.as_str().trim_end_matches('/');
    let api_client = Client::try_from(cluster_config(server, config.insecure_skip_tls_verify)?)
        .map_err(|e| DeployerError::KubeconfigError(format!("Failed to create client: {}", e)))?;

    let metadata = discover_oauth_server(&api_client).await?;
    let url = authorize_url(&metadata)?;

    let oauth_client = Client::try_from(basic_auth_config(config, &url)?).map_err(|e| {
        DeployerError::KubeconfigError(format!("Failed to create OAuth client: {}", e))
    })?;
    let token = exchange_credentials(&oauth_client, &url).await?;
    info!("Obtained OAuth token for user {}", config.user);

    Ok(token)
}

fn cluster_config(server: &str, insecure_skip_tls_verify: bool) -> Result<KConfig> {
    let uri: Uri = server.parse().map_err(|e| {
        DeployerError::KubeconfigError(format!("Invalid server url {}: {}", server, e))
    })?;
    let mut kconfig = KConfig::new(uri);
    kconfig.accept_invalid_certs = insecure_skip_tls_verify;
    Ok(kconfig)
}

/// Client settings for the OAuth server, authenticating with basic auth
pub(crate) fn basic_auth_config(config: &Config, authorize_url: &Url) -> Result<KConfig> {
    let mut kconfig = cluster_config(
        &authorize_url.origin().ascii_serialization(),
        config.insecure_skip_tls_verify,
    )?;
    kconfig.auth_info = serde_json::from_value::<AuthInfo>(serde_json::json!({
        "username": config.user,
        "password": config.password,
    }))
    .map_err(|e| DeployerError::KubeconfigError(format!("Failed to build credentials: {}", e)))?;
    Ok(kconfig)
}

/// Ask the API server where its OAuth server lives
#[instrument(skip(client))]
pub async fn discover_oauth_server(client: &Client) -> Result<OAuthServerMetadata> {
    let request = Request::get(METADATA_PATH)
        .body(Vec::new())
        .map_err(|e| DeployerError::AuthenticationError(e.to_string()))?;
    let metadata: OAuthServerMetadata = client.request(request).await?;
    debug!(
        "OAuth server {} authorizes at {}",
        metadata.issuer, metadata.authorization_endpoint
    );

    Ok(metadata)
}

/// Authorization endpoint with the implicit-grant query for the challenging client
pub fn authorize_url(metadata: &OAuthServerMetadata) -> Result<Url> {
    let mut url = Url::parse(&metadata.authorization_endpoint).map_err(|e| {
        DeployerError::AuthenticationError(format!(
            "Invalid authorization endpoint {}: {}",
            metadata.authorization_endpoint, e
        ))
    })?;
    url.query_pairs_mut()
        .append_pair("response_type", "token")
        .append_pair("client_id", CHALLENGING_CLIENT_ID);
    Ok(url)
}

/// Send the credentials and read the token from the redirect
#[instrument(skip(client, authorize_url))]
pub async fn exchange_credentials(client: &Client, authorize_url: &Url) -> Result<String> {
    let path = match authorize_url.query() {
        Some(query) => format!("{}?{}", authorize_url.path(), query),
        None => authorize_url.path().to_string(),
    };
    let request = Request::get(path)
        .header(CSRF_HEADER, "1")
        .body(Body::from(Vec::new()))
        .map_err(|e| DeployerError::AuthenticationError(e.to_string()))?;

    let response = client.send(request).await?;
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(DeployerError::AuthenticationError(
            "invalid user name or password".to_string(),
        ));
    }
    if !status.is_redirection() {
        return Err(DeployerError::AuthenticationError(format!(
            "unexpected {} from the OAuth server",
            status
        )));
    }

    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            DeployerError::AuthenticationError("redirect without a location".to_string())
        })?;

    token_from_location(authorize_url, location)
}

fn token_from_location(authorize_url: &Url, location: &str) -> Result<String> {
    let redirect = authorize_url.join(location).map_err(|e| {
        DeployerError::AuthenticationError(format!("Invalid redirect {}: {}", location, e))
    })?;

    if let Some((_, error)) = redirect.query_pairs().find(|(k, _)| k == "error") {
        return Err(DeployerError::AuthenticationError(error.into_owned()));
    }

    redirect
        .fragment()
        .and_then(|fragment| {
            url::form_urlencoded::parse(fragment.as_bytes())
                .find(|(k, _)| k == "access_token")
                .map(|(_, v)| v.into_owned())
        })
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            DeployerError::AuthenticationError("redirect carries no access token".to_string())
        })
}
