// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking the OpenShift API and recording what was sent.

use http::{Request, Response};
use http_body_util::BodyExt;
use kube::client::Body;
use kube::Client;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

pub const PROJECTS_PATH: &str = "/apis/project.openshift.io/v1/projects";
pub const PROJECT_REQUESTS_PATH: &str = "/apis/project.openshift.io/v1/projectrequests";

pub fn deployments_path(namespace: &str) -> String {
    format!("/apis/apps/v1/namespaces/{}/deployments/", namespace)
}

pub fn services_path(namespace: &str) -> String {
    format!("/api/v1/namespaces/{}/services/", namespace)
}

pub const OAUTH_METADATA_PATH: &str = "/.well-known/oauth-authorization-server";
pub const OAUTH_AUTHORIZE_PATH: &str = "/oauth/authorize";

pub fn route_path(namespace: &str, name: &str) -> String {
    format!("/apis/route.openshift.io/v1/namespaces/{}/routes/{}", namespace, name)
}

/// A request as it reached the mock
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }
}

#[derive(Clone, Debug)]
struct MockResponse {
    status: u16,
    body: String,
    location: Option<String>,
}

/// A mock HTTP service that returns predefined responses based on request paths.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn on(self, method: &str, path: &str, response: MockResponse) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), response);
        self
    }

    fn on_status(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.on(
            method,
            path,
            MockResponse {
                status,
                body: body.to_string(),
                location: None,
            },
        )
    }

    /// Add a response for GET requests matching the path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on_status("GET", path, status, body)
    }

    /// Answer GET requests with a 302 pointing at `location`
    pub fn on_get_redirect(self, path: &str, location: &str) -> Self {
        self.on(
            "GET",
            path,
            MockResponse {
                status: 302,
                body: String::new(),
                location: Some(location.to_string()),
            },
        )
    }

    /// Add a response for POST requests matching the path
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.on_status("POST", path, status, body)
    }

    /// Add a response for PATCH (server-side apply) requests matching the path
    pub fn on_patch(self, path: &str, status: u16, body: &str) -> Self {
        self.on_status("PATCH", path, status, body)
    }

    /// Add a response for DELETE requests matching the path
    pub fn on_delete(self, path: &str, status: u16, body: &str) -> Self {
        self.on_status("DELETE", path, status, body)
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_with_method(&self, method: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method)
            .collect()
    }

    /// Number of requests that would change cluster state
    pub fn mutation_count(&self) -> usize {
        self.requests().iter().filter(|r| r.method != "GET").count()
    }

    fn find_response(&self, method: &str, path: &str) -> Option<MockResponse> {
        let responses = self.responses.lock().unwrap();

        // Try exact match first
        if let Some(resp) = responses.get(&(method.to_string(), path.to_string())) {
            return Some(resp.clone());
        }

        // Prefix match for collection paths like /apis/apps/v1/namespaces/demo/deployments/
        for ((m, p), resp) in responses.iter() {
            if m == method && path.starts_with(p) {
                return Some(resp.clone());
            }
        }

        None
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();
        let query = req.uri().query().map(str::to_string);
        let headers = req
            .headers()
            .iter()
            .map(|(k, v)| {
                (
                    k.as_str().to_string(),
                    String::from_utf8_lossy(v.as_bytes()).into_owned(),
                )
            })
            .collect();

        let response = self.find_response(&method, &path);
        let requests = self.requests.clone();

        Box::pin(async move {
            let bytes = req
                .into_body()
                .collect()
                .await
                .map_err(|e| tower::BoxError::from(e.to_string()))?
                .to_bytes();
            requests.lock().unwrap().push(RecordedRequest {
                method,
                path,
                query,
                headers,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });

            // Default 404 for unmatched requests
            let response = response.unwrap_or_else(|| MockResponse {
                status: 404,
                body: r#"{"kind":"Status","apiVersion":"v1","status":"Failure","message":"not found","reason":"NotFound","code":404}"#
                    .to_string(),
                location: None,
            });

            let mut builder = Response::builder()
                .status(response.status)
                .header("content-type", "application/json");
            if let Some(location) = response.location {
                builder = builder.header("location", location);
            }
            Ok(builder.body(Body::from(response.body.into_bytes())).unwrap())
        })
    }
}

/// Create a mock project JSON object
pub fn project_json(name: &str) -> String {
    project_value(name).to_string()
}

fn project_value(name: &str) -> serde_json::Value {
    serde_json::json!({
        "apiVersion": "project.openshift.io/v1",
        "kind": "Project",
        "metadata": {
            "name": name,
            "uid": format!("uid-{}", name)
        },
        "spec": {"finalizers": ["kubernetes"]},
        "status": {"phase": "Active"}
    })
}

/// Create a mock project list response
pub fn project_list_json(names: &[&str]) -> String {
    serde_json::json!({
        "apiVersion": "project.openshift.io/v1",
        "kind": "ProjectList",
        "metadata": {"resourceVersion": "1"},
        "items": names.iter().map(|n| project_value(n)).collect::<Vec<_>>()
    })
    .to_string()
}

/// Create a mock deployment JSON response
pub fn deployment_json(namespace: &str, name: &str) -> String {
    serde_json::json!({
        "apiVersion": "apps/v1",
        "kind": "Deployment",
        "metadata": {"name": name, "namespace": namespace}
    })
    .to_string()
}

/// Create a mock service JSON response
pub fn service_json(namespace: &str, name: &str) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Service",
        "metadata": {"name": name, "namespace": namespace}
    })
    .to_string()
}

/// Create a mock route JSON response with the host the router assigned
pub fn route_json(namespace: &str, name: &str, service: &str, host: &str) -> String {
    serde_json::json!({
        "apiVersion": "route.openshift.io/v1",
        "kind": "Route",
        "metadata": {"name": name, "namespace": namespace},
        "spec": {
            "host": host,
            "to": {"kind": "Service", "name": service, "weight": 100},
            "tls": {"termination": "edge", "insecureEdgeTerminationPolicy": "None"}
        },
        "status": {
            "ingress": [{"host": host, "routerName": "default"}]
        }
    })
    .to_string()
}

/// Create a mock OAuth server metadata document
pub fn oauth_metadata_json(issuer: &str) -> String {
    serde_json::json!({
        "issuer": issuer,
        "authorization_endpoint": format!("{}/oauth/authorize", issuer),
        "token_endpoint": format!("{}/oauth/token", issuer),
        "response_types_supported": ["code", "token"]
    })
    .to_string()
}
