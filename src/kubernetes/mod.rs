// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation, OAuth login, project management and workloads.

pub mod client;
pub mod oauth;
pub mod projects;
pub mod workloads;

pub use client::create_client;
pub use projects::{create_project, delete_project, find_project};
pub use workloads::{apply, build_deployment, build_route, build_service};
