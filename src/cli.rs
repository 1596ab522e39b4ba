// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command line surface of the deployer

use crate::config::{non_blank, Config};
use crate::error::{DeployerError, Result};
use clap::Parser;
use std::fmt;
use std::str::FromStr;

/// Provision or tear down a KIE Sandbox installation on OpenShift
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Command to run: deploy or undeploy
    #[arg(env = "DEPLOYER_COMMAND")]
    pub command: Option<String>,

    /// OpenShift API server URL
    #[arg(long, env = "DEPLOYER_URL")]
    pub url: Option<String>,

    /// OpenShift user name
    #[arg(long, env = "DEPLOYER_USER")]
    pub user: Option<String>,

    /// OpenShift password
    #[arg(long, env = "DEPLOYER_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Target OpenShift project
    #[arg(long, env = "DEPLOYER_PROJECT")]
    pub project: Option<String>,

    /// Do not verify the API server certificate
    #[arg(long, env = "DEPLOYER_INSECURE_SKIP_TLS_VERIFY")]
    pub insecure_skip_tls_verify: bool,
}

impl Cli {
    /// Validate all inputs before anything talks to the cluster
    pub fn into_config(self) -> Result<(Command, Config)> {
        let config = Config::new(
            self.url.as_deref(),
            self.user.as_deref(),
            self.password.as_deref(),
            self.project.as_deref(),
            self.insecure_skip_tls_verify,
        )?;

        let Some(command) = non_blank(self.command.as_deref()) else {
            return Err(DeployerError::ConfigError(
                "Please specify command: deploy|undeploy".to_string(),
            ));
        };

        Ok((command.parse()?, config))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Deploy,
    Undeploy,
}

impl FromStr for Command {
    type Err = DeployerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "deploy" => Ok(Command::Deploy),
            "undeploy" => Ok(Command::Undeploy),
            _ => Err(DeployerError::UnsupportedCommand(s.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Deploy => write!(f, "deploy"),
            Command::Undeploy => write!(f, "undeploy"),
        }
    }
}
