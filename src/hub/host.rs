//! Host resolution from multiple sources

use dialoguer::{theme::ColorfulTheme, Select};
use log::debug;
use std::path::Path;

use crate::config::{api, defaults, hub_config};
use crate::error::{HubError, Result};

use super::config_file::{HubConfig, HubConfigStore};
use super::credentials::TokenResolver;

/// Resolved host with the identity used to talk to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Host name (e.g. github.com or a GitHub Enterprise host)
    pub host: String,
    /// Protocol used for API requests
    pub protocol: String,
    /// Default user login, if known without asking the API
    pub user: Option<String>,
    /// API token
    pub token: String,
}

impl HostConfig {
    /// Resolve host, protocol, user and token from CLI, environment and config file
    pub fn resolve(
        cli_host: Option<&str>,
        cli_token: Option<&str>,
        store: &HubConfigStore,
        batch_mode: bool,
    ) -> Result<Self> {
        let config = store.load()?;
        let host = HostResolver::resolve(cli_host, &config, store.path(), batch_mode)?;
        let token = TokenResolver::new(&host).resolve(cli_token, &config, store.path())?;

        let entry = config.entry(&host);
        let protocol = entry
            .and_then(|e| e.protocol.clone())
            .unwrap_or_else(|| hub_config::DEFAULT_PROTOCOL.to_string());
        let user = entry
            .and_then(|e| e.user.clone())
            .or_else(|| std::env::var(hub_config::USER_ENV_VAR).ok())
            .filter(|u| !u.is_empty());

        debug!(
            "Resolved host {} (protocol={}, user={:?})",
            host, protocol, user
        );

        Ok(Self {
            host,
            protocol,
            user,
            token,
        })
    }

    /// Root URL of the REST API for this host
    pub fn api_url(&self) -> String {
        if self.host.eq_ignore_ascii_case(api::GITHUB_HOST) {
            format!("https://{}", api::GITHUB_API_HOST)
        } else {
            format!(
                "{}://{}{}",
                self.protocol,
                self.host,
                api::ENTERPRISE_BASE_PATH
            )
        }
    }

    /// Page where the user manages personal access tokens
    pub fn tokens_url(&self) -> String {
        format!("https://{}/settings/tokens", self.host)
    }
}

/// Host resolution with fallback logic
pub struct HostResolver;

impl HostResolver {
    /// Resolve host from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variable (GITHUB_HOST)
    /// 3. hub config file:
    ///    - If 1 host: use it
    ///    - If multiple hosts: github.com when present, otherwise interactive
    ///      selection (or error in batch mode)
    /// 4. github.com
    pub fn resolve(
        cli_host: Option<&str>,
        config: &HubConfig,
        config_path: Option<&Path>,
        batch_mode: bool,
    ) -> Result<String> {
        if let Some(host) = cli_host {
            debug!("Using host from CLI argument: {}", host);
            return Ok(host.to_string());
        }

        if let Ok(host) = std::env::var(hub_config::HOST_ENV_VAR) {
            if !host.is_empty() {
                debug!(
                    "Using host from {} environment variable: {}",
                    hub_config::HOST_ENV_VAR,
                    host
                );
                return Ok(host);
            }
        }

        debug!(
            "No host in CLI or {}, trying hub config file",
            hub_config::HOST_ENV_VAR
        );
        Self::resolve_from_config(config, config_path, batch_mode)
    }

    fn resolve_from_config(
        config: &HubConfig,
        config_path: Option<&Path>,
        batch_mode: bool,
    ) -> Result<String> {
        let hosts = config.hosts();

        match hosts.as_slice() {
            [] => {
                debug!("No hosts configured, using default {}", defaults::HOST);
                Ok(defaults::HOST.to_string())
            }
            [host] => {
                debug!("Using single host from hub config: {}", host);
                Ok(host.clone())
            }
            _ if hosts.iter().any(|h| h == defaults::HOST) => {
                debug!(
                    "Multiple hosts configured, preferring {}",
                    defaults::HOST
                );
                Ok(defaults::HOST.to_string())
            }
            _ if batch_mode => Err(HubError::HostNotFound(Self::host_not_found_message(
                config_path,
                &hosts,
            ))),
            _ => Self::interactive_host_selection(&hosts),
        }
    }

    /// Prompt user to select a host interactively
    fn interactive_host_selection(hosts: &[String]) -> Result<String> {
        eprintln!("\nMultiple hosts found in hub config:");

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a host")
            .items(hosts)
            .default(0)
            .interact()
            .map_err(|e| HubError::HostNotFound(format!("Failed to select host: {}", e)))?;

        let host = hosts[selection].clone();
        debug!("User selected host: {}", host);
        Ok(host)
    }

    fn host_not_found_message(config_path: Option<&Path>, available_hosts: &[String]) -> String {
        let path = config_path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "hub config".to_string());

        format!(
            "Multiple GitHub hosts configured. Please choose one using:\n\
             \n\
             1. CLI argument:      hubctl --host <HOST>\n\
             2. Environment var:   export {}=<HOST>\n\
             \n\
             Config file: {} ({} hosts found)\n\
             Available hosts: {}",
            hub_config::HOST_ENV_VAR,
            path,
            available_hosts.len(),
            available_hosts.join(", ")
        )
    }
}
