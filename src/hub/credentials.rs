//! API token resolution from multiple sources

use log::debug;
use std::path::Path;

use crate::config::hub_config;
use crate::error::{HubError, Result};

use super::config_file::HubConfig;

/// Token resolution with fallback logic
pub struct TokenResolver {
    host: String,
}

impl TokenResolver {
    /// Create a new token resolver for the given host
    pub fn new(host: &str) -> Self {
        Self {
            host: host.to_string(),
        }
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variable (GITHUB_TOKEN)
    /// 3. hub config file entry for the host
    pub fn resolve(
        &self,
        cli_token: Option<&str>,
        config: &HubConfig,
        config_path: Option<&Path>,
    ) -> Result<String> {
        if let Some(token) = cli_token {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        if let Ok(token) = std::env::var(hub_config::TOKEN_ENV_VAR) {
            if !token.is_empty() {
                debug!(
                    "Using token from {} environment variable",
                    hub_config::TOKEN_ENV_VAR
                );
                return Ok(token);
            }
        }

        debug!(
            "No token in CLI or {}, trying hub config file",
            hub_config::TOKEN_ENV_VAR
        );
        self.resolve_from_config(config, config_path)
    }

    fn resolve_from_config(&self, config: &HubConfig, config_path: Option<&Path>) -> Result<String> {
        config
            .entry(&self.host)
            .and_then(|entry| entry.oauth_token.clone())
            .filter(|token| !token.is_empty())
            .map(|token| {
                debug!("Using token from hub config for host: {}", self.host);
                token
            })
            .ok_or_else(|| HubError::TokenNotFound(self.token_not_found_message(config_path)))
    }

    /// Generate helpful error message when token is not found
    fn token_not_found_message(&self, config_path: Option<&Path>) -> String {
        let config_info = config_path
            .map(|p| format!(" or in hub config {}", p.display()))
            .unwrap_or_default();

        format!(
            "No API token found for host '{}'. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      hubctl --token <TOKEN>\n\
             2. Environment var:   export {}=<TOKEN>\n\
             3. hub config:        oauth_token under '{}'\n\
             \n\
             Checked: env var [{}]{}",
            self.host,
            hub_config::TOKEN_ENV_VAR,
            self.host,
            hub_config::TOKEN_ENV_VAR,
            config_info
        )
    }
}
