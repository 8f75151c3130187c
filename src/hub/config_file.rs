//! hub config file I/O
//!
//! The file is YAML keyed by host, each host holding a list of entries:
//!
//! ```yaml
//! github.com:
//! - user: alice
//!   oauth_token: <TOKEN>
//!   protocol: https
//! ```

use log::debug;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::hub_config;
use crate::error::{HubError, Result};

/// A single account entry for a host
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostEntry {
    /// Login of the authenticated user
    #[serde(default)]
    pub user: Option<String>,
    /// API token
    #[serde(default)]
    pub oauth_token: Option<String>,
    /// Protocol used to reach the host (https unless stated)
    #[serde(default)]
    pub protocol: Option<String>,
}

/// Parsed hub config file
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct HubConfig {
    hosts: BTreeMap<String, Vec<HostEntry>>,
}

impl HubConfig {
    /// Configured host names, sorted
    pub fn hosts(&self) -> Vec<String> {
        self.hosts.keys().cloned().collect()
    }

    /// First account entry for the given host
    pub fn entry(&self, host: &str) -> Option<&HostEntry> {
        self.hosts.get(host).and_then(|entries| entries.first())
    }
}

/// Handles reading the hub config file
pub struct HubConfigStore {
    config_path: Option<PathBuf>,
}

impl Default for HubConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HubConfigStore {
    /// Create a new store using HUB_CONFIG or the default path (~/.config/hub)
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a store with a custom config path (for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: Some(path),
        }
    }

    /// Path of the config file, if one could be determined
    pub fn path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn default_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(hub_config::PATH_ENV_VAR) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }

        if let Ok(dir) = std::env::var("XDG_CONFIG_HOME") {
            if !dir.is_empty() {
                return Some(PathBuf::from(dir).join(hub_config::FILE_NAME));
            }
        }

        dirs::home_dir().map(|p| p.join(hub_config::FILE_PATH_UNIX))
    }

    /// Load the config file from disk.
    /// Returns Default if the file doesn't exist, errors on corrupt YAML.
    pub fn load(&self) -> Result<HubConfig> {
        let Some(path) = self.config_path.as_deref() else {
            debug!("No home directory, skipping hub config file");
            return Ok(HubConfig::default());
        };

        if !path.exists() {
            debug!("hub config file {} does not exist", path.display());
            return Ok(HubConfig::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            HubError::Config(format!(
                "Failed to read hub config {}: {}",
                path.display(),
                e
            ))
        })?;

        if content.trim().is_empty() {
            return Ok(HubConfig::default());
        }

        let config: HubConfig = serde_yml::from_str(&content).map_err(|e| {
            HubError::Config(format!(
                "Failed to parse hub config {}: {}",
                path.display(),
                e
            ))
        })?;

        debug!(
            "Loaded hub config {} with hosts {:?}",
            path.display(),
            config.hosts()
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = HubConfigStore::with_path(dir.path().join("hub"));
        let config = store.load().unwrap();
        assert!(config.hosts().is_empty());
    }

    #[test]
    fn test_load_empty_file_returns_default() {
        let file = write_config("\n");
        let store = HubConfigStore::with_path(file.path().to_path_buf());
        assert!(store.load().unwrap().hosts().is_empty());
    }

    #[test]
    fn test_load_single_host() {
        let file = write_config(
            "github.com:\n- user: alice\n  oauth_token: abc123\n  protocol: https\n",
        );
        let store = HubConfigStore::with_path(file.path().to_path_buf());
        let config = store.load().unwrap();

        assert_eq!(config.hosts(), vec!["github.com".to_string()]);
        let entry = config.entry("github.com").unwrap();
        assert_eq!(entry.user.as_deref(), Some("alice"));
        assert_eq!(entry.oauth_token.as_deref(), Some("abc123"));
        assert_eq!(entry.protocol.as_deref(), Some("https"));
    }

    #[test]
    fn test_load_multiple_hosts_sorted() {
        let file = write_config(
            "github.example.com:\n- user: bob\n  oauth_token: t2\ngithub.com:\n- user: alice\n  oauth_token: t1\n",
        );
        let store = HubConfigStore::with_path(file.path().to_path_buf());
        let config = store.load().unwrap();

        assert_eq!(
            config.hosts(),
            vec!["github.com".to_string(), "github.example.com".to_string()]
        );
        assert_eq!(
            config.entry("github.example.com").unwrap().user.as_deref(),
            Some("bob")
        );
        assert!(config.entry("github.example.com").unwrap().protocol.is_none());
    }

    #[test]
    fn test_entry_unknown_host() {
        let file = write_config("github.com:\n- user: alice\n");
        let store = HubConfigStore::with_path(file.path().to_path_buf());
        let config = store.load().unwrap();
        assert!(config.entry("other.host").is_none());
    }

    #[test]
    fn test_load_corrupt_file_is_error() {
        let file = write_config("github.com: [unclosed\n");
        let store = HubConfigStore::with_path(file.path().to_path_buf());
        match store.load() {
            Err(HubError::Config(msg)) => assert!(msg.contains("Failed to parse hub config")),
            other => panic!("Expected HubError::Config, got {:?}", other),
        }
    }
}
