/// Configuration constants for the GitHub API
pub mod api {
    /// Public GitHub host
    pub const GITHUB_HOST: &str = "github.com";

    /// API host used for the public GitHub host
    pub const GITHUB_API_HOST: &str = "api.github.com";

    /// API path prefix on GitHub Enterprise hosts
    pub const ENTERPRISE_BASE_PATH: &str = "/api/v3";

    /// Media type sent in the Accept header
    pub const MEDIA_TYPE: &str = "application/vnd.github.v3+json";

    /// Repositories endpoint
    pub const REPOS: &str = "repos";

    /// Authenticated user endpoint
    pub const USER: &str = "user";

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Whole-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Configuration constants for the hub config file
pub mod hub_config {
    /// Environment variable overriding the config file path
    pub const PATH_ENV_VAR: &str = "HUB_CONFIG";

    /// Config file name inside the XDG config directory
    pub const FILE_NAME: &str = "hub";

    /// Config file path relative to HOME when XDG_CONFIG_HOME is unset
    pub const FILE_PATH_UNIX: &str = ".config/hub";

    /// Environment variable selecting the host
    pub const HOST_ENV_VAR: &str = "GITHUB_HOST";

    /// Environment variable holding the API token
    pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

    /// Environment variable holding the default user
    pub const USER_ENV_VAR: &str = "GITHUB_USER";

    /// Protocol used when the config file does not name one
    pub const DEFAULT_PROTOCOL: &str = "https";
}

/// Default values for CLI
pub mod defaults {
    /// Default host
    pub const HOST: &str = super::api::GITHUB_HOST;

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enterprise_base_path_format() {
        assert!(api::ENTERPRISE_BASE_PATH.starts_with('/'));
        assert!(!api::ENTERPRISE_BASE_PATH.ends_with('/'));
    }

    #[test]
    fn test_default_host_is_valid() {
        assert!(defaults::HOST.contains('.'));
        assert!(!defaults::HOST.starts_with("https://"));
    }

    #[test]
    fn test_env_var_names() {
        assert_eq!(hub_config::HOST_ENV_VAR, "GITHUB_HOST");
        assert_eq!(hub_config::TOKEN_ENV_VAR, "GITHUB_TOKEN");
        assert_eq!(hub_config::USER_ENV_VAR, "GITHUB_USER");
    }
}
