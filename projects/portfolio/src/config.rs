use interfaces_github_repositories::index::{
    FetchUserRepositoriesError, GitHubClient, GITHUB_API_BASE_URL,
};
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = GITHUB_API_BASE_URL;
pub const DEFAULT_USER_AGENT: &str = "portfolio-descriptions";
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const API_BASE_URL_ENV: &str = "PORTFOLIO_API_BASE_URL";
pub const USER_AGENT_ENV: &str = "PORTFOLIO_USER_AGENT";
pub const LOG_LEVEL_ENV: &str = "PORTFOLIO_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioConfig {
    pub api_base_url: Url,
    pub user_agent: String,
    pub log_level: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse(DEFAULT_API_BASE_URL).expect("default API base URL is valid"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl PortfolioConfig {
    pub fn new(api_base_url: &str, user_agent: &str, log_level: &str) -> Result<Self, ConfigError> {
        let api_base_url = parse_api_base_url(api_base_url)?;

        let user_agent = user_agent.trim();
        if user_agent.is_empty() {
            return Err(ConfigError::EmptyUserAgent);
        }

        Ok(Self {
            api_base_url,
            user_agent: user_agent.to_string(),
            log_level: log_level.to_string(),
        })
    }

    /// Layers `PORTFOLIO_*` variables from `lookup` over the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup(API_BASE_URL_ENV).unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let user_agent = lookup(USER_AGENT_ENV).unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        let log_level = lookup(LOG_LEVEL_ENV).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Self::new(&api_base_url, &user_agent, &log_level)
    }

    /// Reads the process environment, after loading `.env` when one exists.
    /// Values returned by `overrides` take precedence over the environment.
    pub fn from_env_with_overrides<F>(overrides: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| overrides(key).or_else(|| std::env::var(key).ok()))
    }

    pub fn github_client(&self) -> Result<GitHubClient, FetchUserRepositoriesError> {
        GitHubClient::new(self.api_base_url.clone(), &self.user_agent)
    }
}

fn parse_api_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidApiBaseUrl {
        url: raw.to_string(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ConfigError::UnsupportedScheme {
            scheme: scheme.to_string(),
        }),
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("InvalidApiBaseUrl: {url}: {source}")]
    InvalidApiBaseUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("UnsupportedScheme: {scheme} (expected http or https)")]
    UnsupportedScheme {
        scheme: String,
    },

    #[error("User agent must not be empty")]
    EmptyUserAgent,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = PortfolioConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, PortfolioConfig::default());
        assert_eq!(config.api_base_url.as_str(), "https://api.github.com/");
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = PortfolioConfig::from_lookup(lookup_from(&[
            (API_BASE_URL_ENV, "http://127.0.0.1:9000"),
            (USER_AGENT_ENV, "my-site"),
            (LOG_LEVEL_ENV, "debug"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url.as_str(), "http://127.0.0.1:9000/");
        assert_eq!(config.user_agent, "my-site");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            PortfolioConfig::new("not a url", DEFAULT_USER_AGENT, "info"),
            Err(ConfigError::InvalidApiBaseUrl { .. })
        ));
        assert!(matches!(
            PortfolioConfig::new("ftp://example.com", DEFAULT_USER_AGENT, "info"),
            Err(ConfigError::UnsupportedScheme { .. })
        ));
        assert!(matches!(
            PortfolioConfig::new(DEFAULT_API_BASE_URL, "  ", "info"),
            Err(ConfigError::EmptyUserAgent)
        ));
    }

    #[test]
    fn builds_client_for_configured_host() {
        let config = PortfolioConfig::new("http://localhost:8080/api", "ua", "info").unwrap();
        let client = config.github_client().unwrap();
        assert_eq!(
            client.user_repositories_url("octocat").unwrap().as_str(),
            "http://localhost:8080/api/users/octocat/repos"
        );
    }
}
