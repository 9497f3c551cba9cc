use reqwest::{header, Client, StatusCode, Url};
use thiserror::Error;

pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";

pub struct GitHubRestResult {
    pub body: String,
    pub status: StatusCode,
}

/// Unauthenticated client for the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: Url,
}

impl GitHubClient {
    pub fn new(base_url: Url, user_agent: &str) -> Result<Self, FetchUserRepositoriesError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|source| FetchUserRepositoriesError::ClientBuild { source })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds `{base}/users/{user}/repos`, percent-encoding the user segment.
    pub fn user_repositories_url(&self, user: &str) -> Result<Url, FetchUserRepositoriesError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchUserRepositoriesError::InvalidBaseUrl {
                url: self.base_url.to_string(),
            })?
            .pop_if_empty()
            .extend(["users", user, "repos"]);

        Ok(url)
    }

    /// Single GET, no retry and no timeout. Any non-2xx status is an error.
    pub async fn fetch_user_repositories(
        &self,
        user: &str,
    ) -> Result<GitHubRestResult, FetchUserRepositoriesError> {
        let url = self.user_repositories_url(user)?;

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|source| FetchUserRepositoriesError::RequestSend { source })?;

        let status = response.status();

        let body = response
            .text()
            .await
            .map_err(|source| FetchUserRepositoriesError::ResponseRead { source })?;

        if !status.is_success() {
            return Err(FetchUserRepositoriesError::UnexpectedStatus { status, body });
        }

        Ok(GitHubRestResult { body, status })
    }
}

#[derive(Debug, Error)]
pub enum FetchUserRepositoriesError {
    #[error("ClientBuild: {source}")]
    ClientBuild {
        source: reqwest::Error,
    },

    #[error("InvalidBaseUrl: {url} cannot carry path segments")]
    InvalidBaseUrl {
        url: String,
    },

    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },

    #[error("UnexpectedStatus: {status}")]
    UnexpectedStatus {
        status: StatusCode,
        body: String,
    },
}
