use std::future::Future;

use interfaces_github_repositories::{
    index::{FetchUserRepositoriesError, GitHubClient, GitHubRestResult},
    models::{decode_repositories, DecodedRepositories, RepositoryRecord},
};
use thiserror::Error;
use tracing::{debug, warn};

/// Where repository records come from.
pub trait RepositorySource {
    type Error: std::error::Error;

    fn list_user_repositories(
        &self,
        user: &str,
    ) -> impl Future<Output = Result<Vec<RepositoryRecord>, Self::Error>>;
}

#[derive(Debug, Error)]
pub enum ListRepositoriesError {
    #[error("FetchUserRepositories: {source}")]
    FetchUserRepositories {
        #[from]
        source: FetchUserRepositoriesError,
    },

    #[error("DeserializeResponseBody: {source}")]
    DeserializeResponseBody {
        #[from]
        source: serde_json::Error,
    },
}

impl RepositorySource for GitHubClient {
    type Error = ListRepositoriesError;

    async fn list_user_repositories(
        &self,
        user: &str,
    ) -> Result<Vec<RepositoryRecord>, ListRepositoriesError> {
        let GitHubRestResult { body, status } = self.fetch_user_repositories(user).await?;
        debug!(user, %status, bytes = body.len(), "Received repository list");

        let DecodedRepositories { records, rejected } = decode_repositories(&body)?;
        for entry in &rejected {
            warn!(user, index = entry.index, error = %entry.error, "Skipping malformed repository entry");
        }

        Ok(records)
    }
}
