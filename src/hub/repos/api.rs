//! Repository API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::hub::HubClient;

use super::models::RepositoryIdentifier;

impl HubClient {
    /// Delete a repository. Irreversible; issued exactly once, never retried.
    pub async fn delete_repository(&self, repo: &RepositoryIdentifier) -> Result<()> {
        let url = format!(
            "{}/{}/{}/{}",
            self.base_url(),
            api::REPOS,
            urlencoding::encode(&repo.owner),
            urlencoding::encode(&repo.name)
        );

        debug!("Deleting repository {} via {}", repo, url);

        let response = self.delete(&url).send().await?;

        match response.status().as_u16() {
            200 | 204 => {
                debug!("Successfully deleted repository {}", repo);
                Ok(())
            }
            _ => Err(self.api_error(response).await),
        }
    }
}
