//! Authenticated user lookup

use log::debug;
use serde::Deserialize;

use crate::config::api;
use crate::error::Result;

use super::HubClient;

/// The authenticated user as returned by `GET /user`
#[derive(Deserialize, Debug, Clone)]
pub struct User {
    pub login: String,
}

impl HubClient {
    /// Fetch the user the token belongs to
    pub async fn current_user(&self) -> Result<User> {
        let url = format!("{}/{}", self.base_url(), api::USER);
        debug!("Fetching current user from: {}", url);

        let response = self.get(&url).send().await?;
        let user: User = self.parse_api_response(response).await?;

        debug!("Authenticated as {}", user.login);
        Ok(user)
    }
}
