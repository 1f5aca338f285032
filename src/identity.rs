//! One-shot bridge to the messaging platform's login service.
//!
//! Initialized with the configured application identifier; on success
//! the player's profile display name is fetched for presentation only.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::config::LoginConfig;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("login platform request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("login platform returned status {0}")]
    Status(u16),
}

/// The slice of the platform profile the game presents.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    #[serde(rename = "displayName")]
    pub display_name: String,
}

pub struct LoginBridge {
    http: Client,
    base_url: String,
    app_id: String,
}

impl LoginBridge {
    pub fn new(config: &LoginConfig) -> Self {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            app_id: config.app_id.clone(),
        }
    }

    /// One-shot initialization + profile fetch.
    ///
    /// Failures are returned, not swallowed; the caller shows a status
    /// line and leaves the player name blank.
    pub async fn fetch_profile(&self) -> Result<Profile, IdentityError> {
        let url = format!("{}/v2/profile", self.base_url);
        debug!(app_id = %self.app_id, "fetching player profile");
        let response = self
            .http
            .get(&url)
            .header("X-App-Id", &self.app_id)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(IdentityError::Status(status.as_u16()));
        }
        Ok(response.json().await?)
    }
}
