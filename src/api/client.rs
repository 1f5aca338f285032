use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::error::ApiError;
use crate::api::types::{ContractDetail, MintReceipt, MintRequest, PriceFeed, TokenBalance};
use crate::config::BackendConfig;

/// Thin async client for the token backend: four stateless request/
/// response operations against a configured base URL.
pub struct ApiClient {
    http: Client,
    base_url: String,
    request_timeout: Duration,
}

impl ApiClient {
    pub fn new(config: &BackendConfig) -> Self {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(config.timeout_seconds as u64),
        }
    }

    /// `GET /contract/detail` — token contract metadata.
    pub async fn contract_detail(&self) -> Result<ContractDetail, ApiError> {
        let url = format!("{}/contract/detail", self.base_url);
        self.get_json("contract/detail", &url).await
    }

    /// `GET /contract/balance/{address}` — balance display string.
    pub async fn balance(&self, address: &str) -> Result<TokenBalance, ApiError> {
        let url = format!("{}/contract/balance/{}", self.base_url, address);
        self.get_json("contract/balance", &url).await
    }

    /// `POST /contract/mint {to, amount}` — mints tokens to `to` and
    /// returns the transaction receipt.
    pub async fn mint(&self, to: &str, amount: &str) -> Result<MintReceipt, ApiError> {
        const ENDPOINT: &str = "contract/mint";
        let url = format!("{}/contract/mint", self.base_url);
        let body = MintRequest {
            to: to.to_string(),
            amount: amount.to_string(),
        };
        debug!(endpoint = ENDPOINT, to, amount, "issuing mint request");
        let response = self
            .http
            .post(&url)
            .timeout(self.request_timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.classify(ENDPOINT, e))?;
        self.decode(ENDPOINT, response).await
    }

    /// `GET /price-feed` — latest token price snapshot.
    pub async fn price_feed(&self) -> Result<PriceFeed, ApiError> {
        let url = format!("{}/price-feed", self.base_url);
        self.get_json("price-feed", &url).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        url: &str,
    ) -> Result<T, ApiError> {
        debug!(endpoint, "issuing request");
        let response = self
            .http
            .get(url)
            .timeout(self.request_timeout)
            .send()
            .await
            .map_err(|e| self.classify(endpoint, e))?;
        self.decode(endpoint, response).await
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode { endpoint, source: e })
    }

    fn classify(&self, endpoint: &'static str, source: reqwest::Error) -> ApiError {
        if source.is_timeout() {
            ApiError::Timeout {
                endpoint,
                seconds: self.request_timeout.as_secs(),
            }
        } else {
            ApiError::Transport { endpoint, source }
        }
    }
}
