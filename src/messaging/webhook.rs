use reqwest::{Client, StatusCode, Url};
use std::time::Duration;

use crate::domain::order::Order;

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Webhook unreachable: {0}")]
    Network(String),

    #[error("Webhook rejected order (status {0})")]
    Rejected(StatusCode),
}

/// Posts persisted orders to one external endpoint.
#[derive(Clone)]
pub struct WebhookClient {
    client: Client,
    url: Url,
}

impl WebhookClient {
    pub fn new(url: Url, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build webhook HTTP client: {}", e))?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// One attempt, no retry. Only the status code of the reply is read.
    pub async fn deliver(&self, order: &Order) -> Result<StatusCode, RelayError> {
        let response = self
            .client
            .post(self.url.clone())
            .json(order)
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(status)
        } else {
            Err(RelayError::Rejected(status))
        }
    }
}
