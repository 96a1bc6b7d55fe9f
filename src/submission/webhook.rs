use reqwest::Client;
use log::{info, error};
use thiserror::Error;

use super::payload::SubmissionPayload;

/// Transport failures and rejection statuses are the same kind of error to
/// callers: the attempt failed, here is why, try again manually if you like.
#[derive(Error, Debug)]
pub enum TransmissionError {
    #[error("collector responded with HTTP status {0}")]
    Status(u16),
    #[error("request to collector failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Thin client for the collection endpoint. One POST per submit attempt,
/// no retries, no layered timeout beyond the transport defaults.
#[derive(Clone)]
pub struct WebhookClient {
    client: Client,
    endpoint: String,
}

impl WebhookClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Deliver one payload as a JSON POST. Any 2xx status is a success; the
    /// response body is optional JSON and an unparseable body is treated as
    /// an empty object rather than a failure.
    pub async fn deliver(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<serde_json::Value, TransmissionError> {
        info!("📨 Delivering submission to collector: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!("Collector rejected submission: HTTP {}", status);
            return Err(TransmissionError::Status(status.as_u16()));
        }

        let body = response
            .json::<serde_json::Value>()
            .await
            .unwrap_or_else(|_| serde_json::Value::Object(serde_json::Map::new()));

        info!("✅ Collector accepted submission ({})", status);
        Ok(body)
    }
}
