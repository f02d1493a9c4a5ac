//! HTTP client for the completion worker

use super::types::{WorkerRequest, WorkerResponse};
use super::{CompletionClient, LlmError};
use crate::conversation::Turn;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Completion client that POSTs the conversation to a single worker URL
pub struct WorkerClient {
    client: Client,
    url: String,
}

impl WorkerClient {
    /// Build a client for `url`. Without a timeout a request waits for the
    /// worker indefinitely.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, LlmError> {
        let url = url.into();
        reqwest::Url::parse(&url)
            .map_err(|e| LlmError::config(format!("Invalid worker URL {url:?}: {e}")))?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| LlmError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, url })
    }

    fn parse_reply(body: &str) -> Result<String, LlmError> {
        let response: WorkerResponse = serde_json::from_str(body)
            .map_err(|e| LlmError::malformed(format!("Failed to parse response: {e}")))?;

        response
            .into_content()
            .map(|content| content.trim().to_string())
            .filter(|reply| !reply.is_empty())
            .ok_or_else(|| LlmError::malformed("No message content returned from API"))
    }
}

#[async_trait]
impl CompletionClient for WorkerClient {
    async fn complete(&self, turns: &[Turn]) -> Result<String, LlmError> {
        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(&WorkerRequest { messages: turns })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::network(format!("Request timeout: {e}"))
                } else if e.is_connect() {
                    LlmError::network(format!("Connection failed: {e}"))
                } else {
                    LlmError::network(format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LlmError::status(
                status.as_u16(),
                format!("Worker error: {}", status.as_u16()),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LlmError::network(format!("Failed to read response: {e}")))?;

        Self::parse_reply(&body)
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}
