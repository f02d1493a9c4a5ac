//! Completion client abstraction
//!
//! Sends the conversation to the remote completion worker and returns the
//! reply text.

mod error;
mod types;
mod worker;

pub use error::{LlmError, LlmErrorKind};
pub use worker::WorkerClient;

use crate::conversation::Turn;
use async_trait::async_trait;
use std::sync::Arc;

/// Common interface for completion endpoints
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send the full ordered history and return the trimmed reply
    async fn complete(&self, turns: &[Turn]) -> Result<String, LlmError>;

    /// Where requests go, for logging
    fn endpoint(&self) -> &str;
}

#[async_trait]
impl<T: CompletionClient + ?Sized> CompletionClient for Arc<T> {
    async fn complete(&self, turns: &[Turn]) -> Result<String, LlmError> {
        (**self).complete(turns).await
    }

    fn endpoint(&self) -> &str {
        (**self).endpoint()
    }
}

/// Logging wrapper for completion clients
pub struct LoggingClient<C> {
    inner: C,
}

impl<C: CompletionClient> LoggingClient<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<C: CompletionClient> CompletionClient for LoggingClient<C> {
    async fn complete(&self, turns: &[Turn]) -> Result<String, LlmError> {
        let start = std::time::Instant::now();
        let result = self.inner.complete(turns).await;
        let duration = start.elapsed();

        match &result {
            Ok(reply) => {
                tracing::info!(
                    endpoint = %self.inner.endpoint(),
                    duration_ms = %duration.as_millis(),
                    turns = turns.len(),
                    reply_chars = reply.chars().count(),
                    "Completion request completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    endpoint = %self.inner.endpoint(),
                    duration_ms = %duration.as_millis(),
                    turns = turns.len(),
                    kind = e.kind.as_str(),
                    status = ?e.status,
                    error = %e.message,
                    "Completion request failed"
                );
            }
        }

        result
    }

    fn endpoint(&self) -> &str {
        self.inner.endpoint()
    }
}
