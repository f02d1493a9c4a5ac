//! Completion error types

use thiserror::Error;

/// Completion error with classification
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct LlmError {
    pub kind: LlmErrorKind,
    pub message: String,
    /// HTTP status for `LlmErrorKind::Status`
    pub status: Option<u16>,
}

impl LlmError {
    pub fn new(kind: LlmErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::Network, message)
    }

    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            ..Self::new(LlmErrorKind::Status, message)
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::MalformedReply, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::Config, message)
    }
}

/// Error classification. Every kind is terminal for the call; `Config`
/// only occurs at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmErrorKind {
    /// Connection, timeout, or body read failure
    Network,
    /// Worker answered with a non-success status
    Status,
    /// Response body lacks a usable reply
    MalformedReply,
    /// Bad worker URL or HTTP client setup
    Config,
}

impl LlmErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LlmErrorKind::Network => "network",
            LlmErrorKind::Status => "status",
            LlmErrorKind::MalformedReply => "malformed_reply",
            LlmErrorKind::Config => "config",
        }
    }
}
