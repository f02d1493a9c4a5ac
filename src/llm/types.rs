//! Wire types for the completion worker
//!
//! Request: `{ "messages": [{ "role", "content" }, ...] }`
//! Response: `{ "choices": [{ "message": { "content": "..." } }] }`

use crate::conversation::Turn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(super) struct WorkerRequest<'a> {
    pub messages: &'a [Turn],
}

#[derive(Debug, Deserialize)]
pub(super) struct WorkerResponse {
    #[serde(default)]
    pub choices: Vec<WorkerChoice>,
}

#[derive(Debug, Deserialize)]
pub(super) struct WorkerChoice {
    #[serde(default)]
    pub message: Option<WorkerMessage>,
}

#[derive(Debug, Deserialize)]
pub(super) struct WorkerMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl WorkerResponse {
    /// `choices[0].message.content`, if present
    pub fn into_content(self) -> Option<String> {
        self.choices.into_iter().next()?.message?.content
    }
}
