//! Mock implementations for testing
//!
//! These mocks enable session tests without a worker or a terminal.

use super::traits::ChatView;
use crate::conversation::Turn;
use crate::llm::{CompletionClient, LlmError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

// ============================================================================
// Mock Completion Client
// ============================================================================

/// Mock completion client that returns queued results
pub struct MockCompletionClient {
    responses: Mutex<VecDeque<Result<String, LlmError>>>,
    /// History sent with each request
    requests: Mutex<Vec<Vec<Turn>>>,
}

impl MockCompletionClient {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful reply
    pub fn queue_reply(&self, reply: impl Into<String>) {
        self.responses.lock().unwrap().push_back(Ok(reply.into()));
    }

    /// Queue an error
    pub fn queue_error(&self, error: LlmError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Get recorded requests
    pub fn recorded_requests(&self) -> Vec<Vec<Turn>> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockCompletionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, turns: &[Turn]) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(turns.to_vec());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::network("No mock response queued")))
    }

    fn endpoint(&self) -> &str {
        "mock://worker"
    }
}

// ============================================================================
// Recording View
// ============================================================================

/// View that keeps everything it was asked to display
#[derive(Debug, Default)]
pub struct RecordingView {
    pub rendered: Vec<Turn>,
    pub last_question: Option<String>,
}

impl ChatView for RecordingView {
    fn render_turn(&mut self, turn: &Turn) {
        self.rendered.push(turn.clone());
    }

    fn show_last_question(&mut self, text: &str) {
        self.last_question = Some(text.to_string());
    }
}
