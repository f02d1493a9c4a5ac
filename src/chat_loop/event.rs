//! Events that drive the conversation loop

use crate::llm::LlmError;

/// Events that trigger transitions
#[derive(Debug, Clone)]
pub enum Event {
    /// Raw text from the input control, not yet trimmed
    Submit { text: String },

    /// The completion worker answered
    ReplyReceived { text: String },

    /// The completion exchange failed
    ReplyFailed { error: LlmError },
}
