//! Trait abstractions for runtime I/O
//!
//! The completion side lives in `crate::llm::CompletionClient`; this is the
//! rendering side, so the executor can be tested without a terminal.

use crate::conversation::Turn;

/// Where turns and the last-question label are displayed
pub trait ChatView {
    /// Display a turn that was just appended
    fn render_turn(&mut self, turn: &Turn);

    /// Replace the "last question" label
    fn show_last_question(&mut self, text: &str);

    /// Signal that the next input can be typed
    fn show_prompt(&mut self) {}
}
