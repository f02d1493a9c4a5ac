//! Effects produced by transitions

/// Effects to be executed after a transition, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Append a user turn and render it
    AppendUser(String),

    /// Append an assistant turn and render it
    AppendAssistant(String),

    /// Update the "last question" label
    ShowLastQuestion(String),

    /// Send the current history to the completion worker
    RequestCompletion,
}

impl Effect {
    pub fn last_question(text: &str) -> Self {
        Effect::ShowLastQuestion(format!("You asked: {text}"))
    }
}
