//! Chat session executor

use super::traits::ChatView;
use crate::chat_loop::{transition, Effect, Event, WELCOME_REPLY};
use crate::conversation::Conversation;
use crate::llm::CompletionClient;
use crate::topic_filter;
use std::collections::VecDeque;

/// How a submission ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input, nothing appended
    Ignored,
    /// Answered locally with the off-topic reply
    Refused,
    /// Worker reply appended
    Answered,
    /// Exchange failed, canned error appended
    Failed,
}

/// One chat session: the conversation plus the collaborators it talks to.
///
/// `submit` takes `&mut self`, so submissions on a session run one at a time.
pub struct ChatSession<C, V> {
    session_id: String,
    conversation: Conversation,
    client: C,
    view: V,
}

impl<C, V> ChatSession<C, V>
where
    C: CompletionClient,
    V: ChatView,
{
    pub fn new(system_prompt: impl Into<String>, client: C, view: V) -> Self {
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            conversation: Conversation::new(system_prompt),
            client,
            view,
        }
    }

    pub fn id(&self) -> &str {
        &self.session_id
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    #[cfg(test)]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Ask the view to prompt for the next input
    pub fn prompt(&mut self) {
        self.view.show_prompt();
    }

    /// Append and render the welcome turn
    pub fn greet(&mut self) {
        let turn = self.conversation.push_assistant(WELCOME_REPLY);
        self.view.render_turn(turn);
    }

    /// Run one submission to completion
    pub async fn submit(&mut self, input: &str) -> SubmitOutcome {
        let mut outcome = SubmitOutcome::Ignored;
        let mut events = VecDeque::from([Event::Submit {
            text: input.to_string(),
        }]);

        while let Some(event) = events.pop_front() {
            match &event {
                Event::Submit { text } => {
                    tracing::debug!(
                        session_id = %self.session_id,
                        keyword = ?topic_filter::matched_keyword(text),
                        "Submission received"
                    );
                }
                Event::ReplyReceived { .. } => outcome = SubmitOutcome::Answered,
                Event::ReplyFailed { .. } => outcome = SubmitOutcome::Failed,
            }

            let effects = transition(event);
            if outcome == SubmitOutcome::Ignored && !effects.is_empty() {
                outcome = SubmitOutcome::Refused;
            }

            for effect in effects {
                if let Some(next) = self.execute_effect(effect).await {
                    events.push_back(next);
                }
            }
        }

        tracing::info!(
            session_id = %self.session_id,
            outcome = ?outcome,
            turns = self.conversation.len(),
            last_role = self.conversation.last().role().as_str(),
            "Submission handled"
        );
        outcome
    }

    /// Execute one effect, returning the event it produced, if any
    async fn execute_effect(&mut self, effect: Effect) -> Option<Event> {
        match effect {
            Effect::AppendUser(text) => {
                let turn = self.conversation.push_user(text);
                self.view.render_turn(turn);
                None
            }
            Effect::AppendAssistant(text) => {
                let turn = self.conversation.push_assistant(text);
                self.view.render_turn(turn);
                None
            }
            Effect::ShowLastQuestion(text) => {
                self.view.show_last_question(&text);
                None
            }
            Effect::RequestCompletion => {
                let event = match self.client.complete(self.conversation.turns()).await {
                    Ok(text) => Event::ReplyReceived { text },
                    Err(error) => Event::ReplyFailed { error },
                };
                Some(event)
            }
        }
    }
}
