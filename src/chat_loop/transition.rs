//! Pure transition function
//!
//! Given an event, returns the effects to run. No I/O happens here; the
//! topic filter is a pure function and is evaluated inline.

use super::{Effect, Event};
use crate::topic_filter;

/// Canned answer for questions the topic filter rejects
pub const OFF_TOPIC_REPLY: &str = "I’m here just to help with L'Oréal products, beauty routines, and related questions. 💄\n\nTry asking me about skincare, makeup, haircare, or fragrance!";

/// Placeholder shown while the worker is answering
pub const THINKING_REPLY: &str = "Thinking about your routine… ✨";

/// Shown when the completion exchange fails for any reason
pub const ERROR_REPLY: &str =
    "Oops, something went wrong talking to my beauty brain. Please try again in a moment.";

/// Greeting appended when a session starts
pub const WELCOME_REPLY: &str = "Bonjour! I’m your L'Oréal Smart Product & Routine Advisor ✨\n\nAsk me about L'Oréal skincare, makeup, haircare, or help building a routine.";

/// Pure transition function
///
/// Every non-empty submission yields exactly one user turn followed by
/// either a terminal assistant turn (refusal) or the placeholder plus a
/// completion request. The request always resolves to exactly one more
/// assistant turn via `ReplyReceived` or `ReplyFailed`.
pub fn transition(event: Event) -> Vec<Effect> {
    match event {
        Event::Submit { text } => {
            let text = text.trim();
            if text.is_empty() {
                return vec![];
            }

            let mut effects = vec![
                Effect::AppendUser(text.to_string()),
                Effect::last_question(text),
            ];

            if topic_filter::is_in_scope(text) {
                effects.push(Effect::AppendAssistant(THINKING_REPLY.to_string()));
                effects.push(Effect::RequestCompletion);
            } else {
                effects.push(Effect::AppendAssistant(OFF_TOPIC_REPLY.to_string()));
            }

            effects
        }

        Event::ReplyReceived { text } => vec![Effect::AppendAssistant(text)],

        Event::ReplyFailed { .. } => vec![Effect::AppendAssistant(ERROR_REPLY.to_string())],
    }
}
