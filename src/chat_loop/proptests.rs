//! Property-based tests for the conversation loop
//!
//! These tests verify that every submission appends the right number of
//! turns no matter what the user types or how the worker responds.

use super::*;
use crate::llm::LlmError;
use crate::topic_filter;
use proptest::prelude::*;

// ============================================================================
// Generators
// ============================================================================

fn arb_blank() -> impl Strategy<Value = String> {
    "[ \t\r\n]{0,10}"
}

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ?!.,']{1,80}",
        (
            "[a-z ]{0,20}",
            proptest::sample::select(topic_filter::KEYWORDS),
            "[a-z ?]{0,20}"
        )
            .prop_map(|(a, k, b)| format!("{a}{k}{b}")),
    ]
}

fn arb_outcome() -> impl Strategy<Value = Event> {
    prop_oneof![
        "[a-zA-Z .]{1,60}".prop_map(|text| Event::ReplyReceived { text }),
        "[a-z ]{1,30}".prop_map(|m| Event::ReplyFailed {
            error: LlmError::network(m)
        }),
        (400u16..600).prop_map(|s| Event::ReplyFailed {
            error: LlmError::status(s, format!("Worker error: {s}"))
        }),
    ]
}

/// Drive a submission to completion, resolving any request with `outcome`
fn run(text: String, outcome: Event) -> Vec<Effect> {
    let mut all = Vec::new();
    let mut pending = vec![Event::Submit { text }];
    let mut outcome = Some(outcome);

    while let Some(event) = pending.pop() {
        for effect in transition(event) {
            if effect == Effect::RequestCompletion {
                if let Some(o) = outcome.take() {
                    pending.push(o);
                }
            }
            all.push(effect);
        }
    }
    all
}

fn count_users(effects: &[Effect]) -> usize {
    effects
        .iter()
        .filter(|e| matches!(e, Effect::AppendUser(_)))
        .count()
}

fn count_assistants(effects: &[Effect]) -> usize {
    effects
        .iter()
        .filter(|e| matches!(e, Effect::AppendAssistant(_)))
        .count()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn blank_input_has_no_effects(text in arb_blank(), outcome in arb_outcome()) {
        prop_assert!(run(text, outcome).is_empty());
    }

    #[test]
    fn submission_appends_one_user_turn_first(text in arb_text(), outcome in arb_outcome()) {
        prop_assume!(!text.trim().is_empty());
        let effects = run(text.clone(), outcome);

        prop_assert_eq!(count_users(&effects), 1);
        let first = Effect::AppendUser(text.trim().to_string());
        prop_assert_eq!(&effects[0], &first);
    }

    #[test]
    fn routing_follows_topic_filter(text in arb_text(), outcome in arb_outcome()) {
        prop_assume!(!text.trim().is_empty());
        let effects = run(text.clone(), outcome);
        let requested = effects.contains(&Effect::RequestCompletion);

        prop_assert_eq!(requested, topic_filter::is_in_scope(&text));
        if requested {
            // placeholder + terminal reply
            prop_assert_eq!(count_assistants(&effects), 2);
        } else {
            let refusal = Effect::AppendAssistant(OFF_TOPIC_REPLY.to_string());
            prop_assert_eq!(count_assistants(&effects), 1);
            prop_assert_eq!(effects.last(), Some(&refusal));
        }
    }

    #[test]
    fn last_effect_is_always_terminal_assistant_turn(text in arb_text(), outcome in arb_outcome()) {
        prop_assume!(!text.trim().is_empty());
        let effects = run(text, outcome);
        let last = effects
            .iter()
            .rev()
            .find(|e| matches!(e, Effect::AppendUser(_) | Effect::AppendAssistant(_)));

        prop_assert!(matches!(last, Some(Effect::AppendAssistant(t)) if t != THINKING_REPLY));
    }

    #[test]
    fn failures_always_produce_canned_error(text in "[a-z ]{0,20}skin[a-z ]{0,20}", status in 400u16..600) {
        let effects = run(text, Event::ReplyFailed { error: LlmError::status(status, "x") });
        let canned = Effect::AppendAssistant(ERROR_REPLY.to_string());
        prop_assert_eq!(effects.last(), Some(&canned));
    }
}
