//! Per-submission conversation loop
//!
//! Implements the Elm Architecture pattern: a pure transition from events
//! to effects, with all I/O left to the runtime.

mod effect;
mod event;
mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
pub use transition::{transition, ERROR_REPLY, OFF_TOPIC_REPLY, THINKING_REPLY, WELCOME_REPLY};
