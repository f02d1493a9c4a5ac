//! Runtime for executing chat sessions
//!
//! Owns the conversation and runs the effects produced by the loop.

mod executor;
pub mod traits;

#[cfg(test)]
pub mod testing;

pub use executor::{ChatSession, SubmitOutcome};
pub use traits::ChatView;
