//! Context window assembly.
//!
//! The upstream request carries one fixed system turn plus a bounded trailing
//! window of the conversation. Truncation drops the oldest turns first and
//! never reorders the remainder; the system turn is not counted against the
//! window.

use crate::message::ChatTurn;

#[derive(Debug, Clone)]
pub struct ContextBuilder {
    system_prompt: String,
    window: usize,
}

impl ContextBuilder {
    pub fn new(system_prompt: impl Into<String>, window: usize) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            window,
        }
    }

    /// Build the outbound message sequence: `[system, ...last-window-turns]`.
    ///
    /// The caller's history is left untouched. An empty history degenerates
    /// to the system turn alone.
    pub fn build(&self, history: &[ChatTurn]) -> Vec<ChatTurn> {
        let start = history.len().saturating_sub(self.window);
        let mut messages = Vec::with_capacity(history.len() - start + 1);
        messages.push(ChatTurn::system(self.system_prompt.clone()));
        messages.extend_from_slice(&history[start..]);
        messages
    }
}
