//! Co-pilot chat transcript and submission state machine.
//!
//! DESIGN
//! ======
//! `Idle -> Submitting -> Idle`. A submission is accepted only from `Idle`
//! with non-blank input; the completion is accepted only while `Submitting`.
//! Each accepted round trip therefore adds exactly two transcript entries.
//!
//! The prompt text lives in its own store so typing never touches the
//! transcript. `submit` clears it only when the query is accepted.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde_json::Value;

use super::Store;
use crate::net::api::{ApiError, DashboardBackend};
use crate::net::types::QueryAnswer;

/// First assistant entry shown on every page load.
pub const GREETING: &str = "Hello! I'm your AI Mining Operations Co-Pilot. Ask me about fuel consumption, maintenance schedules, production efficiency, or carbon emissions.";

/// Assistant entry shown when a query fails for any reason.
pub const FAILURE_REPLY: &str = "I encountered an error processing your request. Please try again.";

/// Who authored a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    /// Milliseconds since the Unix epoch.
    pub timestamp_ms: f64,
    /// Structured payload attached to an assistant answer.
    pub data: Option<Value>,
}

impl ChatMessage {
    fn new(text: impl Into<String>, sender: Sender, timestamp_ms: f64, data: Option<Value>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), text: text.into(), sender, timestamp_ms, data }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChatPhase {
    #[default]
    Idle,
    Submitting,
}

/// Transcript and the single in-flight query guard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    phase: ChatPhase,
}

impl ChatSession {
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn phase(&self) -> ChatPhase {
        self.phase
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == ChatPhase::Submitting
    }

    /// Add the greeting if the transcript is still empty.
    pub fn seed_greeting(&mut self, now_ms: f64) {
        if self.messages.is_empty() {
            self.messages.push(ChatMessage::new(GREETING, Sender::Assistant, now_ms, None));
        }
    }

    /// Accept `text` as a query.
    ///
    /// Returns the raw (untrimmed) text to send, or `None` if it is blank or a
    /// query is already in flight. On acceptance the user entry is appended.
    pub fn begin_submit(&mut self, text: &str, now_ms: f64) -> Option<String> {
        if self.is_loading() || text.trim().is_empty() {
            return None;
        }
        let query = text.to_owned();
        self.messages.push(ChatMessage::new(query.clone(), Sender::User, now_ms, None));
        self.phase = ChatPhase::Submitting;
        Some(query)
    }

    /// Record the outcome of the in-flight query and return to `Idle`.
    ///
    /// Ignored unless a query is in flight.
    pub fn finish(&mut self, outcome: Result<QueryAnswer, ApiError>, now_ms: f64) {
        if !self.is_loading() {
            log::debug!("dropping query completion with no query in flight");
            return;
        }
        let reply = match outcome {
            Ok(answer) => ChatMessage::new(answer.text, Sender::Assistant, now_ms, answer.data),
            Err(e) => {
                log::error!("co-pilot query failed: {e}");
                ChatMessage::new(FAILURE_REPLY, Sender::Assistant, now_ms, None)
            }
        };
        self.messages.push(reply);
        self.phase = ChatPhase::Idle;
    }
}

/// Submit the text in `input` through `backend`, if it is accepted.
///
/// Returns `false` when the submission was rejected (blank input or a query
/// already in flight) and no request was sent. The input is left untouched
/// on rejection and cleared on acceptance.
pub async fn submit<B, S, I>(backend: &B, store: &S, input: &I, now_ms: impl Fn() -> f64) -> bool
where
    B: DashboardBackend + ?Sized,
    S: Store<ChatSession>,
    I: Store<String>,
{
    let Some(text) = input.modify(|text| text.clone()) else {
        return false;
    };
    let Some(query) = store.modify(|chat| chat.begin_submit(&text, now_ms())).flatten() else {
        return false;
    };
    input.modify(String::clear);
    let outcome = backend.query(&query).await;
    store.modify(|chat| chat.finish(outcome, now_ms()));
    true
}
