//! Dashboard mount sequence.
//!
//! Order is fixed: guard check (abort on failure), start the snapshot and
//! alert fetches, then seed the chat greeting. Charts render later, once
//! the snapshot lands and their canvases exist.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use crate::net::types::Severity;
use crate::state::Store;
use crate::state::chat::ChatSession;
use crate::util::session_guard::{Access, Navigator, SessionGuard, SessionProvider};

/// Run the mount sequence. `start_fetches` is only called once access is granted.
pub fn mount<P, N, S>(guard: &SessionGuard<P, N>, chat: &S, now_ms: f64, start_fetches: impl FnOnce()) -> Access
where
    P: SessionProvider,
    N: Navigator,
    S: Store<ChatSession>,
{
    let access = guard.access();
    if access != Access::Granted {
        return access;
    }
    start_fetches();
    chat.modify(|session| session.seed_greeting(now_ms));
    access
}

/// CSS class for a raw backend severity string.
#[must_use]
pub fn alert_class(raw: Option<&str>) -> &'static str {
    Severity::from_wire(raw).style_class()
}
