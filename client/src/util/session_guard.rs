//! Client-side session gate for the dashboard.
//!
//! The guard only checks that a token exists in `localStorage`; validating
//! it is the backend's job. Storage and navigation are injected so the
//! redirect behavior can be exercised without a browser.

#[cfg(test)]
#[path = "session_guard_test.rs"]
mod session_guard_test;

use std::cell::Cell;

use crate::config::{LOGIN_PATH, SESSION_TOKEN_KEY};

/// Source of truth for "is there a session on this client".
pub trait SessionProvider {
    fn has_valid_session(&self) -> bool;
}

/// Performs full-page navigations.
pub trait Navigator {
    fn redirect(&self, path: &str);
}

/// Outcome of the guard check as seen by the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Access {
    /// Not checked yet (server render, or before hydration).
    #[default]
    Pending,
    Granted,
    Denied,
}

/// A stored token counts only if it is present and non-empty.
#[must_use]
pub fn token_present(raw: Option<&str>) -> bool {
    raw.is_some_and(|token| !token.is_empty())
}

/// [`SessionProvider`] backed by `window.localStorage`.
#[derive(Clone, Copy, Debug)]
pub struct LocalStorageSession {
    key: &'static str,
}

impl Default for LocalStorageSession {
    fn default() -> Self {
        Self { key: SESSION_TOKEN_KEY }
    }
}

impl LocalStorageSession {
    fn read_token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()?.local_storage().ok()??;
            storage.get_item(self.key).ok()?
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.key;
            None
        }
    }
}

impl SessionProvider for LocalStorageSession {
    fn has_valid_session(&self) -> bool {
        token_present(self.read_token().as_deref())
    }
}

/// [`Navigator`] that assigns `window.location.href`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                log::error!("no window; cannot redirect to {path}");
                return;
            };
            if let Err(e) = window.location().set_href(path) {
                log::error!("redirect to {path} failed: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::debug!("redirect to {path} skipped outside the browser");
        }
    }
}

/// Gates the dashboard on session presence.
pub struct SessionGuard<P, N> {
    provider: P,
    navigator: N,
    redirected: Cell<bool>,
}

impl Default for SessionGuard<LocalStorageSession, BrowserNavigator> {
    fn default() -> Self {
        Self::new(LocalStorageSession::default(), BrowserNavigator)
    }
}

impl<P: SessionProvider, N: Navigator> SessionGuard<P, N> {
    pub fn new(provider: P, navigator: N) -> Self {
        Self { provider, navigator, redirected: Cell::new(false) }
    }

    /// Returns `true` if a session is present. Otherwise navigates to the
    /// login page (at most once per guard) and returns `false`.
    pub fn check_access(&self) -> bool {
        if self.provider.has_valid_session() {
            return true;
        }
        if !self.redirected.replace(true) {
            log::info!("no session token; redirecting to {LOGIN_PATH}");
            self.navigator.redirect(LOGIN_PATH);
        }
        false
    }

    /// [`check_access`](Self::check_access) as an [`Access`] value.
    pub fn access(&self) -> Access {
        if self.check_access() { Access::Granted } else { Access::Denied }
    }

    #[must_use]
    pub fn has_redirected(&self) -> bool {
        self.redirected.get()
    }
}
