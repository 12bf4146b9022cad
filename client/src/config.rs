//! Build-time client configuration.
//!
//! The backend base URL is baked in at compile time from
//! `MINEMIND_BACKEND_URL`; the login path and token key are fixed.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when `MINEMIND_BACKEND_URL` is unset at build time.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Static login resource unauthenticated visitors are sent to.
pub const LOGIN_PATH: &str = "/login.html";

/// `localStorage` key holding the session token.
pub const SESSION_TOKEN_KEY: &str = "token";

/// Backend base URL without a trailing slash.
#[must_use]
pub fn backend_base_url() -> String {
    normalize_base_url(option_env!("MINEMIND_BACKEND_URL"))
}

fn normalize_base_url(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_BACKEND_URL)
        .trim_end_matches('/')
        .to_owned()
}
