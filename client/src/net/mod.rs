//! Networking for the co-pilot backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls behind the [`api::DashboardBackend`] seam and
//! `types` defines the wire schema those calls decode into.

pub mod api;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;
