//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard panels while reading/writing shared state
//! from Leptos context providers.

pub mod alert_list;
pub mod carbon_panel;
pub mod chart_host;
pub mod chat_panel;
