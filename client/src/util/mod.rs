//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, navigation, clock) and
//! pure projections (chart data, markdown) from page and component logic.

pub mod chart_data;
pub mod clock;
pub mod markdown;
pub mod session_guard;
