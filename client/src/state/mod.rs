//! Application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `dashboard` holds the fetched feeds and `chat` the co-pilot transcript.
//! Both are plain structs; the app wraps them in `RwSignal`s and provides
//! them via context. Async flows write through [`Store`] so they can be
//! driven against a `RefCell` in tests.

pub mod chat;
pub mod dashboard;

use std::cell::RefCell;

use leptos::prelude::*;

/// Somewhere state of type `T` lives and can be mutated in place.
pub trait Store<T> {
    /// Run `f` against the current value. Returns `None` if the state is gone
    /// (e.g. its reactive owner was disposed).
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> Store<T> for RwSignal<T> {
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<T> Store<T> for RefCell<T> {
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
